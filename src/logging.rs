use env_logger::Env;
use std::io::Write;

/// Install the `env_logger` backend. `RUST_LOG` overrides `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init()
}
