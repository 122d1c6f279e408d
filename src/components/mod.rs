pub mod gravatar_status;
