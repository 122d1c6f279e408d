/// A state slice driven by actions.
///
/// `reduce` is the only place the slice changes. It runs synchronously to
/// completion for every action before the next one is dispatched.
pub trait Reducer {
    type Action;

    type State: Default;

    fn reduce(action: &Self::Action, state: &mut Self::State);

    fn initial_state() -> Self::State {
        Self::State::default()
    }
}
