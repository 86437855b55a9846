use super::TerminationCondition;

/// Never asks the search to stop, so it runs until a goal is found or the frontier is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
