//! First-class invariants over a game's history.
//!
//! Invariants are logical properties that must hold for every reachable
//! `GameState`. They back the move postcondition and are testable on their
//! own.

mod alternating_turn;
mod single_cell_delta;
mod step_in_range;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_range::StepInRangeInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants so sets compose at the type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// All history invariants as a composable set.
///
/// `StepInRangeInvariant` comes first so a malformed history is reported
/// before the per-step checks look at it.
pub type RewindInvariants = (
    StepInRangeInvariant,
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;
    use crate::types::{Board, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(RewindInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jump() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(4)
            .apply_move(8)
            .jump_to_step(1)
            .unwrap()
            .apply_move(2);
        assert!(RewindInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        // O plays first and fills two cells at once.
        let bad = Board::new()
            .with_mark(0, Player::O)
            .and_then(|b| b.with_mark(1, Player::O))
            .unwrap();
        let state = GameState::from_parts(vec![Board::new(), bad], 1);

        let violations = RewindInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            SingleCellDeltaInvariant::description()
        );
        assert_eq!(
            violations[1].description,
            AlternatingTurnInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StepInRangeInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameState::new().apply_move(3)).is_ok());
    }
}
