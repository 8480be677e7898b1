//! Error types.
//!
//! A rejected choice never mutates state: every entrypoint validates first
//! and only then commits.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Why a choice is not available right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LockReason {
    #[error("the choice does not apply during the {0} phase")]
    WrongPhase(Phase),

    #[error("there is no active card to resolve")]
    NoActiveCard,

    #[error("the partner has no active card")]
    PartnerHasNoCard,

    #[error("a Soloist can only resolve a partner's card while in Flow")]
    SoloistNeedsFlow,

    #[error("a Soloist cannot comfort")]
    SoloistCannotComfort,

    #[error("comfort is worth nothing in the current status")]
    ComfortDepleted,

    #[error("all assist charges are spent")]
    AssistChargesSpent,

    #[error("only one assist per sprint")]
    AssistUsedThisSprint,

    #[error("only a Sprinter can sprint")]
    NotASprinter,

    #[error("already sprinting")]
    AlreadySprinting,

    #[error("this slot must be spent on active recovery")]
    RecoveryDue,

    #[error("active recovery is only available on a recovery turn")]
    RecoveryNotDue,

    #[error("nobody is offered an absorb")]
    NoAbsorbOffer,

    #[error("absorb amount must be between 0 and {max}")]
    AbsorbOutOfRange { max: i32 },
}

/// Errors surfaced to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The submitted choice is locked or nonexistent; the actor keeps the slot.
    #[error("invalid choice: {0}")]
    InvalidChoice(#[from] LockReason),

    /// The game has ended; only report export and reset remain.
    #[error("the game is over")]
    GameOver,

    /// Undo was requested with no checkpoint held.
    #[error("nothing to undo")]
    NothingToUndo,

    /// New-game parameters were rejected.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    /// A session blob could not be encoded or decoded.
    #[error("session blob: {0}")]
    Session(String),
}

/// Result type used throughout the engine.
pub type RainResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_reason_converts() {
        let err: GameError = LockReason::SoloistCannotComfort.into();
        assert_eq!(err, GameError::InvalidChoice(LockReason::SoloistCannotComfort));
        assert_eq!(err.to_string(), "invalid choice: a Soloist cannot comfort");
    }

    #[test]
    fn test_phase_in_message() {
        let err = LockReason::WrongPhase(Phase::AtlasIntervention);
        assert_eq!(
            err.to_string(),
            "the choice does not apply during the Atlas_Intervention phase"
        );
    }
}
