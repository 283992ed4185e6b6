use thiserror::Error;

/// Failures talking to the narrative source. All of them leave the game
/// untouched and can be retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NarrativeError {
    #[error("narrative source timed out")]
    Timeout,

    #[error("could not reach narrative source: {0}")]
    Transport(String),

    #[error("narrative source answered with HTTP {0}")]
    Status(u16),

    #[error("narrative source returned no completion")]
    EmptyCompletion,

    #[error("malformed narrative payload: {0}")]
    Malformed(String),
}

/// Why the session refused an intent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the civil service is still working on the last request")]
    Busy,

    #[error("no actions left today")]
    NoActionsLeft,

    #[error("no dispatch with id '{0}' on the desk")]
    UnknownDispatch(String),

    #[error("there is no dilemma awaiting a decision")]
    NoActiveEvent,

    #[error("option {index} does not exist (dilemma has {available})")]
    OptionOutOfRange { index: usize, available: usize },

    #[error("Prime Minister's Questions are not available right now")]
    PmqUnavailable,

    #[error("no PMQ session in progress")]
    NoPmqSession,

    #[error("unknown response card '{0}'")]
    UnknownResponseCard(String),

    #[error("unknown minister '{0}'")]
    UnknownMinister(String),

    #[error("{0} has resigned and cannot be appointed")]
    MinisterResigned(String),

    #[error("unknown cabinet role '{0}'")]
    UnknownRole(String),

    #[error("not possible while {0}")]
    WrongPhase(&'static str),

    #[error("the government has fallen; start a new game")]
    GameOver,

    #[error("communication with the civil service failed: {0}. Try again.")]
    Narrative(#[from] NarrativeError),
}

impl GameError {
    /// Narrative failures are worth retrying; everything else is a rejected
    /// transition.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GameError::Narrative(_))
    }
}
