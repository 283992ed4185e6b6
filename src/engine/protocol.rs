use crate::engine::pmq::PmqProgress;
use crate::error::GameError;
use crate::model::event_result::{DayReport, EventResolution};
use crate::model::game_over::GameOverReason;
use crate::model::game_state::{GameSnapshot, Screen};
use crate::model::political_event::PoliticalEvent;

/// Things the player can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerIntent {
    ChooseDispatch(String),
    ResolveEvent(usize),
    AssignMinister {
        minister_id: String,
        role_id: Option<String>,
    },
    SubmitPmqResponse(String),
    AdvanceDay,
    Navigate(Screen),
}

pub enum EngineCommand {
    Intent(PlayerIntent),
    /// Re-send the current snapshot.
    Refresh,
    /// Abandon this premiership and start over.
    Reset,
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum EngineResponse {
    Snapshot(Box<GameSnapshot>),

    /// A narrator call (or the end-of-day shuffle) has started.
    Processing,

    EventReady(PoliticalEvent),

    EventResolved(EventResolution),

    Pmq(PmqProgress),

    DayAdvanced(DayReport),

    /// The intent was refused. `retryable` marks narrator failures.
    Rejected {
        error: GameError,
        retryable: bool,
    },

    /// Terminal. The engine resets straight after sending this.
    GameOver {
        reason: GameOverReason,
        message: String,
    },
}

impl EngineResponse {
    pub fn rejected(error: GameError) -> Self {
        let retryable = error.is_retryable();
        EngineResponse::Rejected { error, retryable }
    }
}
