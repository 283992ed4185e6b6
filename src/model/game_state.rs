use serde::{Deserialize, Serialize};

use crate::model::dispatch::DispatchAction;
use crate::model::game_over::GameOverReason;
use crate::model::minister::MinisterRoster;
use crate::model::political_event::PoliticalEvent;
use crate::model::stats::{DayState, Stats};

/// Which page the player is looking at. Purely presentational apart from
/// `Event` and `Pmq`, which need something to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    Cabinet,
    Characters,
    Media,
    Event,
    Pmq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseKind {
    Ready,
    Processing,
    Event,
    Pmq { question_number: usize },
    GameOver { reason: GameOverReason },
}

/// A full snapshot of the session for the presentation layer.
/// This is READ-ONLY outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub stats: Stats,
    pub ministers: MinisterRoster,
    pub dispatch: Vec<DispatchAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_event: Option<PoliticalEvent>,
    pub phase: PhaseKind,
    pub screen: Screen,
    pub day_state: DayState,
    pub pmq_done_today: bool,
    pub pmq_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmq_question: Option<String>,
}
