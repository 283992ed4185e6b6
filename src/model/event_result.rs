use serde::{Deserialize, Serialize};

use crate::model::game_over::GameOverReason;
use crate::model::stats::{Day, DayState, StatDelta};

/// What choosing an option did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResolution {
    pub event_title: String,
    pub option_label: String,
    pub flavour_text: String,
    pub applied: StatDelta,
    pub day_state: DayState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResignationNotice {
    pub minister_id: String,
    pub name: String,
}

impl ResignationNotice {
    pub fn letter(&self) -> String {
        format!("{} has resigned. The letter was very short and very rude.", self.name)
    }
}

/// Outcome of a day advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub day: Day,
    pub week: u32,
    /// Ministers whose suggestion was left on the desk, sorted by id.
    pub ignored: Vec<String>,
    pub resignations: Vec<ResignationNotice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over: Option<GameOverReason>,
}
