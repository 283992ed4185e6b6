use serde::{Deserialize, Serialize};

use crate::model::minister::HappinessChange;
use crate::model::stats::StatDelta;

/// What picking an option does. Every field is optional on the wire; the
/// decoder fills gaps with zero/empty before anything reaches here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consequences {
    #[serde(flatten)]
    pub stats: StatDelta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minister_happiness: Vec<HappinessChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOption {
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub flavour_text: String,
    #[serde(default)]
    pub consequences: Consequences,
}

/// A dilemma on the desk. Lives until exactly one option is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticalEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub options: Vec<EventOption>,
}

pub fn event_image_url(event_id: &str) -> String {
    format!("https://picsum.photos/seed/{}/800/400?grayscale", event_id)
}
