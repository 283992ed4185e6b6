use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;
use crate::model::dispatch::DispatchKind;
use crate::model::minister::Minister;
use crate::model::pmq::PmqEvaluation;
use crate::model::political_event::PoliticalEvent;
use crate::model::stats::Stats;

/// Everything the narrator needs to write a dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DilemmaRequest {
    pub stats: Stats,
    pub kind: DispatchKind,
    pub linked_minister: Option<Minister>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmqRequest {
    pub question: String,
    pub response: String,
}

/// The external writer of dilemmas and PMQ commentary.
///
/// Implementations may block; the engine calls them off its own thread.
pub trait NarrativeSource: Send + Sync {
    fn generate_dilemma(&self, request: &DilemmaRequest) -> Result<PoliticalEvent, NarrativeError>;

    /// Malformed answers should come back as [`PmqEvaluation::neutral`];
    /// only transport-level failures are errors.
    fn evaluate_response(&self, request: &PmqRequest) -> Result<PmqEvaluation, NarrativeError>;
}
