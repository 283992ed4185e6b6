use serde::{Deserialize, Serialize};

use crate::model::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    PublicUprising,
    NoConfidence,
    FiscalCollapse,
    SecurityCollapse,
}

impl GameOverReason {
    pub fn message(self) -> &'static str {
        match self {
            GameOverReason::PublicUprising => {
                "Downing Street has been stormed. The public is not amused."
            }
            GameOverReason::NoConfidence => {
                "A vote of no confidence. Your own party has knifed you."
            }
            GameOverReason::FiscalCollapse => {
                "The IMF has taken control of the Treasury. We're broke."
            }
            GameOverReason::SecurityCollapse => {
                "A catastrophe has occurred. The country is in shambles."
            }
        }
    }
}

/// First matching ending wins, in the order below.
pub fn check_game_over(stats: &Stats) -> Option<GameOverReason> {
    if stats.approval <= 5 {
        return Some(GameOverReason::PublicUprising);
    }
    if stats.party_unity <= 10 {
        return Some(GameOverReason::NoConfidence);
    }
    if stats.budget <= -800 {
        return Some(GameOverReason::FiscalCollapse);
    }
    if stats.national_security <= 5 {
        return Some(GameOverReason::SecurityCollapse);
    }
    None
}
