use serde::{Deserialize, Serialize};

use crate::model::briefing::pmq_performance;
use crate::model::pmq::PmqEvaluation;
use crate::model::stats::StatDelta;

/// Final rating of a PMQ sitting and what it does to the polls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmqScore {
    pub final_score: i32,
    pub approval_impact: f64,
    pub media_impact: f64,
}

impl PmqScore {
    /// An empty sitting scores 0 rather than dividing by zero.
    pub fn from_scores(scores: &[i32]) -> Self {
        let final_score = if scores.is_empty() {
            0
        } else {
            let sum: i64 = scores.iter().map(|&s| i64::from(s)).sum();
            (sum as f64 / scores.len() as f64).round() as i32
        };

        let swing = f64::from(final_score - 5);
        Self {
            final_score,
            approval_impact: swing * 2.5,
            media_impact: swing * 1.5,
        }
    }

    /// Impacts are rounded half away from zero into whole points.
    pub fn delta(&self) -> StatDelta {
        StatDelta {
            approval: Some(self.approval_impact.round() as i32),
            media_perception: Some(self.media_impact.round() as i32),
            ..Default::default()
        }
    }
}

/// Wrap-up card shown when the Speaker calls time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmqSummary {
    pub score: PmqScore,
    pub performance: String,
    pub results: Vec<PmqEvaluation>,
}

impl PmqSummary {
    pub fn from_results(results: &[PmqEvaluation]) -> Self {
        let scores: Vec<i32> = results.iter().map(|r| r.score).collect();
        let score = PmqScore::from_scores(&scores);
        Self {
            score,
            performance: pmq_performance(score.final_score).to_string(),
            results: results.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PmqProgress {
    Next {
        evaluation: PmqEvaluation,
        question: String,
    },
    Finished {
        evaluation: PmqEvaluation,
        summary: PmqSummary,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_rounded() {
        let score = PmqScore::from_scores(&[8, 6, 10, 4]);
        assert_eq!(score.final_score, 7);
        assert_eq!(score.approval_impact, 5.0);
        assert_eq!(score.media_impact, 3.0);

        assert_eq!(PmqScore::from_scores(&[7, 8]).final_score, 8);
        assert_eq!(PmqScore::from_scores(&[1, 2, 2, 2]).final_score, 2);
    }

    #[test]
    fn empty_sitting_scores_zero() {
        let score = PmqScore::from_scores(&[]);
        assert_eq!(score.final_score, 0);
        assert_eq!(score.approval_impact, -12.5);
    }

    #[test]
    fn delta_rounds_fractional_impacts() {
        let delta = PmqScore::from_scores(&[6, 6, 6, 6]).delta();
        assert_eq!(delta.approval, Some(3));
        assert_eq!(delta.media_perception, Some(2));

        let delta = PmqScore::from_scores(&[4]).delta();
        assert_eq!(delta.approval, Some(-3));
        assert_eq!(delta.media_perception, Some(-2));
        assert_eq!(delta.budget, None);
    }
}
