use serde::{Deserialize, Serialize};

pub const PMQ_QUESTIONS: [&str; 4] = [
    "Does the Prime Minister agree that the current energy crisis is a direct result of government negligence?",
    "With the budget deficit rising, how can the PM justify the latest tax cuts for corporations?",
    "The House of Lords has rejected the new immigration bill. What is the PM's plan to bypass this blockage?",
    "Public services are crumbling. Will the PM admit their policy is failing?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStyle {
    Aggressive,
    Defensive,
    Witty,
    Statistical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseCard {
    pub id: &'static str,
    pub label: &'static str,
    pub style: ResponseStyle,
    /// Nominal punch of the card, shown to the player only.
    pub impact: i32,
}

pub const RESPONSE_CARDS: [ResponseCard; 6] = [
    ResponseCard { id: "r1", label: "Deflect to Previous Admin", style: ResponseStyle::Aggressive, impact: 5 },
    ResponseCard { id: "r2", label: "Focus on Long-Term Plan", style: ResponseStyle::Defensive, impact: 7 },
    ResponseCard { id: "r3", label: "Quick-Witted Retort", style: ResponseStyle::Witty, impact: 10 },
    ResponseCard { id: "r4", label: "Cite Economic Growth", style: ResponseStyle::Statistical, impact: 8 },
    ResponseCard { id: "r5", label: "Apologize and Promise Action", style: ResponseStyle::Defensive, impact: 4 },
    ResponseCard { id: "r6", label: "Mock the Opposition Leader", style: ResponseStyle::Aggressive, impact: 12 },
];

pub fn find_card(label: &str) -> Option<&'static ResponseCard> {
    RESPONSE_CARDS.iter().find(|c| c.label == label)
}

/// The Speaker's verdict on one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmqEvaluation {
    pub score: i32,
    pub commentary: String,
}

impl PmqEvaluation {
    pub fn neutral() -> Self {
        Self {
            score: 5,
            commentary: "Order! Order in the house.".to_string(),
        }
    }
}

/// Progress through one sitting of the Commons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmqSession {
    results: Vec<PmqEvaluation>,
}

impl PmqSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question waiting for an answer, or `None` once all are answered.
    pub fn current_question(&self) -> Option<&'static str> {
        PMQ_QUESTIONS.get(self.results.len()).copied()
    }

    pub fn question_number(&self) -> usize {
        self.results.len() + 1
    }

    pub fn results(&self) -> &[PmqEvaluation] {
        &self.results
    }

    pub fn record(&mut self, evaluation: PmqEvaluation) {
        self.results.push(evaluation);
    }

    pub fn is_finished(&self) -> bool {
        self.results.len() >= PMQ_QUESTIONS.len()
    }
}
