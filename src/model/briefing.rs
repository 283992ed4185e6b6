//! Canned commentary keyed off the numbers. Flavour only; nothing here
//! feeds back into game state.

use serde::Serialize;

use crate::model::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressStory {
    pub source: &'static str,
    pub text: &'static str,
}

pub const PRESS_STORIES: [PressStory; 4] = [
    PressStory { source: "The Times", text: "Senior sources suggest the PM is eyeing a radical shift in energy policy." },
    PressStory { source: "The Daily Mail", text: "OUR READERS DEMAND ACTION: Why isn't the Chancellor doing more?" },
    PressStory { source: "The Guardian", text: "Disquiet in the North as budget cuts threaten local services." },
    PressStory { source: "BBC News", text: "Breaking: MI5 warning suggests increased risks to national security." },
];

pub fn media_headline(media_perception: i32) -> &'static str {
    match media_perception {
        p if p > 75 => "PRIME MINISTER TRIUMPHANT: A GOLDEN ERA BEGINS",
        p if p > 50 => "Government Holds Steady Amidst Global Headwinds",
        p if p > 30 => "Chaos in Cabinet: Number 10 Struggles to Lead",
        _ => "NATIONAL DISGRACE: RESIGNATION CALLS INTENSIFY",
    }
}

pub fn unity_memo(party_unity: i32) -> &'static str {
    match party_unity {
        u if u > 80 => "The knives are temporarily sheathed.",
        u if u > 40 => "Whispers in the tea rooms are growing louder.",
        _ => "Check your back for sharp objects, PM.",
    }
}

pub fn economy_memo(budget: i32) -> &'static str {
    match budget {
        b if b > 100 => "Treasury surplus is looking healthy. Briefly.",
        b if b > 0 => "We're spending like sailors on leave.",
        _ => "The Chancellor is hyperventilating in a cupboard.",
    }
}

pub fn pmq_performance(final_score: i32) -> &'static str {
    match final_score {
        s if s >= 8 => "A masterclass in parliamentary debate. The opposition is in tatters.",
        s if s >= 6 => "A solid performance. You held the line with dignity.",
        s if s >= 4 => "A mediocre display. The backbenchers are grumbling.",
        _ => "A total disaster. The press is already sharpening their knives.",
    }
}

/// Everything the morning red box says about the current numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Briefing {
    /// Counts from 1 on the first Monday.
    pub day_in_office: u32,
    pub headline: &'static str,
    pub unity: &'static str,
    pub economy: &'static str,
    pub stories: &'static [PressStory],
}

impl Briefing {
    pub fn for_stats(stats: &Stats) -> Self {
        Self {
            day_in_office: stats.days_elapsed() + 1,
            headline: media_headline(stats.media_perception),
            unity: unity_memo(stats.party_unity),
            economy: economy_memo(stats.budget),
            stories: &PRESS_STORIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::initial_stats;
    use crate::model::stats::Day;

    #[test]
    fn bands_use_strict_thresholds() {
        assert_eq!(media_headline(76), "PRIME MINISTER TRIUMPHANT: A GOLDEN ERA BEGINS");
        assert_eq!(media_headline(75), "Government Holds Steady Amidst Global Headwinds");
        assert_eq!(media_headline(30), "NATIONAL DISGRACE: RESIGNATION CALLS INTENSIFY");
        assert_eq!(unity_memo(80), "Whispers in the tea rooms are growing louder.");
        assert_eq!(economy_memo(0), "The Chancellor is hyperventilating in a cupboard.");
        assert_eq!(pmq_performance(8), "A masterclass in parliamentary debate. The opposition is in tatters.");
        assert_eq!(pmq_performance(3), "A total disaster. The press is already sharpening their knives.");
    }

    #[test]
    fn briefing_carries_date_and_memos() {
        let mut stats = initial_stats();
        let first = Briefing::for_stats(&stats);
        assert_eq!(first.day_in_office, 1);
        assert_eq!(first.unity, "The knives are temporarily sheathed.");
        assert_eq!(first.economy, "Treasury surplus is looking healthy. Briefly.");

        stats.week = 2;
        stats.day = Day::Wednesday;
        stats.party_unity = 40;
        stats.budget = -5;
        let later = Briefing::for_stats(&stats);
        assert_eq!(later.day_in_office, 10);
        assert_eq!(later.unity, "Check your back for sharp objects, PM.");
        assert_eq!(later.economy, "The Chancellor is hyperventilating in a cupboard.");
    }
}
