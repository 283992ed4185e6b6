use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchKind {
    Intelligence,
    EconomicData,
    PublicVisit,
    ForeignCall,
    Press,
    MinisterSuggestion,
}

impl DispatchKind {
    pub const ALL: [DispatchKind; 6] = [
        DispatchKind::Intelligence,
        DispatchKind::EconomicData,
        DispatchKind::PublicVisit,
        DispatchKind::ForeignCall,
        DispatchKind::Press,
        DispatchKind::MinisterSuggestion,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DispatchKind::Intelligence => "intelligence",
            DispatchKind::EconomicData => "economic-data",
            DispatchKind::PublicVisit => "public-visit",
            DispatchKind::ForeignCall => "foreign-call",
            DispatchKind::Press => "press",
            DispatchKind::MinisterSuggestion => "minister-suggestion",
        }
    }

    /// Fixed title/description for every kind except minister suggestions,
    /// which are written around the minister.
    pub fn template(self) -> Option<(&'static str, &'static str)> {
        match self {
            DispatchKind::Intelligence => Some((
                "Ukraine Strategy",
                "Classified intelligence on Russian movements. MI5 awaits your call.",
            )),
            DispatchKind::EconomicData => Some((
                "OBR Economic Data",
                "The Office for Budget Responsibility has revised growth. Spoiler: It's bad.",
            )),
            DispatchKind::PublicVisit => Some((
                "Cost of Living Protest",
                "Angry citizens in Whitehall. Wear your most 'man of the people' tie.",
            )),
            DispatchKind::ForeignCall => Some((
                "Call: President Grump",
                "The Grump Administration is calling. Again. Something about trade tariffs.",
            )),
            DispatchKind::Press => Some((
                "EU Rejoiner Briefing",
                "A new poll shows 54% want back in. Prepare your best 'No' face.",
            )),
            DispatchKind::MinisterSuggestion => None,
        }
    }
}

impl fmt::Display for DispatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One card on the Prime Minister's desk for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchAction {
    pub id: String,
    pub kind: DispatchKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_minister_id: Option<String>,
}
