use std::fmt;

use serde::{Deserialize, Serialize};

pub const MAX_ACTIONS: u8 = 3;

/// Clamp a percentage-like stat into [0, 100].
pub fn clamp_percent(value: i32) -> i32 {
    value.clamp(0, 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next weekday, wrapping Sunday back to Monday.
    pub fn next(self) -> Day {
        Day::ALL[(self.index() + 1) % Day::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the player stands within the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    AwaitingPlayerAction,
    DayComplete,
}

/// The government's numbers plus the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub approval: i32,
    pub party_unity: i32,
    /// Billions of pounds. Unbounded; going deep negative ends the game.
    pub budget: i32,
    pub influence: i32,
    pub media_perception: i32,
    pub national_security: i32,
    pub week: u32,
    pub day: Day,
    pub actions_left: u8,
}

/// Sparse change to the six government stats. Absent fields mean no change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_unity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_perception: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_security: Option<i32>,
}

impl Stats {
    #[must_use]
    pub fn apply_delta(&self, delta: &StatDelta) -> Stats {
        let shift = |old: i32, d: Option<i32>| clamp_percent(old.saturating_add(d.unwrap_or(0)));

        Stats {
            approval: shift(self.approval, delta.approval),
            party_unity: shift(self.party_unity, delta.party_unity),
            budget: self.budget.saturating_add(delta.budget.unwrap_or(0)),
            influence: shift(self.influence, delta.influence),
            media_perception: shift(self.media_perception, delta.media_perception),
            national_security: shift(self.national_security, delta.national_security),
            ..*self
        }
    }

    #[must_use]
    pub fn advance_day(&self) -> Stats {
        let day = self.day.next();
        let week = if day == Day::Monday {
            self.week + 1
        } else {
            self.week
        };

        Stats {
            day,
            week,
            actions_left: MAX_ACTIONS,
            ..*self
        }
    }

    /// Saturates at zero. Callers gate action-consuming choices on
    /// `actions_left > 0` themselves.
    #[must_use]
    pub fn spend_action(&self) -> Stats {
        Stats {
            actions_left: self.actions_left.saturating_sub(1),
            ..*self
        }
    }

    pub fn day_state(&self) -> DayState {
        if self.actions_left > 0 {
            DayState::AwaitingPlayerAction
        } else {
            DayState::DayComplete
        }
    }

    pub fn days_elapsed(&self) -> u32 {
        self.week.saturating_sub(1) * 7 + self.day.index() as u32
    }
}
