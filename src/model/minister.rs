use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::model::stats::{clamp_percent, StatDelta, Stats};
use crate::rng::RandomSource;

/// Happiness lost by a minister whose suggestion sat unanswered all day.
pub const IGNORED_HAPPINESS_PENALTY: i32 = 12;
/// Below this happiness a minister may walk out.
pub const RESIGNATION_THRESHOLD: i32 = 20;
pub const RESIGNATION_CHANCE: f64 = 0.3;
pub const ASSIGNMENT_UNITY_BONUS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Aggressive,
    Stoic,
    Greedy,
    Idealist,
    Traditionalist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minister {
    pub id: String,
    pub name: String,
    /// Background label, not the cabinet post.
    pub role: String,
    pub skill: i32,
    pub loyalty: i32,
    pub happiness: i32,
    pub ambition: i32,
    pub goal: String,
    pub personality: Personality,
    pub bio: String,
    pub portrait: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role_id: Option<String>,
    #[serde(default)]
    pub is_resigned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: &'static str,
    pub label: &'static str,
}

pub const ROLES: [Role; 6] = [
    Role { id: "chancellor", label: "Chancellor of the Exchequer" },
    Role { id: "home_sec", label: "Home Secretary" },
    Role { id: "foreign_sec", label: "Foreign Secretary" },
    Role { id: "energy_min", label: "Minister for Energy" },
    Role { id: "health_sec", label: "Secretary for Health" },
    Role { id: "mi5_dg", label: "Director General of MI5" },
];

pub fn find_role(id: &str) -> Option<&'static Role> {
    ROLES.iter().find(|r| r.id == id)
}

/// A named happiness adjustment coming out of a dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HappinessChange {
    pub minister_name: String,
    pub happiness_delta: i32,
}

/// What a day of attrition did to the cabinet.
#[derive(Debug, Clone)]
pub struct Attrition {
    pub roster: MinisterRoster,
    /// Ids of ministers who resigned, in roster order.
    pub resigned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinisterRoster {
    ministers: Vec<Minister>,
}

impl MinisterRoster {
    pub fn new(ministers: Vec<Minister>) -> Self {
        Self { ministers }
    }

    pub fn all(&self) -> &[Minister] {
        &self.ministers
    }

    pub fn get(&self, id: &str) -> Option<&Minister> {
        self.ministers.iter().find(|m| m.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Minister> {
        self.ministers.iter().find(|m| m.name == name)
    }

    pub fn active_ministers(&self) -> impl Iterator<Item = &Minister> {
        self.ministers.iter().filter(|m| !m.is_resigned)
    }

    pub fn holder_of(&self, role_id: &str) -> Option<&Minister> {
        self.ministers
            .iter()
            .find(|m| m.assigned_role_id.as_deref() == Some(role_id))
    }

    /// Put a minister into a cabinet post, or bench them with `None`.
    ///
    /// Whoever held the post before loses it. Any reshuffle buys a little
    /// party unity, which is why the updated stats come back alongside the
    /// roster.
    pub fn assign(
        &self,
        stats: &Stats,
        minister_id: &str,
        role_id: Option<&str>,
    ) -> Result<(MinisterRoster, Stats), GameError> {
        let target = self
            .get(minister_id)
            .ok_or_else(|| GameError::UnknownMinister(minister_id.to_string()))?;
        if target.is_resigned {
            return Err(GameError::MinisterResigned(target.name.clone()));
        }

        let role_id = role_id.filter(|r| !r.is_empty());
        if let Some(role_id) = role_id {
            if find_role(role_id).is_none() {
                return Err(GameError::UnknownRole(role_id.to_string()));
            }
        }

        let mut ministers = self.ministers.clone();
        for m in ministers.iter_mut() {
            if m.id == minister_id {
                m.assigned_role_id = role_id.map(str::to_string);
            } else if role_id.is_some() && m.assigned_role_id.as_deref() == role_id {
                m.assigned_role_id = None;
            }
        }

        let stats = stats.apply_delta(&StatDelta {
            party_unity: Some(ASSIGNMENT_UNITY_BONUS),
            ..Default::default()
        });

        Ok((MinisterRoster { ministers }, stats))
    }

    /// End-of-day churn: ignored ministers sulk, and the very unhappy may quit.
    ///
    /// One random draw is taken per non-resigned minister under the
    /// threshold, in roster order.
    pub fn apply_daily_attrition(
        &self,
        ignored: &HashSet<String>,
        rng: &mut dyn RandomSource,
    ) -> Attrition {
        let mut ministers = self.ministers.clone();
        let mut resigned = Vec::new();

        for m in ministers.iter_mut().filter(|m| !m.is_resigned) {
            if ignored.contains(&m.id) {
                m.happiness = (m.happiness - IGNORED_HAPPINESS_PENALTY).max(0);
            }

            if m.happiness < RESIGNATION_THRESHOLD && rng.next_f64() < RESIGNATION_CHANCE {
                m.is_resigned = true;
                m.assigned_role_id = None;
                resigned.push(m.id.clone());
            }
        }

        Attrition {
            roster: MinisterRoster { ministers },
            resigned,
        }
    }

    /// Unmatched names are ignored; duplicates resolve to the first match.
    #[must_use]
    pub fn apply_happiness_deltas(&self, changes: &[HappinessChange]) -> MinisterRoster {
        let mut ministers = self.ministers.clone();

        for change in changes {
            if let Some(m) = ministers.iter_mut().find(|m| m.name == change.minister_name) {
                m.happiness = clamp_percent(m.happiness.saturating_add(change.happiness_delta));
            }
        }

        MinisterRoster { ministers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;
    use crate::model::constants::{initial_ministers, initial_stats};

    fn roster() -> MinisterRoster {
        initial_ministers()
    }

    #[test]
    fn assign_takes_role_from_previous_holder() {
        let stats = initial_stats();
        let (roster, stats) = roster().assign(&stats, "m1", Some("chancellor")).unwrap();
        let (roster, stats) = roster.assign(&stats, "m2", Some("chancellor")).unwrap();

        assert_eq!(roster.get("m2").unwrap().assigned_role_id.as_deref(), Some("chancellor"));
        assert_eq!(roster.get("m1").unwrap().assigned_role_id, None);
        let holders = roster
            .all()
            .iter()
            .filter(|m| m.assigned_role_id.as_deref() == Some("chancellor"))
            .count();
        assert_eq!(holders, 1);
        assert_eq!(stats.party_unity, 94);
    }

    #[test]
    fn assign_moves_minister_between_roles() {
        let stats = initial_stats();
        let (roster, _) = roster().assign(&stats, "m5", Some("mi5_dg")).unwrap();
        let (roster, _) = roster.assign(&stats, "m5", Some("home_sec")).unwrap();
        assert!(roster.holder_of("mi5_dg").is_none());
        assert_eq!(roster.holder_of("home_sec").unwrap().id, "m5");
    }

    #[test]
    fn empty_role_benches_minister() {
        let stats = initial_stats();
        let (roster, _) = roster().assign(&stats, "m3", Some("home_sec")).unwrap();
        let (roster, _) = roster.assign(&stats, "m3", Some("")).unwrap();
        assert_eq!(roster.get("m3").unwrap().assigned_role_id, None);
        let (roster, _) = roster.assign(&stats, "m3", None).unwrap();
        assert!(roster.holder_of("home_sec").is_none());
    }

    #[test]
    fn assign_unity_bonus_is_clamped() {
        let mut stats = initial_stats();
        stats.party_unity = 99;
        let (_, stats) = roster().assign(&stats, "m1", Some("chancellor")).unwrap();
        assert_eq!(stats.party_unity, 100);
    }

    #[test]
    fn assign_rejects_bad_input() {
        let stats = initial_stats();
        assert_eq!(
            roster().assign(&stats, "nobody", None).unwrap_err(),
            GameError::UnknownMinister("nobody".into())
        );
        assert_eq!(
            roster().assign(&stats, "m1", Some("archbishop")).unwrap_err(),
            GameError::UnknownRole("archbishop".into())
        );

        let mut ministers = roster().all().to_vec();
        ministers[0].is_resigned = true;
        let roster = MinisterRoster::new(ministers);
        assert!(matches!(
            roster.assign(&stats, "m1", Some("chancellor")),
            Err(GameError::MinisterResigned(_))
        ));
    }

    #[test]
    fn ignored_minister_loses_happiness_floor_zero() {
        let mut ministers = roster().all().to_vec();
        ministers[0].happiness = 5;
        let roster = MinisterRoster::new(ministers);
        let ignored: HashSet<String> = ["m1".to_string(), "m2".to_string()].into();

        // 0.99 never resigns
        let out = roster.apply_daily_attrition(&ignored, &mut ScriptedRandom::constant(0.99));
        assert_eq!(out.roster.get("m1").unwrap().happiness, 0);
        assert_eq!(out.roster.get("m2").unwrap().happiness, 38);
        assert_eq!(out.roster.get("m3").unwrap().happiness, 80);
        assert!(out.resigned.is_empty());
    }

    #[test]
    fn unhappy_minister_resigns_on_low_roll() {
        let mut ministers = roster().all().to_vec();
        ministers[5].happiness = 15;
        ministers[5].assigned_role_id = Some("energy_min".into());
        let roster = MinisterRoster::new(ministers);

        let out = roster.apply_daily_attrition(&HashSet::new(), &mut ScriptedRandom::constant(0.1));
        let elena = out.roster.get("m6").unwrap();
        assert!(elena.is_resigned);
        assert_eq!(elena.assigned_role_id, None);
        assert_eq!(out.resigned, vec!["m6".to_string()]);
        assert!(out.roster.holder_of("energy_min").is_none());
    }

    #[test]
    fn resigned_ministers_are_untouched() {
        let mut ministers = roster().all().to_vec();
        ministers[1].happiness = 4;
        ministers[1].is_resigned = true;
        ministers[1].assigned_role_id = Some("chancellor".into());
        let roster = MinisterRoster::new(ministers);
        let ignored: HashSet<String> = ["m2".to_string()].into();

        let out = roster.apply_daily_attrition(&ignored, &mut ScriptedRandom::constant(0.0));
        let sarah = out.roster.get("m2").unwrap();
        assert_eq!(sarah.happiness, 4);
        assert_eq!(sarah.assigned_role_id.as_deref(), Some("chancellor"));
        assert!(out.resigned.is_empty());
    }

    #[test]
    fn happiness_deltas_match_by_name_and_clamp() {
        let changes = vec![
            HappinessChange { minister_name: "Julian Thorne".into(), happiness_delta: 70 },
            HappinessChange { minister_name: "Elena Vance".into(), happiness_delta: -55 },
            HappinessChange { minister_name: "Nobody Important".into(), happiness_delta: 10 },
        ];
        let updated = roster().apply_happiness_deltas(&changes);
        assert_eq!(updated.by_name("Julian Thorne").unwrap().happiness, 100);
        assert_eq!(updated.by_name("Elena Vance").unwrap().happiness, 0);
        assert_eq!(updated.by_name("Sir Humphrey").unwrap().happiness, 50);
    }

    #[test]
    fn active_ministers_skip_resigned() {
        let mut ministers = roster().all().to_vec();
        ministers[2].is_resigned = true;
        let roster = MinisterRoster::new(ministers);
        assert_eq!(roster.active_ministers().count(), 7);
        assert!(roster.active_ministers().all(|m| m.id != "m3"));
    }
}
