use crate::model::minister::{Minister, MinisterRoster, Personality};
use crate::model::stats::{Day, Stats, MAX_ACTIONS};

pub fn initial_stats() -> Stats {
    Stats {
        approval: 75,
        party_unity: 90,
        budget: 250,
        influence: 30,
        media_perception: 45,
        national_security: 70,
        week: 1,
        day: Day::Monday,
        actions_left: MAX_ACTIONS,
    }
}

#[allow(clippy::too_many_arguments)]
fn minister(
    id: &str,
    name: &str,
    role: &str,
    (skill, loyalty, happiness, ambition): (i32, i32, i32, i32),
    goal: &str,
    personality: Personality,
    bio: &str,
    portrait_id: u32,
) -> Minister {
    Minister {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        skill,
        loyalty,
        happiness,
        ambition,
        goal: goal.into(),
        personality,
        bio: bio.into(),
        portrait: format!("https://picsum.photos/id/{}/200/300", portrait_id),
        assigned_role_id: None,
        is_resigned: false,
    }
}

pub fn initial_ministers() -> MinisterRoster {
    use Personality::*;

    MinisterRoster::new(vec![
        minister("m1", "Julian Thorne", "Career Politician", (85, 40, 60, 90),
            "To be Prime Minister", Aggressive, "A shark in a Savile Row suit.", 1),
        minister("m2", "Sarah Jenkins", "Economist", (95, 70, 50, 40),
            "Balanced Books", Stoic, "Indispensable for the budget.", 2),
        minister("m3", "David Wright", "Old Guard", (60, 95, 80, 10),
            "Maintain Tradition", Traditionalist, "A relic of the 80s.", 3),
        minister("m4", "Clara Oswald", "Socialite", (75, 50, 90, 60),
            "Social Reform", Idealist, "Smooths over scandals.", 4),
        minister("m5", "Marcus Black", "Military Int.", (80, 85, 50, 30),
            "Strong Defense", Stoic, "Speaks in clipped sentences.", 5),
        minister("m6", "Elena Vance", "Union Liaison", (70, 60, 40, 75),
            "Workers Rights", Idealist, "A northern firebrand.", 6),
        minister("m7", "Sir Humphrey", "Civil Servant", (99, 30, 50, 50),
            "Status Quo", Traditionalist, "Master of obfuscation.", 7),
        minister("m8", "Victoria Peak", "Investor", (88, 40, 65, 70),
            "Deregulation", Greedy, "Profit is her only language.", 8),
    ])
}
