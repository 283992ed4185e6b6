use crate::model::minister::MinisterRoster;
use crate::model::political_event::EventOption;
use crate::model::stats::Stats;

/// Apply the chosen option of a dilemma. Deterministic, returns fresh state.
pub fn apply_option(
    stats: &Stats,
    roster: &MinisterRoster,
    option: &EventOption,
) -> (Stats, MinisterRoster) {
    let consequences = &option.consequences;

    let stats = stats.apply_delta(&consequences.stats);
    let roster = if consequences.minister_happiness.is_empty() {
        roster.clone()
    } else {
        roster.apply_happiness_deltas(&consequences.minister_happiness)
    };

    (stats, roster)
}
