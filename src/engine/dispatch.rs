use crate::model::dispatch::{DispatchAction, DispatchKind};
use crate::model::minister::MinisterRoster;
use crate::model::stats::Day;
use crate::rng::{shuffle, RandomSource};

pub const DISPATCH_BATCH_SIZE: usize = 4;

/// Deal today's four dispatches: a random pick of distinct kinds, in shuffled
/// order. Ids are unique within the batch.
pub fn generate_daily_dispatch(
    day: Day,
    roster: &MinisterRoster,
    rng: &mut dyn RandomSource,
) -> Vec<DispatchAction> {
    let mut kinds = DispatchKind::ALL;
    shuffle(&mut kinds, rng);

    kinds
        .iter()
        .take(DISPATCH_BATCH_SIZE)
        .enumerate()
        .map(|(i, &kind)| {
            let id = format!("d-{}-{}", day, i);
            match kind.template() {
                Some((title, description)) => DispatchAction {
                    id,
                    kind,
                    title: title.to_string(),
                    description: description.to_string(),
                    linked_minister_id: None,
                },
                None => minister_suggestion(id, roster, rng),
            }
        })
        .collect()
}

fn minister_suggestion(
    id: String,
    roster: &MinisterRoster,
    rng: &mut dyn RandomSource,
) -> DispatchAction {
    let active: Vec<_> = roster.active_ministers().collect();

    if active.is_empty() {
        return DispatchAction {
            id,
            kind: DispatchKind::MinisterSuggestion,
            title: "Proposal: Vacant Desk".to_string(),
            description: "Nobody is left to suggest anything. The silence is deafening.".to_string(),
            linked_minister_id: None,
        };
    }

    let chosen = active[rng.next_index(active.len())];
    DispatchAction {
        id,
        kind: DispatchKind::MinisterSuggestion,
        title: format!("Proposal: {}", chosen.name),
        description: format!(
            "A matter of {}. Urgency: High. Patience: Low.",
            chosen.goal.to_lowercase()
        ),
        linked_minister_id: Some(chosen.id.clone()),
    }
}
