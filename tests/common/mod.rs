#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use whitehall_dispatch::engine::narrative::{DilemmaRequest, NarrativeSource, PmqRequest};
use whitehall_dispatch::error::NarrativeError;
use whitehall_dispatch::model::dispatch::{DispatchAction, DispatchKind};
use whitehall_dispatch::model::minister::HappinessChange;
use whitehall_dispatch::model::pmq::PmqEvaluation;
use whitehall_dispatch::model::political_event::{Consequences, EventOption, PoliticalEvent};
use whitehall_dispatch::model::stats::StatDelta;

/// A narrator that always writes the same dilemma and the same verdict.
pub struct StubNarrator {
    pub event: PoliticalEvent,
    pub evaluation: PmqEvaluation,
    pub delay: Duration,
    pub fail_with: Option<NarrativeError>,
    pub calls: AtomicUsize,
}

impl StubNarrator {
    pub fn new(event: PoliticalEvent) -> Self {
        Self {
            event,
            evaluation: PmqEvaluation {
                score: 8,
                commentary: "Hear, hear!".to_string(),
            },
            delay: Duration::ZERO,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing(mut self, error: NarrativeError) -> Self {
        self.fail_with = Some(error);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn wait(&self) -> Result<(), NarrativeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl NarrativeSource for StubNarrator {
    fn generate_dilemma(&self, _request: &DilemmaRequest) -> Result<PoliticalEvent, NarrativeError> {
        self.wait()?;
        Ok(self.event.clone())
    }

    fn evaluate_response(&self, _request: &PmqRequest) -> Result<PmqEvaluation, NarrativeError> {
        self.wait()?;
        Ok(self.evaluation.clone())
    }
}

pub fn option(label: &str, stats: StatDelta, happiness: Vec<HappinessChange>) -> EventOption {
    EventOption {
        label: label.to_string(),
        description: format!("{} and hope for the best", label),
        flavour_text: "The lobby hacks scribble furiously.".to_string(),
        consequences: Consequences {
            stats,
            minister_happiness: happiness,
        },
    }
}

/// Two options: a popular one (+10 approval) and a ruinous one.
pub fn rail_strike() -> PoliticalEvent {
    PoliticalEvent {
        id: "evt-1".to_string(),
        title: "Rail Strike Looms".to_string(),
        description: "The unions have balloted for a week-long walkout.".to_string(),
        image: "https://picsum.photos/seed/evt-1/800/400?grayscale".to_string(),
        options: vec![
            option(
                "Meet the unions",
                StatDelta {
                    approval: Some(10),
                    ..Default::default()
                },
                vec![HappinessChange {
                    minister_name: "Elena Vance".to_string(),
                    happiness_delta: 15,
                }],
            ),
            option(
                "Send in the army",
                StatDelta {
                    approval: Some(-100),
                    national_security: Some(5),
                    ..Default::default()
                },
                Vec::new(),
            ),
        ],
    }
}

pub fn action(id: &str, kind: DispatchKind, linked: Option<&str>) -> DispatchAction {
    DispatchAction {
        id: id.to_string(),
        kind,
        title: format!("{} briefing", kind.tag()),
        description: "Awaiting your attention.".to_string(),
        linked_minister_id: linked.map(str::to_string),
    }
}
