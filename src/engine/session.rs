use std::collections::{BTreeSet, HashSet};
use std::mem;

use crate::engine::apply_event::apply_option;
use crate::engine::dispatch::generate_daily_dispatch;
use crate::engine::narrative::{DilemmaRequest, PmqRequest};
use crate::engine::pmq::{PmqProgress, PmqSummary};
use crate::error::{GameError, NarrativeError};
use crate::model::constants::{initial_ministers, initial_stats};
use crate::model::dispatch::DispatchAction;
use crate::model::event_result::{DayReport, EventResolution, ResignationNotice};
use crate::model::game_over::{check_game_over, GameOverReason};
use crate::model::game_state::{GameSnapshot, PhaseKind, Screen};
use crate::model::minister::{Attrition, MinisterRoster};
use crate::model::pmq::{find_card, PmqEvaluation, PmqSession};
use crate::model::political_event::PoliticalEvent;
use crate::model::stats::{Day, DayState, Stats};
use crate::rng::RandomSource;

/// A call to the narrator (or the pacing timer) that is still outstanding.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    Dilemma { action_id: String },
    PmqAnswer { session: PmqSession },
    DayAdvance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// At the desk. Whether any actions remain is `Stats::day_state`.
    Ready,
    Processing(Pending),
    Event(PoliticalEvent),
    Pmq(PmqSession),
    GameOver(GameOverReason),
}

/// One premiership. Owns the stats and the cabinet and is the only thing
/// allowed to change them.
///
/// Operations that need the narrator come in `begin_*` / `complete_*`
/// pairs. Between the two the session is `Processing` and refuses
/// everything else; a failed call restores the previous phase untouched.
#[derive(Debug, Clone)]
pub struct Session {
    stats: Stats,
    roster: MinisterRoster,
    dispatch: Vec<DispatchAction>,
    phase: Phase,
    screen: Screen,
    pmq_done_today: bool,
}

impl Session {
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let stats = initial_stats();
        let roster = initial_ministers();
        let dispatch = generate_daily_dispatch(stats.day, &roster, rng);
        Self::from_parts(stats, roster, dispatch)
    }

    pub fn from_parts(stats: Stats, roster: MinisterRoster, dispatch: Vec<DispatchAction>) -> Self {
        Self {
            stats,
            roster,
            dispatch,
            phase: Phase::Ready,
            screen: Screen::Dashboard,
            pmq_done_today: false,
        }
    }

    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        log::info!("starting a fresh premiership");
        *self = Session::new(rng);
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn roster(&self) -> &MinisterRoster {
        &self.roster
    }

    pub fn dispatch(&self) -> &[DispatchAction] {
        &self.dispatch
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn pmq_done_today(&self) -> bool {
        self.pmq_done_today
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Processing(_))
    }

    pub fn active_event(&self) -> Option<&PoliticalEvent> {
        match &self.phase {
            Phase::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        match self.phase {
            Phase::GameOver(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn day_state(&self) -> DayState {
        self.stats.day_state()
    }

    pub fn can_face_pmq(&self) -> bool {
        self.phase == Phase::Ready
            && self.stats.day == Day::Tuesday
            && self.stats.actions_left > 0
            && !self.pmq_done_today
    }

    fn ensure_ready(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::Processing(_) => Err(GameError::Busy),
            Phase::GameOver(_) => Err(GameError::GameOver),
            Phase::Event(_) => Err(GameError::WrongPhase("a dilemma awaits a decision")),
            Phase::Pmq(_) => Err(GameError::WrongPhase("the Commons is sitting")),
        }
    }

    /* =========================
       Dispatches and dilemmas
       ========================= */

    pub fn begin_dispatch(&mut self, action_id: &str) -> Result<DilemmaRequest, GameError> {
        self.ensure_ready()?;
        if self.stats.actions_left == 0 {
            return Err(GameError::NoActionsLeft);
        }
        let action = self
            .dispatch
            .iter()
            .find(|a| a.id == action_id)
            .ok_or_else(|| GameError::UnknownDispatch(action_id.to_string()))?;

        let request = DilemmaRequest {
            stats: self.stats,
            kind: action.kind,
            linked_minister: action
                .linked_minister_id
                .as_deref()
                .and_then(|id| self.roster.get(id))
                .cloned(),
        };

        log::debug!("dispatch '{}' sent to the narrator", action_id);
        self.phase = Phase::Processing(Pending::Dilemma {
            action_id: action_id.to_string(),
        });
        Ok(request)
    }

    /// Only a successful dilemma consumes the dispatch and the action point.
    pub fn complete_dispatch(
        &mut self,
        result: Result<PoliticalEvent, NarrativeError>,
    ) -> Result<&PoliticalEvent, GameError> {
        let Phase::Processing(Pending::Dilemma { action_id }) = &self.phase else {
            return Err(GameError::WrongPhase("no dilemma was requested"));
        };
        let action_id = action_id.clone();

        let event = match result {
            Ok(event) if event.options.is_empty() => {
                Err(NarrativeError::Malformed("dilemma has no options".to_string()))
            }
            other => other,
        };

        match event {
            Ok(event) => {
                self.dispatch.retain(|a| a.id != action_id);
                self.stats = self.stats.spend_action();
                self.screen = Screen::Event;
                self.phase = Phase::Event(event);
                match &self.phase {
                    Phase::Event(event) => Ok(event),
                    _ => Err(GameError::NoActiveEvent),
                }
            }
            Err(e) => {
                log::warn!("dilemma for dispatch '{}' failed: {}", action_id, e);
                self.phase = Phase::Ready;
                Err(GameError::Narrative(e))
            }
        }
    }

    pub fn resolve_event(&mut self, option_index: usize) -> Result<EventResolution, GameError> {
        let event = match &self.phase {
            Phase::Event(event) => event,
            Phase::Processing(_) => return Err(GameError::Busy),
            Phase::GameOver(_) => return Err(GameError::GameOver),
            _ => return Err(GameError::NoActiveEvent),
        };
        let option = event
            .options
            .get(option_index)
            .ok_or(GameError::OptionOutOfRange {
                index: option_index,
                available: event.options.len(),
            })?;

        let (stats, roster) = apply_option(&self.stats, &self.roster, option);
        let resolution = EventResolution {
            event_title: event.title.clone(),
            option_label: option.label.clone(),
            flavour_text: option.flavour_text.clone(),
            applied: option.consequences.stats,
            day_state: stats.day_state(),
        };

        log::info!("'{}' resolved with '{}'", resolution.event_title, resolution.option_label);
        self.stats = stats;
        self.roster = roster;
        self.phase = Phase::Ready;
        self.screen = Screen::Dashboard;
        Ok(resolution)
    }

    /* =========================
       Cabinet
       ========================= */

    pub fn assign_minister(&mut self, minister_id: &str, role_id: Option<&str>) -> Result<(), GameError> {
        self.ensure_ready()?;
        let (roster, stats) = self.roster.assign(&self.stats, minister_id, role_id)?;
        self.roster = roster;
        self.stats = stats;
        Ok(())
    }

    /* =========================
       Prime Minister's Questions
       ========================= */

    pub fn begin_pmq(&mut self) -> Result<&'static str, GameError> {
        self.ensure_ready()?;
        if !self.can_face_pmq() {
            return Err(GameError::PmqUnavailable);
        }
        let session = PmqSession::new();
        let question = session.current_question().ok_or(GameError::PmqUnavailable)?;
        self.phase = Phase::Pmq(session);
        self.screen = Screen::Pmq;
        Ok(question)
    }

    pub fn begin_pmq_response(&mut self, card_label: &str) -> Result<PmqRequest, GameError> {
        let session = match &self.phase {
            Phase::Pmq(session) => session,
            Phase::Processing(_) => return Err(GameError::Busy),
            Phase::GameOver(_) => return Err(GameError::GameOver),
            _ => return Err(GameError::NoPmqSession),
        };
        let card = find_card(card_label)
            .ok_or_else(|| GameError::UnknownResponseCard(card_label.to_string()))?;
        let question = session.current_question().ok_or(GameError::NoPmqSession)?;

        let request = PmqRequest {
            question: question.to_string(),
            response: card.label.to_string(),
        };
        let session = session.clone();
        self.phase = Phase::Processing(Pending::PmqAnswer { session });
        Ok(request)
    }

    /// Record the verdict. After the last question the sitting is scored,
    /// its impact applied and one action point spent.
    pub fn complete_pmq_response(
        &mut self,
        result: Result<PmqEvaluation, NarrativeError>,
    ) -> Result<PmqProgress, GameError> {
        let Phase::Processing(Pending::PmqAnswer { session }) = &mut self.phase else {
            return Err(GameError::WrongPhase("no PMQ answer was submitted"));
        };
        let mut session = mem::take(session);

        let evaluation = match result {
            Ok(evaluation) => evaluation,
            Err(e) => {
                log::warn!("PMQ evaluation failed: {}", e);
                self.phase = Phase::Pmq(session);
                return Err(GameError::Narrative(e));
            }
        };
        session.record(evaluation.clone());

        if !session.is_finished() {
            let question = session.current_question().unwrap_or_default().to_string();
            self.phase = Phase::Pmq(session);
            return Ok(PmqProgress::Next { evaluation, question });
        }

        let summary = PmqSummary::from_results(session.results());
        self.stats = self.stats.apply_delta(&summary.score.delta()).spend_action();
        self.pmq_done_today = true;
        self.phase = Phase::Ready;
        self.screen = Screen::Dashboard;
        log::info!("PMQ over, rated {}/10", summary.score.final_score);

        Ok(PmqProgress::Finished { evaluation, summary })
    }

    /* =========================
       Navigation
       ========================= */

    /// Leaving an unfinished PMQ sitting abandons it at no cost.
    pub fn navigate(&mut self, screen: Screen) -> Result<(), GameError> {
        match self.phase {
            Phase::Processing(_) => return Err(GameError::Busy),
            Phase::GameOver(_) => return Err(GameError::GameOver),
            _ => {}
        }
        let in_pmq = matches!(self.phase, Phase::Pmq(_));
        let in_event = matches!(self.phase, Phase::Event(_));

        match screen {
            Screen::Pmq if in_pmq => {}
            Screen::Pmq => {
                self.begin_pmq()?;
            }
            Screen::Event if !in_event => return Err(GameError::NoActiveEvent),
            _ if in_pmq => {
                log::info!("walked out of PMQ before the end");
                self.phase = Phase::Ready;
            }
            _ => {}
        }
        self.screen = screen;
        Ok(())
    }

    /* =========================
       Day cycle
       ========================= */

    pub fn begin_advance_day(&mut self) -> Result<(), GameError> {
        self.ensure_ready()?;
        self.phase = Phase::Processing(Pending::DayAdvance);
        Ok(())
    }

    /// Attrition, calendar, fresh dispatches and the game-over check, all
    /// committed together.
    pub fn complete_advance_day(&mut self, rng: &mut dyn RandomSource) -> Result<DayReport, GameError> {
        if self.phase != Phase::Processing(Pending::DayAdvance) {
            return Err(GameError::WrongPhase("no day advance was requested"));
        }

        let ignored: HashSet<String> = self
            .dispatch
            .iter()
            .filter_map(|a| a.linked_minister_id.clone())
            .collect();

        let Attrition { roster, resigned } = self.roster.apply_daily_attrition(&ignored, rng);
        let stats = self.stats.advance_day();
        let dispatch = generate_daily_dispatch(stats.day, &roster, rng);
        let game_over = check_game_over(&stats);

        let resignations: Vec<ResignationNotice> = resigned
            .iter()
            .filter_map(|id| roster.get(id))
            .map(|m| ResignationNotice {
                minister_id: m.id.clone(),
                name: m.name.clone(),
            })
            .collect();
        for notice in &resignations {
            log::info!("{}", notice.letter());
        }

        self.roster = roster;
        self.stats = stats;
        self.dispatch = dispatch;
        self.pmq_done_today = false;
        self.screen = Screen::Dashboard;
        self.phase = match game_over {
            Some(reason) => {
                log::info!("game over: {}", reason.message());
                Phase::GameOver(reason)
            }
            None => Phase::Ready,
        };

        log::info!("{} of week {} dawns", stats.day, stats.week);
        log::debug!("dispatches: {:?}", self.dispatch.iter().map(|a| &a.title).collect::<Vec<_>>());

        Ok(DayReport {
            day: stats.day,
            week: stats.week,
            ignored: ignored.into_iter().collect::<BTreeSet<_>>().into_iter().collect(),
            resignations,
            game_over,
        })
    }

    pub fn advance_day(&mut self, rng: &mut dyn RandomSource) -> Result<DayReport, GameError> {
        self.begin_advance_day()?;
        self.complete_advance_day(rng)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let (phase, pmq_question) = match &self.phase {
            Phase::Ready => (PhaseKind::Ready, None),
            Phase::Processing(_) => (PhaseKind::Processing, None),
            Phase::Event(_) => (PhaseKind::Event, None),
            Phase::Pmq(session) => (
                PhaseKind::Pmq {
                    question_number: session.question_number(),
                },
                session.current_question().map(str::to_string),
            ),
            Phase::GameOver(reason) => (PhaseKind::GameOver { reason: *reason }, None),
        };

        GameSnapshot {
            stats: self.stats,
            ministers: self.roster.clone(),
            dispatch: self.dispatch.clone(),
            active_event: self.active_event().cloned(),
            phase,
            screen: self.screen,
            day_state: self.day_state(),
            pmq_done_today: self.pmq_done_today,
            pmq_available: self.can_face_pmq(),
            pmq_question,
        }
    }
}
