use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::engine::narrative::NarrativeSource;
use crate::engine::protocol::{EngineCommand, EngineResponse, PlayerIntent};
use crate::engine::session::Session;
use crate::error::NarrativeError;
use crate::model::event_result::DayReport;
use crate::model::pmq::PmqEvaluation;
use crate::model::political_event::PoliticalEvent;
use crate::rng::RandomSource;

/// Everything that can land in the engine's inbox: player commands plus
/// results coming back from worker threads. Worker results carry the ticket
/// they were issued with so a result outliving a reset is dropped.
enum Inbox {
    Command(EngineCommand),
    DilemmaDone {
        ticket: u64,
        result: Result<PoliticalEvent, NarrativeError>,
    },
    VerdictDone {
        ticket: u64,
        result: Result<PmqEvaluation, NarrativeError>,
    },
    Dawn {
        ticket: u64,
    },
}

pub struct Engine {
    rx: Receiver<Inbox>,
    inbox: Sender<Inbox>,
    tx: Sender<EngineResponse>,
    session: Session,
    narrator: Arc<dyn NarrativeSource>,
    rng: Box<dyn RandomSource + Send>,
    day_advance_delay: Duration,
    next_ticket: u64,
    pending_ticket: Option<u64>,
}

/// The presentation side of the engine thread.
pub struct EngineHandle {
    tx: Sender<Inbox>,
    rx: Receiver<EngineResponse>,
    thread: Option<JoinHandle<()>>,
}

impl EngineHandle {
    /// Returns false once the engine has stopped.
    pub fn send(&self, cmd: EngineCommand) -> bool {
        self.tx.send(Inbox::Command(cmd)).is_ok()
    }

    pub fn intent(&self, intent: PlayerIntent) -> bool {
        self.send(EngineCommand::Intent(intent))
    }

    pub fn recv(&self) -> Option<EngineResponse> {
        self.rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineResponse> {
        match self.rx.recv_timeout(timeout) {
            Ok(resp) => Some(resp),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn try_recv(&self) -> Option<EngineResponse> {
        self.rx.try_recv().ok()
    }

    pub fn shutdown(mut self) {
        let _ = self.tx.send(Inbox::Command(EngineCommand::Shutdown));
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Engine {
    /// Start a fresh premiership on its own thread. The first response is
    /// always a snapshot.
    pub fn spawn(
        narrator: Arc<dyn NarrativeSource>,
        mut rng: Box<dyn RandomSource + Send>,
        day_advance_delay: Duration,
    ) -> EngineHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let session = Session::new(rng.as_mut());
        let mut engine = Engine {
            rx: cmd_rx,
            inbox: cmd_tx.clone(),
            tx: resp_tx,
            session,
            narrator,
            rng,
            day_advance_delay,
            next_ticket: 0,
            pending_ticket: None,
        };

        let thread = thread::spawn(move || {
            engine.send_snapshot();
            engine.run();
        });

        EngineHandle {
            tx: cmd_tx,
            rx: resp_rx,
            thread: Some(thread),
        }
    }

    fn run(&mut self) {
        while let Ok(msg) = self.rx.recv() {
            match msg {
                Inbox::Command(EngineCommand::Shutdown) => break,
                Inbox::Command(EngineCommand::Refresh) => self.send_snapshot(),
                Inbox::Command(EngineCommand::Reset) => {
                    self.pending_ticket = None;
                    self.session.reset(self.rng.as_mut());
                    self.send_snapshot();
                }
                Inbox::Command(EngineCommand::Intent(intent)) => self.handle_intent(intent),

                Inbox::DilemmaDone { ticket, result } => {
                    if !self.redeem(ticket) {
                        continue;
                    }
                    match self.session.complete_dispatch(result) {
                        Ok(event) => {
                            let event = event.clone();
                            self.respond(EngineResponse::EventReady(event));
                        }
                        Err(e) => self.respond(EngineResponse::rejected(e)),
                    }
                    self.send_snapshot();
                }

                Inbox::VerdictDone { ticket, result } => {
                    if !self.redeem(ticket) {
                        continue;
                    }
                    match self.session.complete_pmq_response(result) {
                        Ok(progress) => self.respond(EngineResponse::Pmq(progress)),
                        Err(e) => self.respond(EngineResponse::rejected(e)),
                    }
                    self.send_snapshot();
                }

                Inbox::Dawn { ticket } => {
                    if !self.redeem(ticket) {
                        continue;
                    }
                    match self.session.complete_advance_day(self.rng.as_mut()) {
                        Ok(report) => self.finish_day(report),
                        Err(e) => {
                            self.respond(EngineResponse::rejected(e));
                            self.send_snapshot();
                        }
                    }
                }
            }
        }
        log::debug!("engine loop stopped");
    }

    fn handle_intent(&mut self, intent: PlayerIntent) {
        match intent {
            PlayerIntent::ChooseDispatch(action_id) => {
                match self.session.begin_dispatch(&action_id) {
                    Ok(request) => {
                        let ticket = self.issue_ticket();
                        let narrator = Arc::clone(&self.narrator);
                        let inbox = self.inbox.clone();
                        self.respond(EngineResponse::Processing);
                        thread::spawn(move || {
                            let result = narrator.generate_dilemma(&request);
                            let _ = inbox.send(Inbox::DilemmaDone { ticket, result });
                        });
                    }
                    Err(e) => self.respond(EngineResponse::rejected(e)),
                }
            }

            PlayerIntent::ResolveEvent(index) => match self.session.resolve_event(index) {
                Ok(resolution) => {
                    self.respond(EngineResponse::EventResolved(resolution));
                    self.send_snapshot();
                }
                Err(e) => self.respond(EngineResponse::rejected(e)),
            },

            PlayerIntent::AssignMinister { minister_id, role_id } => {
                match self.session.assign_minister(&minister_id, role_id.as_deref()) {
                    Ok(()) => self.send_snapshot(),
                    Err(e) => self.respond(EngineResponse::rejected(e)),
                }
            }

            PlayerIntent::SubmitPmqResponse(label) => {
                match self.session.begin_pmq_response(&label) {
                    Ok(request) => {
                        let ticket = self.issue_ticket();
                        let narrator = Arc::clone(&self.narrator);
                        let inbox = self.inbox.clone();
                        self.respond(EngineResponse::Processing);
                        thread::spawn(move || {
                            let result = narrator.evaluate_response(&request);
                            let _ = inbox.send(Inbox::VerdictDone { ticket, result });
                        });
                    }
                    Err(e) => self.respond(EngineResponse::rejected(e)),
                }
            }

            PlayerIntent::AdvanceDay => {
                if self.day_advance_delay.is_zero() {
                    match self.session.advance_day(self.rng.as_mut()) {
                        Ok(report) => self.finish_day(report),
                        Err(e) => self.respond(EngineResponse::rejected(e)),
                    }
                    return;
                }

                match self.session.begin_advance_day() {
                    Ok(()) => {
                        let ticket = self.issue_ticket();
                        let inbox = self.inbox.clone();
                        let delay = self.day_advance_delay;
                        self.respond(EngineResponse::Processing);
                        thread::spawn(move || {
                            thread::sleep(delay);
                            let _ = inbox.send(Inbox::Dawn { ticket });
                        });
                    }
                    Err(e) => self.respond(EngineResponse::rejected(e)),
                }
            }

            PlayerIntent::Navigate(screen) => match self.session.navigate(screen) {
                Ok(()) => self.send_snapshot(),
                Err(e) => self.respond(EngineResponse::rejected(e)),
            },
        }
    }

    fn finish_day(&mut self, report: DayReport) {
        let game_over = report.game_over;
        self.respond(EngineResponse::DayAdvanced(report));

        if let Some(reason) = game_over {
            self.respond(EngineResponse::GameOver {
                reason,
                message: reason.message().to_string(),
            });
            self.session.reset(self.rng.as_mut());
        }
        self.send_snapshot();
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.pending_ticket = Some(self.next_ticket);
        self.next_ticket
    }

    /// True when `ticket` is the call we are waiting for.
    fn redeem(&mut self, ticket: u64) -> bool {
        if self.pending_ticket == Some(ticket) {
            self.pending_ticket = None;
            true
        } else {
            log::debug!("dropping stale worker result (ticket {})", ticket);
            false
        }
    }

    fn send_snapshot(&self) {
        self.respond(EngineResponse::Snapshot(Box::new(self.session.snapshot())));
    }

    fn respond(&self, resp: EngineResponse) {
        let _ = self.tx.send(resp);
    }
}
