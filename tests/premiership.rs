mod common;

use common::{action, rail_strike, StubNarrator};
use whitehall_dispatch::engine::narrative::NarrativeSource;
use whitehall_dispatch::engine::pmq::PmqProgress;
use whitehall_dispatch::rng::ScriptedRandom;
use whitehall_dispatch::engine::session::Phase;
use whitehall_dispatch::error::{GameError, NarrativeError};
use whitehall_dispatch::model::constants::{initial_ministers, initial_stats};
use whitehall_dispatch::model::dispatch::DispatchKind;
use whitehall_dispatch::model::game_state::{GameSnapshot, PhaseKind, Screen};
use whitehall_dispatch::model::minister::MinisterRoster;
use whitehall_dispatch::model::pmq::{PMQ_QUESTIONS, RESPONSE_CARDS};
use whitehall_dispatch::model::stats::{Day, DayState};
use whitehall_dispatch::Session;

fn roster_with_happiness(id: &str, happiness: i32) -> MinisterRoster {
    let ministers = initial_ministers()
        .all()
        .iter()
        .cloned()
        .map(|mut m| {
            if m.id == id {
                m.happiness = happiness;
            }
            m
        })
        .collect();
    MinisterRoster::new(ministers)
}

fn monday_session() -> Session {
    Session::from_parts(
        initial_stats(),
        initial_ministers(),
        vec![
            action("d-Monday-0", DispatchKind::Press, None),
            action("d-Monday-1", DispatchKind::MinisterSuggestion, Some("m1")),
        ],
    )
}

#[test]
fn dispatch_to_resolution_applies_consequences() {
    let narrator = StubNarrator::new(rail_strike());
    let mut session = monday_session();

    let request = session.begin_dispatch("d-Monday-0").unwrap();
    assert_eq!(request.kind, DispatchKind::Press);
    assert!(session.is_processing());

    let result = narrator.generate_dilemma(&request);
    let event = session.complete_dispatch(result).unwrap();
    assert_eq!(event.title, "Rail Strike Looms");
    assert_eq!(session.stats().actions_left, 2);
    assert_eq!(session.dispatch().len(), 1);
    assert_eq!(session.screen(), Screen::Event);

    let resolution = session.resolve_event(0).unwrap();
    assert_eq!(resolution.option_label, "Meet the unions");
    assert_eq!(session.stats().approval, 85);
    assert_eq!(session.roster().get("m6").unwrap().happiness, 55);
    assert_eq!(*session.phase(), Phase::Ready);
    assert_eq!(session.screen(), Screen::Dashboard);
}

#[test]
fn failed_dilemma_leaves_the_desk_untouched() {
    let narrator = StubNarrator::new(rail_strike()).failing(NarrativeError::Timeout);
    let mut session = monday_session();
    let before = session.snapshot();

    let request = session.begin_dispatch("d-Monday-0").unwrap();
    let err = session.complete_dispatch(narrator.generate_dilemma(&request)).unwrap_err();

    assert_eq!(err, GameError::Narrative(NarrativeError::Timeout));
    assert!(err.is_retryable());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn busy_session_refuses_everything_else() {
    let mut session = monday_session();
    session.begin_dispatch("d-Monday-0").unwrap();

    assert_eq!(session.begin_dispatch("d-Monday-1").unwrap_err(), GameError::Busy);
    assert_eq!(session.assign_minister("m2", Some("chancellor")).unwrap_err(), GameError::Busy);
    assert_eq!(session.navigate(Screen::Cabinet).unwrap_err(), GameError::Busy);
    assert_eq!(
        session.advance_day(&mut ScriptedRandom::constant(0.5)).unwrap_err(),
        GameError::Busy
    );
}

#[test]
fn ignored_unhappy_minister_may_resign_overnight() {
    let mut session = Session::from_parts(
        initial_stats(),
        roster_with_happiness("m1", 15),
        vec![action("d-Monday-1", DispatchKind::MinisterSuggestion, Some("m1"))],
    );
    session.assign_minister("m1", Some("foreign_sec")).unwrap();

    let report = session.advance_day(&mut ScriptedRandom::constant(0.1)).unwrap();

    assert_eq!(report.day, Day::Tuesday);
    assert_eq!(report.ignored, vec!["m1".to_string()]);
    assert_eq!(report.resignations.len(), 1);
    assert_eq!(report.resignations[0].name, "Julian Thorne");
    assert!(report.game_over.is_none());

    let julian = session.roster().get("m1").unwrap();
    assert_eq!(julian.happiness, 3);
    assert!(julian.is_resigned);
    assert_eq!(julian.assigned_role_id, None);
    assert!(session.roster().active_ministers().all(|m| m.id != "m1"));
    assert_eq!(session.stats().actions_left, 3);
}

#[test]
fn chosen_suggestion_spares_its_minister() {
    let narrator = StubNarrator::new(rail_strike());
    let mut session = Session::from_parts(
        initial_stats(),
        initial_ministers(),
        vec![
            action("d-Monday-0", DispatchKind::Press, None),
            action("d-Monday-1", DispatchKind::MinisterSuggestion, Some("m8")),
            action("d-Monday-2", DispatchKind::MinisterSuggestion, Some("m3")),
        ],
    );

    let request = session.begin_dispatch("d-Monday-1").unwrap();
    session.complete_dispatch(narrator.generate_dilemma(&request)).unwrap();
    session.resolve_event(0).unwrap();

    let report = session.advance_day(&mut ScriptedRandom::constant(0.5)).unwrap();

    assert_eq!(report.ignored, vec!["m3".to_string()]);
    assert_eq!(session.roster().get("m8").unwrap().happiness, 65);
    assert_eq!(session.roster().get("m3").unwrap().happiness, 68);
}

#[test]
fn lucky_roll_keeps_the_sulking_minister() {
    let mut session = Session::from_parts(
        initial_stats(),
        roster_with_happiness("m6", 25),
        vec![action("d-Monday-1", DispatchKind::MinisterSuggestion, Some("m6"))],
    );

    let report = session.advance_day(&mut ScriptedRandom::constant(0.5)).unwrap();

    assert!(report.resignations.is_empty());
    let elena = session.roster().get("m6").unwrap();
    assert_eq!(elena.happiness, 13);
    assert!(!elena.is_resigned);
}

#[test]
fn full_pmq_sitting_moves_the_polls() {
    let mut stats = initial_stats();
    stats.day = Day::Tuesday;
    let mut session = Session::from_parts(stats, initial_ministers(), Vec::new());
    let narrator = StubNarrator::new(rail_strike());

    assert!(session.can_face_pmq());
    session.navigate(Screen::Pmq).unwrap();

    let mut last = None;
    for (i, question) in PMQ_QUESTIONS.iter().enumerate() {
        match session.snapshot().phase {
            PhaseKind::Pmq { question_number } => assert_eq!(question_number, i + 1),
            other => panic!("expected PMQ phase, got {:?}", other),
        }
        let request = session.begin_pmq_response(RESPONSE_CARDS[2].label).unwrap();
        assert_eq!(request.question, *question);
        last = Some(session.complete_pmq_response(narrator.evaluate_response(&request)).unwrap());
    }

    let Some(PmqProgress::Finished { summary, .. }) = last else {
        panic!("sitting should be over");
    };
    assert_eq!(summary.score.final_score, 8);
    assert_eq!(session.stats().approval, 83);
    assert_eq!(session.stats().media_perception, 50);
    assert_eq!(session.stats().actions_left, 2);
    assert!(session.pmq_done_today());
    assert!(!session.can_face_pmq());
    assert_eq!(session.navigate(Screen::Pmq).unwrap_err(), GameError::PmqUnavailable);
}

#[test]
fn day_complete_once_energy_is_spent() {
    let narrator = StubNarrator::new(rail_strike());
    let mut stats = initial_stats();
    stats.actions_left = 1;
    let mut session = Session::from_parts(
        stats,
        initial_ministers(),
        vec![
            action("d-Monday-0", DispatchKind::Press, None),
            action("d-Monday-2", DispatchKind::Intelligence, None),
        ],
    );

    let request = session.begin_dispatch("d-Monday-0").unwrap();
    session.complete_dispatch(narrator.generate_dilemma(&request)).unwrap();
    let resolution = session.resolve_event(0).unwrap();
    assert_eq!(resolution.day_state, DayState::DayComplete);

    assert_eq!(session.begin_dispatch("d-Monday-2").unwrap_err(), GameError::NoActionsLeft);
}

#[test]
fn snapshot_survives_a_json_round_trip() {
    let narrator = StubNarrator::new(rail_strike());
    let mut session = monday_session();
    session.assign_minister("m2", Some("chancellor")).unwrap();
    let request = session.begin_dispatch("d-Monday-0").unwrap();
    session.complete_dispatch(narrator.generate_dilemma(&request)).unwrap();

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"actionsLeft\":2"));
    assert!(json.contains("\"assignedRoleId\":\"chancellor\""));
    assert!(json.contains("\"isResigned\":false"));

    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
    assert_eq!(back.stats.day, Day::Monday);
    assert_eq!(back.stats.party_unity, 92);
    assert_eq!(back.active_event.as_ref().map(|e| e.options.len()), Some(2));
}
