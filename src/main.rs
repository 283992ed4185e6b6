use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use whitehall_dispatch::config::load_config;
use whitehall_dispatch::engine::llm_client::{LlmClient, LlmNarrator};
use whitehall_dispatch::engine::protocol::{EngineCommand, EngineResponse, PlayerIntent};
use whitehall_dispatch::rng::{RandomSource, SeededRandom};
use whitehall_dispatch::model::briefing::Briefing;
use whitehall_dispatch::model::game_state::{GameSnapshot, PhaseKind, Screen};
use whitehall_dispatch::model::minister::ROLES;
use whitehall_dispatch::model::pmq::RESPONSE_CARDS;
use whitehall_dispatch::{Engine, EngineHandle};

const HELP: &str = "\
commands:
  d <id>           open the dispatch with that id
  o <n>            choose option n of the current dilemma
  a <id> <role|->  appoint minister to a role (- benches them)
  pmq              face the Commons (Tuesdays)
  r <n>            answer with response card n
  go <screen>      dashboard | cabinet | characters | media | event | pmq
  next             end the day
  reset            resign and start again
  quit";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = load_config();
    let client = LlmClient::new(config.llm.clone())?;
    match client.test_connection() {
        Ok(status) => log::info!("{}", status),
        Err(e) => log::warn!("narrator unreachable at {}: {}", config.llm.endpoint, e),
    }

    let rng: Box<dyn RandomSource + Send> = match config.seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(SeededRandom::from_entropy()),
    };
    let engine = Engine::spawn(
        Arc::new(LlmNarrator::new(client)),
        rng,
        Duration::from_millis(config.day_advance_delay_ms),
    );

    drain(&engine);
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        let cmd = match words.as_slice() {
            ["quit"] | ["q"] => break,
            ["d", id] => Some(EngineCommand::Intent(PlayerIntent::ChooseDispatch(id.to_string()))),
            ["o", n] => index(n).map(|i| EngineCommand::Intent(PlayerIntent::ResolveEvent(i))),
            ["a", id, role] => Some(EngineCommand::Intent(PlayerIntent::AssignMinister {
                minister_id: id.to_string(),
                role_id: (*role != "-").then(|| role.to_string()),
            })),
            ["pmq"] => Some(EngineCommand::Intent(PlayerIntent::Navigate(Screen::Pmq))),
            ["r", n] => index(n)
                .and_then(|i| RESPONSE_CARDS.get(i))
                .map(|c| EngineCommand::Intent(PlayerIntent::SubmitPmqResponse(c.label.to_string()))),
            ["go", screen] => parse_screen(screen).map(|s| EngineCommand::Intent(PlayerIntent::Navigate(s))),
            ["next"] => Some(EngineCommand::Intent(PlayerIntent::AdvanceDay)),
            ["reset"] => Some(EngineCommand::Reset),
            _ => None,
        };

        let Some(cmd) = cmd else {
            println!("{}", HELP);
            continue;
        };
        if !engine.send(cmd) {
            break;
        }
        drain(&engine);
    }

    engine.shutdown();
    Ok(())
}

fn index(word: &str) -> Option<usize> {
    word.parse::<usize>().ok()
}

fn parse_screen(word: &str) -> Option<Screen> {
    Some(match word {
        "dashboard" => Screen::Dashboard,
        "cabinet" => Screen::Cabinet,
        "characters" => Screen::Characters,
        "media" => Screen::Media,
        "event" => Screen::Event,
        "pmq" => Screen::Pmq,
        _ => return None,
    })
}

/// Print responses until the engine settles.
fn drain(engine: &EngineHandle) {
    let mut waiting = false;
    while let Some(resp) = engine.recv_timeout(Duration::from_secs(120)) {
        match resp {
            EngineResponse::Processing => {
                waiting = true;
                println!("... the civil service is drafting a memo");
            }
            EngineResponse::Snapshot(snapshot) => {
                render(&snapshot);
                if snapshot.phase != PhaseKind::Processing {
                    return;
                }
            }
            EngineResponse::EventReady(_) => {}
            EngineResponse::EventResolved(r) => println!("{} -- {}", r.option_label, r.flavour_text),
            EngineResponse::Pmq(progress) => println!("{:#?}", progress),
            EngineResponse::DayAdvanced(report) => {
                for notice in &report.resignations {
                    println!("{}", notice.letter());
                }
            }
            EngineResponse::Rejected { error, .. } => {
                println!("! {}", error);
                if !waiting {
                    return;
                }
            }
            EngineResponse::GameOver { message, .. } => println!("*** {} ***", message),
        }
    }
}

fn render(s: &GameSnapshot) {
    let st = &s.stats;
    println!(
        "\n{} week {} | approval {}% unity {}% budget £{}bn influence {}% media {}% security {}% | energy {}/3",
        st.day, st.week, st.approval, st.party_unity, st.budget, st.influence,
        st.media_perception, st.national_security, st.actions_left
    );

    match s.screen {
        Screen::Dashboard => {
            let briefing = Briefing::for_stats(st);
            println!("  Day {} in office", briefing.day_in_office);
            println!("  Whips' office: {}", briefing.unity);
            println!("  Treasury: {}", briefing.economy);
            for a in &s.dispatch {
                println!("  [{}] {} - {}", a.id, a.title, a.description);
            }
            if s.pmq_available {
                println!("  (pmq) FACE THE COMMONS");
            }
        }
        Screen::Cabinet => {
            for role in ROLES.iter() {
                let holder = s
                    .ministers
                    .all()
                    .iter()
                    .find(|m| m.assigned_role_id.as_deref() == Some(role.id))
                    .map(|m| m.name.as_str())
                    .unwrap_or("Vacant");
                println!("  {:<12} {:<28} {}", role.id, role.label, holder);
            }
        }
        Screen::Characters => {
            for m in s.ministers.all().iter().filter(|m| !m.is_resigned) {
                println!(
                    "  {} {:<15} {:<18} happiness {:>3} loyalty {:>3} - {}",
                    m.id, m.name, m.role, m.happiness, m.loyalty, m.bio
                );
            }
        }
        Screen::Media => {
            let briefing = Briefing::for_stats(st);
            println!("  {}", briefing.headline);
            for story in briefing.stories {
                println!("  {}: {}", story.source, story.text);
            }
        }
        Screen::Event => {
            if let Some(event) = &s.active_event {
                println!("  {}\n  {}", event.title, event.description);
                for (i, opt) in event.options.iter().enumerate() {
                    println!("  ({}) {} - {}", i, opt.label, opt.description);
                }
            }
        }
        Screen::Pmq => {
            if let Some(q) = &s.pmq_question {
                println!("  Q: {}", q);
                for (i, card) in RESPONSE_CARDS.iter().enumerate() {
                    println!("  ({}) {} [{:?}]", i, card.label, card.style);
                }
            }
        }
    }
}
