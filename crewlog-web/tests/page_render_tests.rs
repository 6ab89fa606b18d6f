use crewlog_web::game::{
    Detail, EventDraft, EventKind, Hypothesis, LogEntry, Player, PlayerColor, PlayerId,
    PlayerStatus, Resolution, ResolutionSource,
};
use crewlog_web::pages::{
    analysis::{AnalysisPage, Props as AnalysisProps},
    console::{ConsolePage, Props as ConsoleProps},
    not_found::{NotFound, Props as NotFoundProps},
    setup::{Props as SetupProps, SetupPage},
};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn crew(colors: &[PlayerColor]) -> Vec<Player> {
    colors
        .iter()
        .enumerate()
        .map(|(idx, color)| Player::new(PlayerId(idx as u64 + 1), *color))
        .collect()
}

fn hypothesis(rank: u32, names: &[&str], weight: f64, details: Vec<Detail>) -> Hypothesis {
    Hypothesis {
        rank,
        impostors: names.iter().map(|n| (*n).to_string()).collect::<Vec<_>>().into(),
        cost: f64::from(rank - 1) * 10.0,
        weight,
        details,
    }
}

fn console_props(draft: Option<EventDraft>, players: Vec<Player>) -> ConsoleProps {
    ConsoleProps {
        players,
        draft,
        log: vec![LogEntry::session_marker(3, 1)],
        on_action: Callback::noop(),
        on_actor: Callback::noop(),
        on_target: Callback::noop(),
        on_location: Callback::noop(),
        on_confirm: Callback::noop(),
        on_cancel: Callback::noop(),
        on_solve: Callback::noop(),
    }
}

#[test]
fn setup_page_shows_roster_and_notice() {
    crewlog_web::i18n::set_lang("en");
    let props = SetupProps {
        players: crew(&[PlayerColor::Red, PlayerColor::Blue]),
        impostor_count: 2,
        notice: Some(AttrValue::from("At least 3 players are required to start (currently 2).")),
        on_add: Callback::noop(),
        on_remove: Callback::noop(),
        on_impostors: Callback::noop(),
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SetupPage>::with_props(props).render());
    assert!(html.contains("Crew (2 players)"), "{html}");
    assert!(html.contains("currently 2"));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Remove Red"));
    assert!(html.contains("data-color=\"Cyan\""));
}

#[test]
fn setup_page_empty_roster_message() {
    crewlog_web::i18n::set_lang("en");
    let props = SetupProps {
        players: Vec::new(),
        impostor_count: 1,
        notice: None,
        on_add: Callback::noop(),
        on_remove: Callback::noop(),
        on_impostors: Callback::noop(),
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SetupPage>::with_props(props).render());
    assert!(html.contains("No crew members yet."));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn console_page_prompts_follow_the_draft() {
    crewlog_web::i18n::set_lang("en");
    let players = crew(&[PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green]);

    let idle = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(None, players.clone())).render(),
    );
    assert!(idle.contains("Choose an action above."));
    assert!(idle.contains("Game started"));
    assert!(!idle.contains("confirm-event-btn"));

    let sighting = EventDraft::new(EventKind::Sighting);
    let html = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(Some(sighting), players.clone()))
            .render(),
    );
    assert!(html.contains("Who is speaking?"));
    assert!(html.contains("confirm-event-btn"));
    assert!(html.contains("location-map"));

    let located = sighting
        .with_actor(PlayerId(1))
        .with_target(PlayerId(2));
    let html = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(Some(located), players)).render(),
    );
    assert!(html.contains("Where?"));
}

fn avatar_tag<'a>(html: &'a str, name: &str) -> &'a str {
    let marker = format!("data-player=\"{name}\"");
    let at = html.find(&marker).expect("avatar rendered");
    let start = html[..at].rfind("<button").expect("avatar is a button");
    let end = at + html[at..].find('>').expect("tag closes");
    &html[start..end]
}

#[test]
fn console_page_dead_players_are_targets_but_not_speakers() {
    crewlog_web::i18n::set_lang("en");
    let mut players = crew(&[PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green]);
    players[1].status = PlayerStatus::Dead;

    let speaker_step = EventDraft::new(EventKind::Accusation);
    let html = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(
            Some(speaker_step),
            players.clone(),
        ))
        .render(),
    );
    assert!(avatar_tag(&html, "Blue").contains("disabled"), "{html}");
    assert!(!avatar_tag(&html, "Red").contains("disabled"), "{html}");

    let target_step = speaker_step.with_actor(PlayerId(1));
    let html = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(Some(target_step), players.clone()))
            .render(),
    );
    assert!(!avatar_tag(&html, "Blue").contains("disabled"), "{html}");

    let scan = EventDraft::new(EventKind::Scan);
    let html = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(Some(scan), players)).render(),
    );
    assert!(!avatar_tag(&html, "Blue").contains("disabled"), "{html}");
}

#[test]
fn console_page_marks_dead_players() {
    crewlog_web::i18n::set_lang("en");
    let mut players = crew(&[PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green]);
    players[1].status = PlayerStatus::Dead;
    let draft = EventDraft::new(EventKind::Vouch);
    let html = block_on(
        LocalServerRenderer::<ConsolePage>::with_props(console_props(Some(draft), players)).render(),
    );
    assert!(html.contains("Blue (Dead)"), "{html}");
    assert!(html.contains("player-avatar dead"));
}

#[test]
fn analysis_page_pending_and_fallback_states() {
    crewlog_web::i18n::set_lang("en");
    let pending = AnalysisProps {
        resolution: None,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AnalysisPage>::with_props(pending).render());
    assert!(html.contains("Analyzing the log"));

    let resolution = Resolution {
        hypotheses: vec![
            hypothesis(1, &["Red", "Blue"], 200.0 / 3.0, vec![Detail::info("系统提示", true)]),
            hypothesis(2, &["Red", "Green"], 100.0 / 3.0, Vec::new()),
        ],
        source: ResolutionSource::Fallback {
            reason: String::from("offline"),
        },
    };
    let props = AnalysisProps {
        resolution: Some(resolution),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AnalysisPage>::with_props(props).render());
    assert!(html.contains("Local mode"));
    assert!(html.contains("2 possible scenarios"));
    assert!(html.contains("Red + Blue"));
    assert!(html.contains("66.7%"));
    assert!(html.contains("back-console-btn"));
}

#[test]
fn not_found_page_offers_a_way_back() {
    crewlog_web::i18n::set_lang("en");
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to setup"));
}
