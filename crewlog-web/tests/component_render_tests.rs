use crewlog_web::components::{
    footer::Footer,
    header::{END_GAME_BUTTON_ID, Header, Props as HeaderProps},
    modal::{Modal, Props as ModalProps},
    ui::{
        action_toolbar::{ActionToolbar, Props as ToolbarProps},
        hypothesis_card::{HypothesisCard, Props as CardProps},
        location_map::{LocationMap, Props as MapProps},
    },
};
use crewlog_web::game::{Detail, EventKind, Hypothesis};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn card(details: Vec<Detail>, expanded: bool) -> CardProps {
    CardProps {
        hypothesis: Hypothesis {
            rank: 1,
            impostors: vec![String::from("Pink"), String::from("Cyan")].into(),
            cost: 0.0,
            weight: 100.0,
            details,
        },
        expanded,
    }
}

#[test]
fn header_shows_end_game_only_in_session() {
    crewlog_web::i18n::set_lang("en");
    let props = |show| HeaderProps {
        on_lang_change: Callback::noop(),
        current_lang: String::from("en"),
        show_end_game: show,
        on_end_game: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props(true)).render());
    assert!(html.contains(END_GAME_BUTTON_ID));
    assert!(html.contains("中文"));
    let html = block_on(LocalServerRenderer::<Header>::with_props(props(false)).render());
    assert!(!html.contains(END_GAME_BUTTON_ID));
}

#[test]
fn footer_renders_note() {
    crewlog_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer>"));
}

#[test]
fn modal_renders_only_when_open() {
    let props = |open| ModalProps {
        open,
        title: AttrValue::from("End this game?"),
        on_close: Callback::noop(),
        description: Some(AttrValue::from("The event log will be cleared.")),
        return_focus_id: Some(AttrValue::from(END_GAME_BUTTON_ID)),
        children: Default::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(props(true)).render());
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("The event log will be cleared."));
    let html = block_on(LocalServerRenderer::<Modal>::with_props(props(false)).render());
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn toolbar_lists_all_six_actions() {
    crewlog_web::i18n::set_lang("en");
    let props = ToolbarProps {
        active: Some(EventKind::Scan),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ActionToolbar>::with_props(props).render());
    assert_eq!(html.matches("data-action=").count(), 6);
    assert!(html.contains("Visual task"));
    assert!(html.contains("aria-pressed=\"true\""));
}

#[test]
fn location_map_has_nine_pins() {
    crewlog_web::i18n::set_lang("en");
    let props = MapProps {
        selected: Some(3),
        interactive: true,
        on_pick: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LocationMap>::with_props(props).render());
    assert_eq!(html.matches("data-location=").count(), 9);
    assert!(html.contains("Electrical"));
}

#[test]
fn hypothesis_card_shows_verdicts_and_conflicts() {
    crewlog_web::i18n::set_lang("en");
    let details = vec![
        Detail {
            speaker: String::from("Blue"),
            role: String::from("saw"),
            content: String::from("Blue 说 Pink 在食堂"),
            is_truth: false,
            contradiction: Some(String::from("与监控记录不符")),
        },
        Detail::info("Pink 做了任务", true),
    ];
    let html = block_on(LocalServerRenderer::<HypothesisCard>::with_props(card(details, true)).render());
    assert!(html.contains("Pink + Cyan"));
    assert!(html.contains("2 clues"));
    assert!(html.contains("Lie"));
    assert!(html.contains("Truthful"));
    assert!(html.contains("与监控记录不符"));
    assert!(!html.contains("No contradictions"));
}

#[test]
fn consistent_card_reports_no_conflict_and_collapses() {
    crewlog_web::i18n::set_lang("en");
    let details = vec![Detail::info("Pink 做了任务", true)];
    let html =
        block_on(LocalServerRenderer::<HypothesisCard>::with_props(card(details.clone(), true)).render());
    assert!(html.contains("No contradictions"));
    assert!(html.contains("1 clue"));
    let html = block_on(LocalServerRenderer::<HypothesisCard>::with_props(card(details, false)).render());
    assert!(!html.contains("No contradictions"));
    assert!(html.contains("aria-expanded=\"false\""));
}
