use crewlog_game::{
    EventDraft, EventKind, Phase, PlayerColor, PlayerStatus, ResetConfirmation, Session,
    SessionError,
};

#[test]
fn two_player_start_is_rejected_without_side_effects() {
    let mut session = Session::new();
    session.add_player(PlayerColor::Red);
    session.add_player(PlayerColor::Cyan);
    let snapshot = session.clone();

    let err = session.start_session().unwrap_err();
    assert_eq!(err, SessionError::NotEnoughPlayers { have: 2, need: 3 });
    assert_eq!(err.to_string(), "at least 3 players are required (have 2)");
    assert_eq!(session, snapshot);
    assert_eq!(session.phase(), Phase::Setup);
    assert!(session.log().is_empty());
}

#[test]
fn full_round_trip_through_review_and_reset() {
    let mut session = Session::new();
    for color in PlayerColor::ALL.into_iter().take(5) {
        assert!(session.add_player(color));
    }
    session.set_impostor_count(1).unwrap();
    session.start_session().unwrap();
    let ids: Vec<_> = session.players().iter().map(|p| p.id).collect();

    let drafts = [
        EventDraft::new(EventKind::Sighting)
            .with_actor(ids[0])
            .with_target(ids[1])
            .with_location(1),
        EventDraft::new(EventKind::BodyReport)
            .with_actor(ids[2])
            .with_target(ids[3])
            .with_location(3),
        EventDraft::new(EventKind::Suspicion)
            .with_actor(ids[2])
            .with_target(ids[1]),
    ];
    for draft in drafts {
        assert!(session.record_event(draft).is_some());
    }
    assert_eq!(session.log().len(), 4);
    let dead: Vec<&str> = session
        .players()
        .iter()
        .filter(|p| p.status == PlayerStatus::Dead)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(dead, vec!["Pink"]);

    let request = session.begin_resolution().unwrap();
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["impostorCount"], 1);
    assert_eq!(body["logs"][2]["type"], "body");
    assert_eq!(body["logs"][2]["loc"], 3);
    assert_eq!(body["players"][3]["status"], "dead");

    assert!(session.return_to_session());
    session.reset_session(ResetConfirmation::Confirmed).unwrap();
    assert_eq!(session.phase(), Phase::Setup);
    assert_eq!(session.players().len(), 5);
    assert!(session.players().iter().all(|p| p.is_alive()));
    assert!(session.log().is_empty());
}

#[test]
fn declined_reset_is_an_error_and_keeps_everything() {
    let mut session = Session::new();
    for color in [PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green] {
        session.add_player(color);
    }
    session.start_session().unwrap();
    let snapshot = session.clone();
    assert_eq!(
        session.reset_session(ResetConfirmation::Declined),
        Err(SessionError::ResetDeclined)
    );
    assert_eq!(session, snapshot);
}
