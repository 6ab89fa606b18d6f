use anyhow::{Context, Result, anyhow, ensure};
use crewlog_game::{
    EventDraft, EventKind, LOCATIONS, PlayerColor, PlayerId, PlayerStatus, Session,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{Scenario, ScenarioOutcome};

const CROWDED_EVENTS: usize = 12;

pub fn catalog_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "smoke",
            "Smoke",
            "Five players, one sighting, resolved end to end",
            build_smoke,
            expect_smoke,
        ),
        Scenario::new(
            "accusation-vs-scan",
            "Accusation vs Scan",
            "An accused player leads the ranking; a scanned player drops out of it",
            build_accusation_vs_scan,
            expect_accusation_vs_scan,
        ),
        Scenario::new(
            "body-report",
            "Body Report",
            "A body report marks exactly its target dead",
            build_body_report,
            expect_body_report,
        ),
        Scenario::new(
            "vouch-chain",
            "Vouch Chain",
            "A player vouched for three times stays out of every guess",
            build_vouch_chain,
            expect_vouch_chain,
        ),
        Scenario::new(
            "minimal-roster",
            "Minimal Roster",
            "Three players and no events still yield two distinct guesses",
            build_minimal_roster,
            expect_minimal_roster,
        ),
        Scenario::new(
            "crowded-table",
            "Crowded Table",
            "Ten players and a seeded burst of random events",
            build_crowded_table,
            expect_crowded_table,
        ),
    ]
}

fn started(colors: &[PlayerColor], impostors: u8) -> Result<Session> {
    let mut session = Session::new();
    for color in colors {
        ensure!(session.add_player(*color), "duplicate color {color}");
    }
    session.set_impostor_count(impostors)?;
    session.start_session()?;
    Ok(session)
}

fn id_of(session: &Session, color: PlayerColor) -> Result<PlayerId> {
    session
        .players()
        .iter()
        .find(|p| p.color == color)
        .map(|p| p.id)
        .with_context(|| format!("{color} is not on the roster"))
}

fn record(session: &mut Session, draft: EventDraft) -> Result<()> {
    session
        .record_event(draft)
        .map(|_| ())
        .ok_or_else(|| anyhow!("{} draft was rejected", draft.kind.tag()))
}

fn event_count(outcome: &ScenarioOutcome) -> usize {
    outcome
        .request
        .logs
        .iter()
        .filter(|e| e.kind != EventKind::System)
        .count()
}

fn top_guess(outcome: &ScenarioOutcome) -> Result<&[String]> {
    outcome
        .resolution
        .hypotheses
        .first()
        .map(|h| h.impostors.as_slice())
        .context("resolution has no hypotheses")
}

fn build_smoke(_rng: &mut ChaCha8Rng) -> Result<Session> {
    use PlayerColor::{Blue, Green, Orange, Pink, Red};
    let mut session = started(&[Red, Blue, Green, Pink, Orange], 2)?;
    let draft = EventDraft::new(EventKind::Sighting)
        .with_actor(id_of(&session, Red)?)
        .with_target(id_of(&session, Blue)?)
        .with_location(1);
    record(&mut session, draft)?;
    Ok(session)
}

fn expect_smoke(outcome: &ScenarioOutcome) -> Result<()> {
    ensure!(outcome.request.logs.len() == 2, "expected marker plus one event");
    let expected = event_count(outcome) + 1;
    for h in &outcome.resolution.hypotheses {
        ensure!(
            h.details.len() == expected,
            "rank {} has {} details, expected {expected}",
            h.rank,
            h.details.len()
        );
    }
    Ok(())
}

fn build_accusation_vs_scan(_rng: &mut ChaCha8Rng) -> Result<Session> {
    use PlayerColor::{Blue, Green, Pink, Red};
    let mut session = started(&[Red, Blue, Green, Pink], 1)?;
    let accuse = EventDraft::new(EventKind::Accusation)
        .with_actor(id_of(&session, Green)?)
        .with_target(id_of(&session, Red)?);
    record(&mut session, accuse)?;
    let scan = EventDraft::new(EventKind::Scan).with_target(id_of(&session, Blue)?);
    record(&mut session, scan)?;
    Ok(session)
}

fn expect_accusation_vs_scan(outcome: &ScenarioOutcome) -> Result<()> {
    let top = top_guess(outcome)?;
    ensure!(top.first().map(String::as_str) == Some("Red"), "Red should lead, got {top:?}");
    ensure!(!top.iter().any(|n| n == "Blue"), "Blue was scanned but appears in {top:?}");
    Ok(())
}

fn build_body_report(_rng: &mut ChaCha8Rng) -> Result<Session> {
    use PlayerColor::{Blue, Green, Pink, Red, Yellow};
    let mut session = started(&[Red, Blue, Green, Pink, Yellow], 2)?;
    let report = EventDraft::new(EventKind::BodyReport)
        .with_actor(id_of(&session, Red)?)
        .with_target(id_of(&session, Pink)?)
        .with_location(3);
    record(&mut session, report)?;
    Ok(session)
}

fn expect_body_report(outcome: &ScenarioOutcome) -> Result<()> {
    let dead: Vec<&str> = outcome
        .request
        .players
        .iter()
        .filter(|p| p.status == PlayerStatus::Dead)
        .map(|p| p.name.as_str())
        .collect();
    ensure!(dead == ["Pink"], "expected only Pink dead, got {dead:?}");
    let entry = outcome.request.logs.last().context("log is empty")?;
    ensure!(entry.loc == Some(3), "body report lost its location");
    Ok(())
}

fn build_vouch_chain(_rng: &mut ChaCha8Rng) -> Result<Session> {
    use PlayerColor::{Blue, Cyan, Green, Red, White};
    let mut session = started(&[Red, Blue, Green, White, Cyan], 2)?;
    let cyan = id_of(&session, Cyan)?;
    for voucher in [Red, Blue, Green] {
        let vouch = EventDraft::new(EventKind::Vouch)
            .with_actor(id_of(&session, voucher)?)
            .with_target(cyan);
        record(&mut session, vouch)?;
    }
    Ok(session)
}

fn expect_vouch_chain(outcome: &ScenarioOutcome) -> Result<()> {
    for h in &outcome.resolution.hypotheses {
        ensure!(
            !h.impostors.iter().any(|n| n == "Cyan"),
            "Cyan was vouched for but appears at rank {}",
            h.rank
        );
    }
    Ok(())
}

fn build_minimal_roster(_rng: &mut ChaCha8Rng) -> Result<Session> {
    use PlayerColor::{Blue, Green, Red};
    started(&[Red, Blue, Green], 1)
}

fn expect_minimal_roster(outcome: &ScenarioOutcome) -> Result<()> {
    let roster: Vec<&str> = outcome.request.players.iter().map(|p| p.name.as_str()).collect();
    let guesses: Vec<&[String]> = outcome
        .resolution
        .hypotheses
        .iter()
        .map(|h| h.impostors.as_slice())
        .collect();
    ensure!(guesses.len() == 2 && guesses[0] != guesses[1], "guesses are not distinct: {guesses:?}");
    for guess in guesses {
        ensure!(guess.len() == 2, "expected pairs, got {guess:?}");
        ensure!(guess[0] != guess[1], "duplicate name in {guess:?}");
        ensure!(
            guess.iter().all(|n| roster.contains(&n.as_str())),
            "{guess:?} names someone off the roster"
        );
    }
    Ok(())
}

fn build_crowded_table(rng: &mut ChaCha8Rng) -> Result<Session> {
    let mut session = started(&PlayerColor::ALL, 3)?;
    for _ in 0..CROWDED_EVENTS {
        let living: Vec<PlayerId> = session.living_players().map(|p| p.id).collect();
        if living.len() < 3 {
            break;
        }
        let kind = EventKind::ACTIONS[rng.gen_range(0..EventKind::ACTIONS.len())];
        let actor = living[rng.gen_range(0..living.len())];
        let target = loop {
            let pick = living[rng.gen_range(0..living.len())];
            if pick != actor {
                break pick;
            }
        };
        let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())].id;
        let draft = EventDraft::new(kind)
            .with_actor(actor)
            .with_target(target)
            .with_location(location);
        record(&mut session, draft)?;
    }
    Ok(session)
}

fn expect_crowded_table(outcome: &ScenarioOutcome) -> Result<()> {
    let expected = event_count(outcome) + 1;
    for h in &outcome.resolution.hypotheses {
        ensure!(h.details.len() == expected, "rank {} lost details", h.rank);
    }
    let top = outcome
        .resolution
        .hypotheses
        .first()
        .context("resolution has no hypotheses")?;
    ensure!(top.weight > 90.0, "primary guess only carries {:.1}%", top.weight);
    Ok(())
}
