//! The single owned session value the UI mutates.
use crate::event::{EventDraft, EventKind, LogEntry};
use crate::locations::location_by_id;
use crate::resolve::{Resolution, SolveRequest};
use crate::roster::{Player, PlayerColor, PlayerId, PlayerStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_PLAYERS: usize = 3;
pub const MIN_IMPOSTORS: u8 = 1;
pub const MAX_IMPOSTORS: u8 = 3;
pub const DEFAULT_IMPOSTORS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Active,
    Review,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Active => "active",
            Self::Review => "review",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("at least {need} players are required (have {have})")]
    NotEnoughPlayers { have: usize, need: usize },
    #[error("impostor count must be between {min} and {max} (got {value})")]
    ImpostorCountOutOfRange { value: u8, min: u8, max: u8 },
    #[error("operation requires the {expected} phase (currently {found})")]
    WrongPhase { expected: Phase, found: Phase },
    #[error("reset was not confirmed")]
    ResetDeclined,
}

/// Explicit answer from the reset confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetConfirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    phase: Phase,
    players: Vec<Player>,
    next_id: u64,
    impostor_count: u8,
    log: Vec<LogEntry>,
    results: Option<Resolution>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Setup,
            players: Vec::new(),
            next_id: 1,
            impostor_count: DEFAULT_IMPOSTORS,
            log: Vec::new(),
            results: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn living_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn has_color(&self, color: PlayerColor) -> bool {
        self.players.iter().any(|p| p.name == color.name())
    }

    #[must_use]
    pub const fn impostor_count(&self) -> u8 {
        self.impostor_count
    }

    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    #[must_use]
    pub fn results(&self) -> Option<&Resolution> {
        self.results.as_ref()
    }

    /// Append a player of `color`. Returns `false` when that color is taken.
    pub fn add_player(&mut self, color: PlayerColor) -> bool {
        if self.has_color(color) {
            return false;
        }
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, color));
        true
    }

    /// Only honored during setup.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        if self.phase != Phase::Setup {
            return false;
        }
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    /// # Errors
    ///
    /// Fails outside setup or when `count` is not within 1..=3.
    pub fn set_impostor_count(&mut self, count: u8) -> Result<(), SessionError> {
        self.expect_phase(Phase::Setup)?;
        if !(MIN_IMPOSTORS..=MAX_IMPOSTORS).contains(&count) {
            return Err(SessionError::ImpostorCountOutOfRange {
                value: count,
                min: MIN_IMPOSTORS,
                max: MAX_IMPOSTORS,
            });
        }
        self.impostor_count = count;
        Ok(())
    }

    /// Seed the log and move to the active phase.
    ///
    /// # Errors
    ///
    /// Fails outside setup or with fewer than three players. State is untouched on failure.
    pub fn start_session(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Setup)?;
        if self.players.len() < MIN_PLAYERS {
            return Err(SessionError::NotEnoughPlayers {
                have: self.players.len(),
                need: MIN_PLAYERS,
            });
        }
        self.log.clear();
        self.log
            .push(LogEntry::session_marker(self.players.len(), self.impostor_count));
        self.phase = Phase::Active;
        log::info!(
            "session started with {} players, {} impostors",
            self.players.len(),
            self.impostor_count
        );
        Ok(())
    }

    /// Append a completed draft to the log.
    ///
    /// Incomplete drafts and drafts naming unknown players or locations are
    /// dropped without touching state. A body report marks only its target dead.
    pub fn record_event(&mut self, draft: EventDraft) -> Option<&LogEntry> {
        if self.phase != Phase::Active || !draft.is_complete() {
            return None;
        }
        let kind = draft.kind;
        let actor = if kind.requires_actor() {
            Some(self.player(draft.actor?)?.name.clone())
        } else {
            None
        };
        let target_id = draft.target?;
        let target = self.player(target_id)?.name.clone();
        let loc = if kind.requires_location() {
            Some(location_by_id(draft.location?)?.id)
        } else {
            None
        };

        if kind == EventKind::BodyReport {
            if let Some(victim) = self.players.iter_mut().find(|p| p.id == target_id) {
                victim.status = PlayerStatus::Dead;
            }
        }
        self.log.push(LogEntry::new(kind, actor, Some(target), loc));
        self.log.last()
    }

    /// # Errors
    ///
    /// A declined confirmation leaves the session as it was.
    pub fn reset_session(&mut self, confirmation: ResetConfirmation) -> Result<(), SessionError> {
        if confirmation == ResetConfirmation::Declined {
            return Err(SessionError::ResetDeclined);
        }
        self.log.clear();
        self.results = None;
        for player in &mut self.players {
            player.status = PlayerStatus::Alive;
        }
        self.phase = Phase::Setup;
        Ok(())
    }

    /// Enter review and hand back the payload to resolve.
    ///
    /// # Errors
    ///
    /// Fails unless the session is active.
    pub fn begin_resolution(&mut self) -> Result<SolveRequest, SessionError> {
        self.expect_phase(Phase::Active)?;
        self.results = None;
        self.phase = Phase::Review;
        Ok(self.solve_request())
    }

    /// Store a finished resolution. Ignored once the session has left review.
    pub fn complete_resolution(&mut self, resolution: Resolution) -> bool {
        if self.phase != Phase::Review {
            log::debug!("dropping resolution delivered in {} phase", self.phase);
            return false;
        }
        self.results = Some(resolution);
        true
    }

    pub fn return_to_session(&mut self) -> bool {
        if self.phase != Phase::Review {
            return false;
        }
        self.phase = Phase::Active;
        true
    }

    #[must_use]
    pub fn solve_request(&self) -> SolveRequest {
        SolveRequest {
            players: self.players.iter().map(Player::payload).collect(),
            logs: self.log.clone(),
            impostor_count: self.impostor_count,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                found: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ResolutionSource;

    fn seated(colors: &[PlayerColor]) -> Session {
        let mut session = Session::new();
        for color in colors {
            assert!(session.add_player(*color));
        }
        session
    }

    fn started() -> Session {
        let mut session = seated(&[PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green]);
        session.start_session().unwrap();
        session
    }

    #[test]
    fn duplicate_colors_are_rejected() {
        let mut session = seated(&[PlayerColor::Red]);
        assert!(!session.add_player(PlayerColor::Red));
        assert_eq!(session.players().len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut session = seated(&[PlayerColor::Red, PlayerColor::Blue]);
        let red = session.players()[0].id;
        assert!(session.remove_player(red));
        assert!(!session.remove_player(red));
        assert!(session.add_player(PlayerColor::Red));
        let ids: Vec<u64> = session.players().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn start_requires_three_players_and_changes_nothing_otherwise() {
        let mut session = seated(&[PlayerColor::Red, PlayerColor::Blue]);
        let before = session.clone();
        assert_eq!(
            session.start_session(),
            Err(SessionError::NotEnoughPlayers { have: 2, need: 3 })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn start_seeds_marker_and_activates() {
        let session = started();
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log()[0].kind, EventKind::System);
    }

    #[test]
    fn impostor_count_is_bounded_and_locked_after_start() {
        let mut session = Session::new();
        assert_eq!(session.impostor_count(), 2);
        assert!(session.set_impostor_count(0).is_err());
        assert!(session.set_impostor_count(4).is_err());
        session.set_impostor_count(3).unwrap();
        assert_eq!(session.impostor_count(), 3);

        let mut active = started();
        assert!(matches!(
            active.set_impostor_count(1),
            Err(SessionError::WrongPhase { .. })
        ));
    }

    #[test]
    fn removal_is_setup_only() {
        let mut session = started();
        let id = session.players()[0].id;
        assert!(!session.remove_player(id));
        assert_eq!(session.players().len(), 3);
    }

    #[test]
    fn body_report_kills_only_target() {
        let mut session = started();
        let red = session.players()[0].id;
        let blue = session.players()[1].id;
        let draft = EventDraft::new(EventKind::BodyReport)
            .with_actor(red)
            .with_target(blue)
            .with_location(3);
        assert!(session.record_event(draft).is_some());
        let statuses: Vec<PlayerStatus> = session.players().iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![PlayerStatus::Alive, PlayerStatus::Dead, PlayerStatus::Alive]
        );
        assert_eq!(session.living_players().count(), 2);
    }

    #[test]
    fn incomplete_or_unknown_drafts_are_ignored() {
        let mut session = started();
        let red = session.players()[0].id;
        let before = session.clone();

        assert!(session
            .record_event(EventDraft::new(EventKind::Accusation).with_target(red))
            .is_none());
        assert!(session
            .record_event(
                EventDraft::new(EventKind::Vouch)
                    .with_actor(red)
                    .with_target(PlayerId(99))
            )
            .is_none());
        assert!(session
            .record_event(
                EventDraft::new(EventKind::Sighting)
                    .with_actor(red)
                    .with_target(red)
                    .with_location(42)
            )
            .is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn events_are_ignored_outside_active_phase() {
        let mut session = seated(&[PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green]);
        let red = session.players()[0].id;
        assert!(session
            .record_event(EventDraft::new(EventKind::Scan).with_target(red))
            .is_none());
        assert!(session.log().is_empty());
    }

    #[test]
    fn scan_records_without_actor() {
        let mut session = started();
        let green = session.players()[2].id;
        let entry = session
            .record_event(EventDraft::new(EventKind::Scan).with_target(green))
            .cloned()
            .unwrap();
        assert_eq!(entry.actor, None);
        assert_eq!(entry.target.as_deref(), Some("Green"));
    }

    #[test]
    fn reset_requires_confirmation_and_keeps_roster() {
        let mut session = started();
        let red = session.players()[0].id;
        let blue = session.players()[1].id;
        session.record_event(
            EventDraft::new(EventKind::BodyReport)
                .with_actor(red)
                .with_target(blue)
                .with_location(1),
        );
        let before = session.clone();
        assert_eq!(
            session.reset_session(ResetConfirmation::Declined),
            Err(SessionError::ResetDeclined)
        );
        assert_eq!(session, before);

        session.reset_session(ResetConfirmation::Confirmed).unwrap();
        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.log().is_empty());
        assert!(session.results().is_none());
        assert_eq!(session.players().len(), 3);
        assert!(session.players().iter().all(Player::is_alive));
    }

    #[test]
    fn resolution_lifecycle_follows_phase() {
        let mut session = started();
        let request = session.begin_resolution().unwrap();
        assert_eq!(session.phase(), Phase::Review);
        assert_eq!(request.players.len(), 3);
        assert_eq!(request.logs.len(), 1);
        assert_eq!(request.impostor_count, 2);
        assert!(session.begin_resolution().is_err());

        let resolution = Resolution {
            hypotheses: Vec::new(),
            source: ResolutionSource::Remote,
        };
        assert!(session.complete_resolution(resolution.clone()));
        assert_eq!(session.results(), Some(&resolution));

        assert!(session.return_to_session());
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.results().is_some());

        session.begin_resolution().unwrap();
        assert!(session.results().is_none());
        session.reset_session(ResetConfirmation::Confirmed).unwrap();
        assert!(!session.complete_resolution(resolution));
        assert!(session.results().is_none());
    }
}
