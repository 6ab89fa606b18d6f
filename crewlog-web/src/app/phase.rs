use crate::game::{EventDraft, EventKind, SessionError};
use std::collections::BTreeMap;

pub use crate::game::Phase;

/// What the console canvas asks for next while a draft is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftStep {
    Actor,
    Target,
    Location,
    Ready,
}

#[must_use]
pub const fn next_step(draft: &EventDraft) -> DraftStep {
    let kind = draft.kind;
    if kind.requires_actor() && draft.actor.is_none() {
        DraftStep::Actor
    } else if draft.target.is_none() {
        DraftStep::Target
    } else if kind.requires_location() && draft.location.is_none() {
        DraftStep::Location
    } else {
        DraftStep::Ready
    }
}

/// Start a new draft, or close the open one when the same action is chosen again.
#[must_use]
pub fn toggle_draft(current: Option<EventDraft>, kind: EventKind) -> Option<EventDraft> {
    match current {
        Some(draft) if draft.kind == kind => None,
        _ => Some(EventDraft::new(kind)),
    }
}

/// Localized banner for a failed start.
#[must_use]
pub fn start_notice(err: &SessionError) -> String {
    match err {
        SessionError::NotEnoughPlayers { have, need } => {
            let have = have.to_string();
            let need = need.to_string();
            let mut args = BTreeMap::new();
            args.insert("have", have.as_str());
            args.insert("need", need.as_str());
            crate::i18n::tr("notice.not_enough_players", Some(&args))
        }
        other => other.to_string(),
    }
}
