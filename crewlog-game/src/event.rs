//! Append-only event log entries and the drafts that produce them.
use crate::locations::location_by_id;
use crate::roster::PlayerId;
use serde::{Deserialize, Serialize};

/// Kind of observed claim. Serialized with the tags the reasoning service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Actor claims the target was at a location.
    #[serde(rename = "saw")]
    Sighting,
    /// Actor accuses the target of a kill or venting.
    #[serde(rename = "kill")]
    Accusation,
    /// Actor finds the target suspicious.
    #[serde(rename = "sus")]
    Suspicion,
    /// Actor vouches for the target.
    #[serde(rename = "trust")]
    Vouch,
    /// Public confirmation that the target did a visual task. No actor.
    #[serde(rename = "scan")]
    Scan,
    /// Actor reports the target's body at a location.
    #[serde(rename = "body")]
    BodyReport,
    /// Session marker written by `start_session`.
    #[serde(rename = "sys")]
    System,
}

impl EventKind {
    /// User-recordable kinds in toolbar order.
    pub const ACTIONS: [Self; 6] = [
        Self::Sighting,
        Self::Accusation,
        Self::Suspicion,
        Self::Vouch,
        Self::BodyReport,
        Self::Scan,
    ];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sighting => "saw",
            Self::Accusation => "kill",
            Self::Suspicion => "sus",
            Self::Vouch => "trust",
            Self::Scan => "scan",
            Self::BodyReport => "body",
            Self::System => "sys",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ACTIONS
            .into_iter()
            .chain(std::iter::once(Self::System))
            .find(|kind| kind.tag() == tag)
    }

    #[must_use]
    pub const fn requires_actor(self) -> bool {
        !matches!(self, Self::Scan | Self::System)
    }

    #[must_use]
    pub const fn requires_target(self) -> bool {
        !matches!(self, Self::System)
    }

    #[must_use]
    pub const fn requires_location(self) -> bool {
        matches!(self, Self::Sighting | Self::BodyReport)
    }
}

/// One immutable line of the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<u8>,
}

impl LogEntry {
    /// Build an entry and its canonical narrative text.
    #[must_use]
    pub fn new(
        kind: EventKind,
        actor: Option<String>,
        target: Option<String>,
        loc: Option<u8>,
    ) -> Self {
        let text = describe(kind, actor.as_deref(), target.as_deref(), loc);
        Self {
            kind,
            text,
            actor,
            target,
            loc,
        }
    }

    /// Marker seeded into the log when a session starts.
    #[must_use]
    pub fn session_marker(players: usize, impostors: u8) -> Self {
        Self {
            kind: EventKind::System,
            text: format!("🎮 游戏初始化 | 玩家: {players} | 内鬼: {impostors}"),
            actor: None,
            target: None,
            loc: None,
        }
    }
}

fn describe(kind: EventKind, actor: Option<&str>, target: Option<&str>, loc: Option<u8>) -> String {
    let a = actor.unwrap_or("?");
    let t = target.unwrap_or("?");
    let l = loc
        .and_then(location_by_id)
        .map_or("?", |location| location.short_name());
    match kind {
        EventKind::Sighting => format!("📍 [位置] {a} 说 {t} 在 {l}"),
        EventKind::Accusation => format!("🔪 [指控] {a} 指控 {t} 杀人/钻管道"),
        EventKind::Suspicion => format!("👀 [怀疑] {a} 怀疑 {t} (在尸体旁)"),
        EventKind::Vouch => format!("🛡️ [担保] {a} 担保 {t} 是好人"),
        EventKind::Scan => format!("💉 [铁证] 大家看见 {t} 做任务 (金水)"),
        EventKind::BodyReport => format!("📢 [报警] {a} 在 {l} 报告 {t} 的尸体"),
        EventKind::System => String::from("🎮"),
    }
}

/// In-progress user action, filled step by step in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDraft {
    pub kind: EventKind,
    pub actor: Option<PlayerId>,
    pub target: Option<PlayerId>,
    pub location: Option<u8>,
}

impl EventDraft {
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            actor: None,
            target: None,
            location: None,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: PlayerId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_target(mut self, target: PlayerId) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub const fn with_location(mut self, location: u8) -> Self {
        self.location = Some(location);
        self
    }

    /// True when every field the kind needs has been chosen.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        if matches!(self.kind, EventKind::System) {
            return false;
        }
        (!self.kind.requires_actor() || self.actor.is_some())
            && (!self.kind.requires_target() || self.target.is_some())
            && (!self.kind.requires_location() || self.location.is_some())
    }
}
