use crate::game::Phase;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/console")]
    Console,
    #[at("/analysis")]
    Analysis,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: Phase) -> Self {
        match phase {
            Phase::Setup => Self::Home,
            Phase::Active => Self::Console,
            Phase::Review => Self::Analysis,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<Phase> {
        match self {
            Self::Home => Some(Phase::Setup),
            Self::Console => Some(Phase::Active),
            Self::Analysis => Some(Phase::Review),
            Self::NotFound => None,
        }
    }
}
