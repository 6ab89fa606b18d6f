use crate::game::{EventDraft, Phase, ResolverConfig, Session};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<Session>,
    pub draft: UseStateHandle<Option<EventDraft>>,
    /// Bumped on every session change; a resolution only lands if it still matches.
    pub generation: Rc<RefCell<u64>>,
    pub notice: UseStateHandle<Option<AttrValue>>,
    pub show_reset: UseStateHandle<bool>,
    pub reset_focus_target: UseStateHandle<AttrValue>,
    pub current_language: UseStateHandle<String>,
    pub config: UseStateHandle<ResolverConfig>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(Session::new),
        draft: use_state(|| None::<EventDraft>),
        generation: use_mut_ref(|| 0_u64),
        notice: use_state(|| None::<AttrValue>),
        show_reset: use_state(|| false),
        reset_focus_target: use_state(|| AttrValue::from("end-game-btn")),
        current_language: use_state(crate::i18n::current_lang),
        config: use_state(crate::solver::resolver_config),
    }
}

impl AppState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Advance the generation counter and return the new value.
    pub fn bump_generation(&self) -> u64 {
        let mut generation = self.generation.borrow_mut();
        *generation += 1;
        *generation
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        *self.generation.borrow()
    }

    /// Apply `f` to a copy of the session and publish it.
    pub fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut next = (*self.session).clone();
        let out = f(&mut next);
        self.bump_generation();
        self.session.set(next);
        out
    }
}
