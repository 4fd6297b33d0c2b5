use ::log::trace;

use crate::{actions::Action, effect::Effect, reducer::reduce, state::AppState};

/// Owns the search controller state
///
/// Every key press, search response and timer expiry goes through
/// `dispatch`; nothing else mutates `AppState`.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run `action` through the reducer and hand back the side effects
    /// the caller has to perform (network, clipboard, timers).
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        if !matches!(action, Action::None | Action::TickSpinner) {
            trace!("dispatch {:?}", action);
        }
        let (next, effects) = reduce(self.state.clone(), &action);
        self.state = next;
        effects
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
