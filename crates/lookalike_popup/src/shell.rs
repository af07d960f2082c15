use std::mem;

use lookalike_client::{ClientHandle, ClientSettings, RequestError};
use lookalike_core::{update, Msg, PopupOptions, PopupState, PopupViewModel};

use crate::effects::{event_to_msg, run_effects, Navigator};

/// Owns the controller state and the client bridge for one popup lifetime.
///
/// The embedder feeds user interactions in through [`dispatch`], calls
/// [`pump`] from its event loop to drain request completions, and repaints
/// whenever [`take_view`] yields a view.
///
/// [`dispatch`]: PopupShell::dispatch
/// [`pump`]: PopupShell::pump
/// [`take_view`]: PopupShell::take_view
pub struct PopupShell {
    state: PopupState,
    client: ClientHandle,
    settings: ClientSettings,
    navigator: Box<dyn Navigator>,
}

impl PopupShell {
    pub fn new(
        settings: ClientSettings,
        navigator: Box<dyn Navigator>,
    ) -> Result<Self, RequestError> {
        Self::with_options(settings, PopupOptions::default(), navigator)
    }

    pub fn with_options(
        settings: ClientSettings,
        options: PopupOptions,
        navigator: Box<dyn Navigator>,
    ) -> Result<Self, RequestError> {
        let client = ClientHandle::new(settings.clone())?;
        Ok(Self {
            state: PopupState::with_options(options),
            client,
            settings,
            navigator,
        })
    }

    /// Feeds one message through the state machine, then executes whatever
    /// effects fall out. The state transition lands before any request is
    /// issued, so a repaint between the two observes the loading view.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        run_effects(
            effects,
            &self.client,
            &self.settings,
            self.navigator.as_mut(),
        );
    }

    /// Drains request completions from the client thread into the state
    /// machine. Non-blocking; call it from the embedder's event loop.
    pub fn pump(&mut self) {
        while let Some(event) = self.client.try_recv() {
            self.dispatch(event_to_msg(event));
        }
    }

    /// The next view to paint, or `None` when nothing visible changed since
    /// the last call.
    pub fn take_view(&mut self) -> Option<PopupViewModel> {
        if self.state.consume_dirty() {
            Some(self.state.view())
        } else {
            None
        }
    }

    /// Current view regardless of the dirty flag.
    pub fn view(&self) -> PopupViewModel {
        self.state.view()
    }
}
