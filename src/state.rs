use std::cell::RefCell;

use crate::canvas::{self, Scene, Viewport};
use crate::contact_form::ContactForm;
use crate::messages::{Command, Message};
use crate::routes::Route;
use crate::update::update;

// Store global application state
pub struct AppState {
    /// Path as requested, before matching.
    pub current_path: String,
    /// `None` when the path matched no page.
    pub route: Option<Route>,
    pub sidebar_open: bool,
    pub contact: ContactForm,

    // Background animation
    pub scene: Option<Box<dyn Scene>>,
    pub scene_seed: u64,
    /// `performance.now()`-style timestamp (ms) the current scene started at.
    pub scene_started_at: Option<f64>,
    pub viewport: Viewport,
    pub pointer: (f64, f64),
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_path: String::new(),
            route: None,
            sidebar_open: false,
            contact: ContactForm::default(),
            scene: None,
            scene_seed: 0,
            scene_started_at: None,
            viewport: Viewport::default(),
            pointer: (0.0, 0.0),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { scene_seed: seed, ..Self::new() }
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    /// Swap in the background for `route`. Each page visit gets a fresh layout.
    pub fn replace_scene(&mut self, route: Option<Route>) {
        self.scene_started_at = None;
        let Some(route) = route else {
            self.scene = None;
            return;
        };
        self.scene_seed = self.scene_seed.wrapping_add(1);
        let mut scene = canvas::scene_for_route(route, self.scene_seed);
        scene.set_pointer(self.pointer.0, self.pointer.1);
        self.scene = Some(scene);
    }

    /// Seconds since the current scene was first drawn, anchoring it at `now_ms`
    /// on the first call.
    pub fn scene_time(&mut self, now_ms: f64) -> f64 {
        let start = *self.scene_started_at.get_or_insert(now_ms);
        ((now_ms - start) / 1000.0).max(0.0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    // 2. Execute commands after state borrow is dropped
    for cmd in commands {
        match cmd {
            Command::SendMessage(msg) => dispatch_global_message(msg),
            cmd @ Command::SendContactMessage(_) => crate::command_executors::execute_network_command(cmd),
            cmd => crate::command_executors::execute_ui_command(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ProjectSlug;

    #[test]
    fn scene_clock_starts_on_first_frame() {
        let mut state = AppState::new();
        assert_eq!(state.scene_time(5_000.0), 0.0);
        assert_eq!(state.scene_time(6_500.0), 1.5);
        state.replace_scene(Some(Route::Skills));
        assert_eq!(state.scene_time(9_000.0), 0.0);
    }

    #[test]
    fn unmatched_route_clears_the_scene() {
        let mut state = AppState::with_seed(3);
        state.replace_scene(Some(Route::ProjectDetail(ProjectSlug::Quants)));
        assert!(state.scene.is_some());
        assert_eq!(state.scene_seed, 4);
        state.replace_scene(None);
        assert!(state.scene.is_none());
    }
}
