// src/update.rs
//
// The reducer. Pure: touches nothing but `AppState` and describes every
// side effect as a `Command`.
//
use crate::messages::{Command, Message};
use crate::routes::Route;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        // ---------------------------------------------------------------
        // Routing
        // ---------------------------------------------------------------
        Message::Navigate(path) => {
            if path != state.current_path {
                commands.push(Command::PushHistory(path.clone()));
            }
            commands.push(Command::SendMessage(Message::RouteChanged(path)));
        }
        Message::RouteChanged(path) => {
            let route = Route::from_path(&path);
            if route.is_none() {
                debug_log!("No page for path {}", path);
            }
            state.current_path = path;
            state.route = route;
            state.sidebar_open = false;
            state.replace_scene(route);
            commands.push(Command::RenderPage(route));
            commands.push(Command::SyncSidebar);
            commands.push(Command::ScrollToTop);
        }

        // ---------------------------------------------------------------
        // Shell
        // ---------------------------------------------------------------
        Message::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            commands.push(Command::SyncSidebar);
        }
        Message::ViewportResized { width, height } => {
            state.viewport.width = width;
            state.viewport.height = height;
            commands.push(Command::ResizeCanvas);
        }
        Message::PointerMoved { x, y } => {
            state.pointer = (x, y);
            if let Some(scene) = state.scene.as_mut() {
                scene.set_pointer(x, y);
            }
        }

        // ---------------------------------------------------------------
        // Contact form
        // ---------------------------------------------------------------
        Message::UpdateContactField { field, value } => {
            // The input already shows the value; nothing to re-render.
            state.contact.set_field(field, value);
        }
        Message::SubmitContact => match state.contact.begin_submit() {
            Some(payload) => {
                commands.push(Command::RenderContactStatus);
                commands.push(Command::SendContactMessage(payload));
            }
            None => debug_log!("Contact form already sending; ignoring submit"),
        },
        Message::ContactDelivered => {
            state.contact.complete::<()>(Ok(()));
            commands.push(Command::RenderContactStatus);
        }
        Message::ContactDeliveryFailed(reason) => {
            debug_log!("Contact delivery failed: {}", reason);
            state.contact.complete(Err(reason));
            commands.push(Command::RenderContactStatus);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact_form::{ContactField, SubmissionStatus};
    use crate::routes::ProjectSlug;

    fn fill(state: &mut AppState) {
        for (field, value) in [
            (ContactField::Name, "Grace"),
            (ContactField::Email, "grace@example.com"),
            (ContactField::Subject, "Compilers"),
            (ContactField::Message, "Hello there"),
        ] {
            let cmds = update(state, Message::UpdateContactField { field, value: value.to_string() });
            assert!(cmds.is_empty());
        }
    }

    #[test]
    fn navigate_pushes_history_then_routes() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::Navigate("/skills".into()));
        assert_eq!(
            cmds,
            vec![
                Command::PushHistory("/skills".into()),
                Command::SendMessage(Message::RouteChanged("/skills".into())),
            ]
        );
    }

    #[test]
    fn navigating_to_the_current_path_does_not_push_history() {
        let mut state = AppState::new();
        update(&mut state, Message::RouteChanged("/about".into()));
        let cmds = update(&mut state, Message::Navigate("/about".into()));
        assert_eq!(cmds, vec![Command::SendMessage(Message::RouteChanged("/about".into()))]);
    }

    #[test]
    fn route_change_renders_and_resets_shell() {
        let mut state = AppState::new();
        state.sidebar_open = true;
        let cmds = update(&mut state, Message::RouteChanged("/projects/tax-chain".into()));
        let route = Some(Route::ProjectDetail(ProjectSlug::TaxChain));
        assert_eq!(state.route, route);
        assert!(!state.sidebar_open);
        assert!(state.scene.is_some());
        assert_eq!(cmds, vec![Command::RenderPage(route), Command::SyncSidebar, Command::ScrollToTop]);
    }

    #[test]
    fn unknown_path_renders_nothing() {
        let mut state = AppState::new();
        update(&mut state, Message::RouteChanged("/".into()));
        let cmds = update(&mut state, Message::RouteChanged("/nope".into()));
        assert_eq!(state.route, None);
        assert!(state.scene.is_none());
        assert_eq!(cmds[0], Command::RenderPage(None));
    }

    #[test]
    fn toggle_sidebar_flips() {
        let mut state = AppState::new();
        update(&mut state, Message::ToggleSidebar);
        assert!(state.sidebar_open);
        update(&mut state, Message::ToggleSidebar);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn submit_then_success_clears_form() {
        let mut state = AppState::new();
        fill(&mut state);
        let cmds = update(&mut state, Message::SubmitContact);
        assert_eq!(cmds.len(), 2);
        match &cmds[1] {
            Command::SendContactMessage(payload) => {
                assert_eq!(payload.from_name, "Grace");
                assert_eq!(payload.message, "Hello there");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(state.contact.status, SubmissionStatus::Sending);

        update(&mut state, Message::ContactDelivered);
        assert_eq!(state.contact.status, SubmissionStatus::Success);
        assert!(state.contact.name.is_empty() && state.contact.message.is_empty());
    }

    #[test]
    fn submit_then_failure_keeps_input() {
        let mut state = AppState::new();
        fill(&mut state);
        update(&mut state, Message::SubmitContact);
        let cmds = update(&mut state, Message::ContactDeliveryFailed("HTTP 400".into()));
        assert_eq!(cmds, vec![Command::RenderContactStatus]);
        assert_eq!(state.contact.status, SubmissionStatus::Error);
        assert_eq!(state.contact.email, "grace@example.com");
        assert_eq!(state.contact.subject, "Compilers");
    }

    #[test]
    fn double_submit_sends_once() {
        let mut state = AppState::new();
        fill(&mut state);
        update(&mut state, Message::SubmitContact);
        assert!(update(&mut state, Message::SubmitContact).is_empty());
    }

    #[test]
    fn resize_updates_viewport() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::ViewportResized { width: 390.0, height: 844.0 });
        assert_eq!(state.viewport.width, 390.0);
        assert_eq!(cmds, vec![Command::ResizeCanvas]);
    }

    #[test]
    fn pointer_is_remembered_across_pages() {
        let mut state = AppState::new();
        update(&mut state, Message::PointerMoved { x: 0.5, y: -0.25 });
        update(&mut state, Message::RouteChanged("/contact".into()));
        assert_eq!(state.pointer, (0.5, -0.25));
        assert!(state.scene.is_some());
    }
}
