// src/messages.rs
//
// Everything that can happen in the UI, and the side effects the reducer
// asks for in response.
//
use crate::contact_form::{ContactField, ContactPayload};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Routing
    Navigate(String),     // Internal link clicked; pushes a history entry
    RouteChanged(String), // Initial load or back/forward; no history entry

    // Shell
    ToggleSidebar,
    ViewportResized { width: f64, height: f64 },
    PointerMoved { x: f64, y: f64 }, // Normalised device coordinates

    // Contact form
    UpdateContactField { field: ContactField, value: String },
    SubmitContact,
    ContactDelivered,
    ContactDeliveryFailed(String),
}

/// Side effects to run once the state borrow has been released.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    /// `history.pushState` for an internal navigation.
    PushHistory(String),

    /// Rebuild `#main-content` for the current route, update the document
    /// title and the active sidebar entry.
    RenderPage(Option<Route>),

    ScrollToTop,

    /// Reflect `sidebar_open` on the sidebar element.
    SyncSidebar,

    /// Match the background canvas to the current viewport.
    ResizeCanvas,

    /// Refresh the contact form inputs, submit button and status banner.
    RenderContactStatus,

    /// Hand the payload to the delivery service.
    SendContactMessage(ContactPayload),
}
