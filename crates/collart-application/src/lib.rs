//! Application layer of the Collart client.
//!
//! One view model per screen. Each owns an observable state (subscribe to a
//! `watch` receiver or take a snapshot), talks to the backend only through
//! the service traits of `collart-core`, and runs its calls inside a
//! [`ViewScope`] that is cancelled with the screen.

/// Logs a failed call under `target` unless it was cancelled, then hands the
/// error back for `map_err`.
macro_rules! log_failure {
    ($target:expr, $action:expr, $err:expr) => {{
        let err: collart_core::error::CollartError = $err;
        if !err.is_cancelled() {
            tracing::warn!(target: $target, "Failed to {}: {err}", $action);
        }
        err
    }};
}

pub mod auth;
pub mod chats;
pub mod conversation;
pub mod home;
pub mod interactions;
pub mod lifecycle;
pub mod observable;
pub mod order_editor;
pub mod portfolio_editor;
pub mod profile;

#[cfg(test)]
mod testing;

pub use auth::{AuthState, AuthViewModel};
pub use chats::{ChatsState, ChatsViewModel};
pub use conversation::{ConversationState, ConversationViewModel};
pub use home::{HomeState, HomeViewModel};
pub use interactions::{InteractionsState, InteractionsViewModel};
pub use lifecycle::ViewScope;
pub use observable::Observable;
pub use order_editor::{OrderEditorState, OrderEditorViewModel};
pub use portfolio_editor::{PortfolioEditorState, PortfolioEditorViewModel};
pub use profile::{ProfileState, ProfileViewModel, UserTabs};
