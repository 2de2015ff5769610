//! Defines the mutable, reactive state for the application's UI.

use api::CartItem;
use api::CurrentUser;
use api::NavigationState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the core,
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The signed-in user. `None` while signed out.
    pub session: Signal<Option<CurrentUser>>,
    /// The shopper's cart.
    pub cart: Signal<Vec<CartItem>>,
    /// State handed to the next view by the navigation that opened it.
    pub navigation_state: Signal<Option<NavigationState>>,
}
