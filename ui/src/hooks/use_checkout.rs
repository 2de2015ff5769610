use std::rc::Rc;

use api::Checkout;
use api::CurrentUser;
use api::HttpOrderGateway;
use api::IdentityProvider;
use api::Navigate;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::Route;

/// Reads the signed-in user from the session signal.
#[derive(Clone, Copy)]
pub struct SessionIdentity {
    session: Signal<Option<CurrentUser>>,
}

impl IdentityProvider for SessionIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.session.peek().as_ref().cloned()
    }
}

/// Drives the Dioxus router from plain paths.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl Navigate for RouterNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        let Ok(route) = path.parse::<Route>() else {
            dioxus_logger::tracing::warn!("No route for path {}", path);
            return;
        };
        let failure = if replace {
            self.navigator.replace(route)
        } else {
            self.navigator.push(route)
        };
        if failure.is_some() {
            dioxus_logger::tracing::warn!("Navigation to {} failed", path);
        }
    }
}

pub type StorefrontCheckout = Checkout<HttpOrderGateway, SessionIdentity, RouterNavigator>;

/// Builds the checkout service once per mounted component, wired to the
/// configured order service, the session and the router.
pub fn use_checkout() -> Rc<StorefrontCheckout> {
    let app_state = use_context::<AppState>();
    let session = use_context::<AppStateMut>().session;
    let navigator = use_navigator();

    use_hook(move || {
        let config = app_state.checkout_config.clone();
        Rc::new(Checkout::new(
            HttpOrderGateway::new(&config),
            SessionIdentity { session },
            RouterNavigator { navigator },
            config,
        ))
    })
}
