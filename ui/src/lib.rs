// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
mod components;
pub mod hooks;
mod screens;

use api::CheckoutConfig;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use components::sign_in_modal::SignInModal;
use screens::cart::sample_cart;
use screens::cart::CartScreen;
use screens::checkout::CheckoutScreen;
use screens::orders::OrdersScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// The storefront's routes. Every page shares the [Shell] layout.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", CartScreen)]
        Cart {},
        #[route("/checkout", CheckoutScreen)]
        Checkout {},
        #[route("/orders", OrdersScreen)]
        Orders {},
}

/// Header with navigation and the session controls, above the active page.
#[component]
fn Shell() -> Element {
    let mut session = use_context::<AppStateMut>().session;
    let mut is_sign_in_open = use_signal(|| false);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li { strong { "Epic Bazaar" } }
                    }
                    ul {
                        li { Link { to: Route::Cart {}, "Cart" } }
                        li { Link { to: Route::Orders {}, "Orders" } }
                        li {
                            match session() {
                                Some(user) => rsx! {
                                    small { style: "margin-right: 0.5rem;", "{user.email}" }
                                    Button {
                                        button_type: ButtonType::Secondary,
                                        outline: true,
                                        on_click: move |_| session.set(None),
                                        "Sign out"
                                    }
                                },
                                None => rsx! {
                                    Button {
                                        button_type: ButtonType::Contrast,
                                        outline: true,
                                        on_click: move |_| is_sign_in_open.set(true),
                                        "Sign in"
                                    }
                                },
                            }
                        }
                    }
                }
            }
            div {
                class: "content",
                Outlet::<Route> {}
            }
        }
        SignInModal { is_open: is_sign_in_open }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .content {
        padding: 0 1rem;
    }

    .payment-form select {
        margin-top: 0.25rem;
    }

    .card-details .grid {
        gap: 1rem;
    }

    .card-details input[name="cvc"] {
        width: 30%;
        min-width: 6rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Provides app-wide state, then hands over to the router.
#[component]
fn AppBody() -> Element {
    let checkout_config = use_hook(CheckoutConfig::from_env);
    dioxus_logger::tracing::info!(
        "orders will be sent to {}",
        checkout_config.orders_endpoint()
    );

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(checkout_config.clone()));

    let session = use_signal(|| None);
    let cart = use_signal(sample_cart);
    let navigation_state = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        session,
        cart,
        navigation_state,
    });

    rsx! {
        Router::<Route> {}
    }
}
