use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::Route;

/// Where shoppers land after placing an order.
#[component]
pub fn OrdersScreen() -> Element {
    let session = use_context::<AppStateMut>().session;
    let navigator = use_navigator();

    let description = match &*session.read() {
        Some(user) => format!("A confirmation will be sent to {}.", user.email),
        None => "Sign in to see the orders you have placed.".to_string(),
    };

    rsx! {
        Card {
            h3 { "Your Orders" }
            EmptyState {
                title: "Thanks for shopping with us",
                description: Some(description),
                icon: Some("📦".to_string()),
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        navigator.push(Route::Cart {});
                    },
                    "Continue Shopping"
                }
            }
        }
    }
}
