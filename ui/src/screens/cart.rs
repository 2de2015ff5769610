use api::CartItem;
use api::NavigationState;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::Route;

const SAMPLE_CART_JSON: &str = r#"[
    {
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"
    },
    {
        "title": "Mens Casual Premium Slim Fit T-Shirts",
        "price": 22.3,
        "description": "Slim-fitting style, contrast raglan long sleeve.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg"
    }
]"#;

/// The cart the storefront starts with.
pub fn sample_cart() -> Vec<CartItem> {
    serde_json::from_str(SAMPLE_CART_JSON).unwrap_or_else(|e| {
        dioxus_logger::tracing::warn!("could not load sample cart: {}", e);
        Vec::new()
    })
}

/// Sum of all item prices.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

/// Removes the item at `index`. The index comes from the last render, so it
/// may already be gone after a quick second click.
fn remove_item(items: &mut Vec<CartItem>, index: usize) -> Option<CartItem> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        dioxus_logger::tracing::warn!("cart has no item at {}", index);
        None
    }
}

#[component]
pub fn CartScreen() -> Element {
    let AppStateMut {
        mut cart,
        mut navigation_state,
        ..
    } = use_context::<AppStateMut>();
    let navigator = use_navigator();

    let total = use_memo(move || format!("{:.2}", cart_total(&cart.read())));

    if cart.read().is_empty() {
        return rsx! {
            EmptyState {
                title: "Your cart is empty",
                description: Some("Items you add to your cart will show up here.".to_string()),
                icon: Some("🛒".to_string()),
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| cart.set(sample_cart()),
                    "Restore sample cart"
                }
            }
        };
    }

    rsx! {
        Card {
            h3 { "Your Cart" }
            table {
                role: "grid",
                tbody {
                    for (i, item) in cart.read().iter().enumerate() {
                        tr {
                            key: "{i}",
                            td {
                                img {
                                    src: "{item.image}",
                                    alt: "{item.title}",
                                    style: "width: 48px; height: 48px; object-fit: contain;",
                                }
                            }
                            td {
                                strong { "{item.title}" }
                                br {}
                                small { "{item.category}" }
                            }
                            td { style: "text-align: right;", "${item.price}" }
                            td {
                                a {
                                    href: "#",
                                    "aria-label": "Remove",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        remove_item(&mut cart.write(), i);
                                    },
                                    "✕"
                                }
                            }
                        }
                    }
                }
            }
            h4 { style: "text-align: right;", "Total: ${total}" }
            footer {
                Button {
                    on_click: move |_| {
                        navigation_state.set(Some(NavigationState::with_items(cart.read().clone())));
                        navigator.push(Route::Checkout {});
                    },
                    "Proceed to Checkout"
                }
            }
        }
    }
}
