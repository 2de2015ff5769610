//=============================================================================
// File: src/screens/checkout.rs
//=============================================================================
use api::form::CardField;
use api::form::ShippingField;
use api::CheckoutError;
use api::CheckoutForm;
use api::FormUpdate;
use api::NavigationState;
use api::PaymentMethod;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;
use crate::components::order_placed_overlay::OrderPlacedOverlay;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::hooks::use_checkout::use_checkout;
use crate::screens::cart::cart_total;

/// The inputs for whichever payment method is selected.
///
/// Values typed into the hidden branch are kept in `form`; they are simply not
/// shown.
#[component]
pub fn PaymentFields(mut form: Signal<CheckoutForm>) -> Element {
    let method = form.read().payment_method;

    rsx! {
        label {
            r#for: "paymentMethod",
            "Payment Method"
            select {
                id: "paymentMethod",
                name: "paymentMethod",
                required: true,
                value: "{method.name()}",
                onchange: move |evt: FormEvent| {
                    match evt.value().parse::<PaymentMethod>() {
                        Ok(m) => form.write().apply(FormUpdate::PaymentMethod(m)),
                        Err(_) => dioxus_logger::tracing::warn!("unknown payment method {}", evt.value()),
                    }
                },
                for m in PaymentMethod::iter() {
                    option {
                        value: "{m.name()}",
                        selected: m == method,
                        "{m.label()}"
                    }
                }
            }
        }

        match method {
            PaymentMethod::CreditCard => rsx! {
                div {
                    class: "card-details",
                    {card_input(form, CardField::CardNumber)}
                    Grid {
                        {card_input(form, CardField::ExpiryMonth)}
                        {card_input(form, CardField::ExpiryYear)}
                    }
                    {card_input(form, CardField::Cvc)}
                }
            },
            PaymentMethod::PayPal => rsx! {
                Input {
                    label: "PayPal Email",
                    name: "paypalEmail",
                    input_type: "email",
                    placeholder: "Enter your PayPal email",
                    value: "{form.read().paypal_email}",
                    required: true,
                    on_input: move |v: String| form.write().apply(FormUpdate::PaypalEmail(v)),
                }
            },
        }
    }
}

fn card_input(mut form: Signal<CheckoutForm>, field: CardField) -> Element {
    rsx! {
        Input {
            label: "{field.label()}",
            name: "{field.name()}",
            placeholder: "{field.placeholder()}",
            value: "{form.read().card.get(field)}",
            required: true,
            max_len: field.max_len(),
            on_input: move |v: String| form.write().apply(FormUpdate::Card(field, v)),
        }
    }
}

/// What to show under the form after a failed submit. A submit turned away
/// because another one is still running leaves the screen as it is.
fn failure_notice(err: &CheckoutError) -> Option<String> {
    match err {
        CheckoutError::SubmissionInFlight => None,
        other => Some(other.user_message()),
    }
}

#[component]
pub fn CheckoutScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let checkout = use_checkout();

    // Consumed once from the navigation that opened checkout, so a later
    // visit without fresh state does not pick up this cart again.
    let mut navigation_state = app_state_mut.navigation_state;
    let cart = use_hook(move || NavigationState::take_cart_items(&mut navigation_state.write()));

    let mut form = use_signal(CheckoutForm::default);
    let mut celebrating = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal::<Option<String>>(|| None);

    let signed_in = app_state_mut.session.read().is_some();
    let total = format!("{:.2}", cart_total(&cart));
    let item_count = cart.len();

    let order_cart = cart.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        submit_error.set(None);
        let checkout = checkout.clone();
        let cart = order_cart.clone();
        let snapshot = form.read().clone();

        spawn(async move {
            match checkout.place_order(&snapshot, &cart).await {
                Ok(placed) => {
                    celebrating.set(true);
                    placed.redirect().await;
                }
                Err(e) => {
                    if let Some(notice) = failure_notice(&e) {
                        submit_error.set(Some(notice));
                        submitting.set(false);
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "checkout-screen",
            Card {
                h3 { "Checkout" }
                p {
                    "{item_count} item(s), total ${total}"
                }
                if !signed_in {
                    p {
                        small { "Sign in to place your order." }
                    }
                }
                form {
                    class: "payment-form",
                    onsubmit: on_submit,
                    for field in ShippingField::iter() {
                        Input {
                            key: "{field.name()}",
                            label: "{field.label()}",
                            name: "{field.name()}",
                            input_type: "{field.input_type()}",
                            value: "{form.read().shipping.get(field)}",
                            required: true,
                            on_input: move |v: String| form.write().apply(FormUpdate::Shipping(field, v)),
                        }
                    }
                    PaymentFields { form }
                    if let Some(err) = submit_error() {
                        p {
                            role: "alert",
                            small { style: "color: var(--pico-del-color);", "{err}" }
                        }
                    }
                    Button {
                        submit: true,
                        disabled: submitting(),
                        busy: submitting(),
                        "Place Order"
                    }
                }
            }
            OrderPlacedOverlay { visible: celebrating() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(method: PaymentMethod) -> Element {
        let form = use_signal(|| {
            let mut form = CheckoutForm::default();
            form.apply(FormUpdate::Card(CardField::CardNumber, "4242".to_string()));
            form.apply(FormUpdate::PaypalEmail("buyer@paypal.example".to_string()));
            form.apply(FormUpdate::PaymentMethod(method));
            form
        });
        rsx! { PaymentFields { form } }
    }

    fn render(method: PaymentMethod) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { method });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn credit_card_shows_card_inputs_only() {
        let html = render(PaymentMethod::CreditCard);
        for name in ["cardNumber", "expiryMonth", "expiryYear", "cvc"] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
        assert!(html.contains("maxlength=\"4\""));
        assert!(html.contains("value=\"4242\""));
        assert!(!html.contains("paypalEmail"));
    }

    #[test]
    fn paypal_shows_only_paypal_email() {
        let html = render(PaymentMethod::PayPal);
        assert!(html.contains("name=\"paypalEmail\""));
        assert!(html.contains("value=\"buyer@paypal.example\""));
        assert!(!html.contains("cardNumber"));
        assert!(!html.contains("name=\"cvc\""));
    }

    #[test]
    fn overlapping_submit_shows_nothing() {
        assert_eq!(failure_notice(&CheckoutError::SubmissionInFlight), None);
        assert_eq!(
            failure_notice(&CheckoutError::MissingIdentity).as_deref(),
            Some("Please sign in before placing an order.")
        );
        let rejected = CheckoutError::Rejected {
            status: 500,
            body: None,
        };
        assert!(failure_notice(&rejected).is_some_and(|m| m.contains("500")));
    }

    #[test]
    fn both_methods_are_offered() {
        let html = render(PaymentMethod::PayPal);
        assert!(html.contains("Credit Card"));
        assert!(html.contains(">PayPal<"));
    }
}
