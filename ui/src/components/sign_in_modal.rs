//! Stand-in sign-in dialog. Real authentication lives outside the storefront;
//! this only records the shopper's email as the current user.

use api::CurrentUser;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::modal::Modal;
use crate::components::pico::Button;
use crate::components::pico::Input;

#[component]
pub fn SignInModal(is_open: Signal<bool>) -> Element {
    let mut session = use_context::<AppStateMut>().session;
    let mut email = use_signal(String::new);
    let mut error = use_signal::<Option<&'static str>>(|| None);

    let mut close = move || {
        email.set(String::new());
        error.set(None);
        is_open.set(false);
    };

    rsx! {
        Modal {
            open: is_open(),
            on_close: move |_| close(),
            h3 { "Sign in" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let value = email.read().trim().to_string();
                    if value.is_empty() {
                        error.set(Some("Please enter your email address."));
                        return;
                    }
                    dioxus_logger::tracing::info!("signed in as {}", value);
                    session.set(Some(CurrentUser::new(value)));
                    close();
                },
                Input {
                    label: "Email",
                    name: "signInEmail",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    required: true,
                    on_input: move |v: String| email.set(v),
                }
                if let Some(err) = error() {
                    small { style: "color: var(--pico-del-color);", "{err}" }
                }
                Button { submit: true, "Continue" }
            }
        }
    }
}
