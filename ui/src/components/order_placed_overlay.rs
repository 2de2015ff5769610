use dioxus::prelude::*;

/// The "order placed" confirmation shown while checkout waits to redirect.
///
/// Always mounted so that flipping `visible` animates it in with a
/// fade-and-grow transition.
#[component]
pub fn OrderPlacedOverlay(visible: bool) -> Element {
    let (opacity, scale) = if visible { (1, 1) } else { (0, 0) };
    rsx! {
        div {
            class: "order-placed-overlay",
            role: "status",
            "aria-hidden": if visible { "false" } else { "true" },
            style: "
                position: fixed;
                left: 50%; top: 40%;
                translate: -50% -50%;
                padding: 2rem 3rem;
                border-radius: var(--pico-border-radius);
                background: var(--pico-primary-background);
                color: var(--pico-primary-inverse);
                font-size: 1.5rem;
                font-weight: bold;
                pointer-events: none;
                opacity: {opacity};
                transform: scale({scale});
                transition: opacity 300ms ease-out, transform 400ms cubic-bezier(0.34, 1.56, 0.64, 1);
                z-index: 1100;
            ",
            "Order Placed Successfully !!!"
        }
    }
}
