//! A centered overlay dialog.
//!
//! The caller owns whether the dialog is open; the component itself holds no
//! state. While closed nothing is rendered at all.

use dioxus::prelude::*;

/// Stacking order of the dimmed backdrop, above ordinary page content.
pub const BACKDROP_LAYER: u32 = 1050;
/// Stacking order of the panel, always above its backdrop.
pub const PANEL_LAYER: u32 = BACKDROP_LAYER + 1;

const _: () = assert!(PANEL_LAYER > BACKDROP_LAYER);

#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",
            style: "
                position: fixed;
                top: 0; left: 0;
                width: 100%; height: 100%;
                background-color: rgba(0, 0, 0, 0.6);
                display: flex;
                justify-content: center;
                align-items: center;
                z-index: {BACKDROP_LAYER};
            ",
            div {
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                style: "
                    margin: auto;
                    background: var(--pico-background-color, white);
                    border-radius: 8px;
                    padding: 20px;
                    min-width: 300px;
                    max-width: 90%;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    z-index: {PANEL_LAYER};
                ",
                {children}
                div {
                    style: "margin-top: 10px; text-align: right;",
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::ElementId;
    use dioxus::dioxus_core::Mutation;
    use dioxus_html::set_event_converter;
    use dioxus_html::PlatformEventData;
    use dioxus_html::SerializedHtmlEventConverter;
    use dioxus_html::SerializedMouseData;
    use std::any::Any;
    use std::rc::Rc;

    #[component]
    fn Harness(open: bool) -> Element {
        rsx! {
            p { "page content" }
            Modal {
                open,
                on_close: move |_| {},
                h3 { "Sign in" }
                p { "Enter your email address." }
            }
        }
    }

    fn render(open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { open });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(false);
        assert!(html.contains("page content"));
        assert!(!html.contains("modal-backdrop"));
        assert!(!html.contains("modal-panel"));
        assert!(!html.contains("Close"));
        assert!(!html.contains("Sign in"));
    }

    #[test]
    fn open_modal_renders_children_then_close() {
        let html = render(true);
        let backdrop = html.find("modal-backdrop").unwrap();
        let panel = html.find("modal-panel").unwrap();
        let title = html.find("Sign in").unwrap();
        let close = html.find(">Close<").unwrap();

        assert!(backdrop < panel);
        assert!(panel < title);
        assert!(title < close);
        assert_eq!(html.matches(">Close<").count(), 1);
    }

    thread_local! {
        static CLOSES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
    }

    #[component]
    fn CountingHarness() -> Element {
        rsx! {
            Modal {
                open: true,
                on_close: move |_| CLOSES.with(|n| n.set(n.get() + 1)),
                p { "Are you sure?" }
            }
        }
    }

    fn click(dom: &VirtualDom, id: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        dom.runtime().handle_event("click", event, id);
    }

    #[test]
    fn each_close_click_calls_on_close_once() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(CountingHarness);
        let mutations = dom.rebuild_to_vec();

        let listeners: Vec<ElementId> = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(listeners.len(), 1, "only the Close button listens for clicks");

        assert_eq!(CLOSES.with(|n| n.get()), 0);
        click(&dom, listeners[0]);
        assert_eq!(CLOSES.with(|n| n.get()), 1);
        click(&dom, listeners[0]);
        assert_eq!(CLOSES.with(|n| n.get()), 2);
    }

    #[test]
    fn panel_stacks_above_backdrop() {
        let html = render(true);
        assert!(html.contains(&format!("z-index: {BACKDROP_LAYER}")));
        assert!(html.contains(&format!("z-index: {PANEL_LAYER}")));
    }
}
