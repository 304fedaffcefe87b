use dioxus::prelude::*;

/// Top bar holding the route links. The links themselves come from the
/// binary, which owns the `Route` enum.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Recordbook" }
            div { class: "navbar-links", {children} }
        }
    }
}
