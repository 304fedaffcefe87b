use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaMagnifyingGlass, FaPlus};

/// Search input with the "Add" button beside it.
#[component]
pub fn SearchBar(value: String, on_input: EventHandler<String>, on_add: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "search-bar",
            span {
                class: "search-icon",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search",
                aria_label: "Search",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_add.call(()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                span { "Add" }
            }
        }
    }
}
