use dioxus::prelude::*;
use records::{FieldSpec, FormErrors, FormValues};

/// Modal form body. Every input is bound to `values`; validation happens in
/// the list view on submit, and failures come back through `errors`.
#[component]
pub fn RecordForm(
    fields: &'static [FieldSpec],
    values: FormValues,
    errors: FormErrors,
    /// Editing an existing record rather than creating one.
    editing: bool,
    #[props(default)] saving: bool,
    on_input: EventHandler<(String, String)>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "record-form",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            for field in fields.iter() {
                div {
                    key: "{field.name}",
                    class: "form-field",
                    input {
                        class: if errors.contains(field.name) { "form-control invalid" } else { "form-control" },
                        name: field.name,
                        r#type: field.kind.input_type(),
                        placeholder: field.placeholder,
                        aria_label: field.placeholder,
                        value: values.get(field.name),
                        oninput: {
                            let name = field.name;
                            move |evt: FormEvent| on_input.call((name.to_string(), evt.value()))
                        },
                    }
                    if let Some(message) = errors.get(field.name) {
                        p { role: "alert", class: "field-error", "{message}" }
                    }
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
                button {
                    class: "btn btn-success",
                    r#type: "submit",
                    disabled: saving,
                    if editing { "Save" } else { "Add" }
                }
            }
        }
    }
}
