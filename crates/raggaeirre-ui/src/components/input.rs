//! Form Field Components
//!
//! Labelled inputs, textareas and selects in the site's `form-group` layout.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// text, email, tel, number
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Adds the `*` marker to the label
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Element id; generated when absent
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Full Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("input"));

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}",
                    "{label}"
                    if props.required {
                        span { class: "required", " *" }
                    }
                }
            }
            input {
                id: "{id}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("textarea"));

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub value: String,
    pub onchange: EventHandler<String>,
    /// (value, label) pairs
    pub options: Vec<(String, String)>,
    #[props(default)]
    pub label: Option<String>,
    /// Label of the empty first option
    #[props(default = "Select an option".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled drop-down with an empty first option
#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("select"));

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}", "{label}" }
            }
            select {
                id: "{id}",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", "{props.placeholder}" }
                for (value, label) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{label}"
                    }
                }
            }
        }
    }
}

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique element id such as `input-7`
fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}
