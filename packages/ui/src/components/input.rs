use dioxus::prelude::*;

/// Styled text input used across the auth forms.
#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type;

    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
