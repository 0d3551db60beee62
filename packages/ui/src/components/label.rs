use dioxus::prelude::*;

/// Form field label.
#[component]
pub fn Label(
    #[props(default = "".to_string())] html_for: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "label {class}",
            {children}
        }
    }
}
