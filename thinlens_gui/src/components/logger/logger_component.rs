use crate::THINLENS_UI_LOGS;
use dioxus::prelude::*;

#[component]
pub fn Logger() -> Element {
    rsx! {
        div { class: "log-container",
            h5 { "Logs" }
            for log in THINLENS_UI_LOGS.read().logs().iter().rev() {
                div { class: "small", "{log}" }
            }
        }
    }
}
