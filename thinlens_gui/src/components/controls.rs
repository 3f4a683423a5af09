use dioxus::prelude::*;
use thinlens::{
    parameters::ParameterKind,
    scene::{ControlEvent, EditMode, Key as InputKey, ParameterControl},
    Scene, SceneEvent,
};

/// Map a pressed key onto the input of a text field. Keys without meaning for a numeric field
/// return `None`.
fn map_key(key: &Key) -> Option<InputKey> {
    match key {
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(InputKey::Char(c)),
                _ => None,
            }
        }
        Key::Backspace => Some(InputKey::Backspace),
        Key::Enter => Some(InputKey::Enter),
        _ => None,
    }
}
fn send(mut scene: Signal<Scene>, kind: ParameterKind, event: ControlEvent) {
    scene.write().push_event(SceneEvent::Control { kind, event });
}
fn reset(mut scene: Signal<Scene>) {
    scene.write().push_event(SceneEvent::Reset);
}

#[component]
fn ParameterRow(control: ParameterControl, scene: Signal<Scene>) -> Element {
    let slider_value = control.slider().value();
    let fill = control.slider().fraction() * 100.0;
    let text = control.text_field().text().to_owned();
    let editing = if control.mode() == EditMode::EditingText {
        "editing"
    } else {
        ""
    };
    let kind = control.kind();
    let range = kind.range();
    rsx! {
        div { class: "parameter-row",
            label { r#for: "{kind.id()}", "{kind.label()}" }
            input {
                r#type: "range",
                min: "{range.min()}",
                max: "{range.max()}",
                step: "0.1",
                value: "{slider_value}",
                style: "--fill: {fill:.1}%",
                oninput: move |e: Event<FormData>| {
                    if let Ok(value) = e.data.parsed::<f64>() {
                        send(scene, kind, ControlEvent::SliderSet(value));
                    }
                },
            }
            input {
                id: "{kind.id()}",
                class: "value-field {editing}",
                r#type: "text",
                value: "{text}",
                onfocusin: move |_| send(scene, kind, ControlEvent::TextFocused),
                onclick: move |_| send(scene, kind, ControlEvent::TextFocused),
                onfocusout: move |_| send(scene, kind, ControlEvent::TextBlurred),
                onkeydown: move |e: KeyboardEvent| {
                    let key = e.key();
                    if let Some(input) = map_key(&key) {
                        e.prevent_default();
                        send(scene, kind, ControlEvent::Key(input));
                    } else if key != Key::Tab {
                        e.prevent_default();
                    }
                },
            }
            span { class: "unit", "cm" }
        }
    }
}

/// Sliders and text fields of all lens parameters
#[component]
pub fn Controls(controls: Vec<ParameterControl>, scene: Signal<Scene>) -> Element {
    rsx! {
        div { class: "controls",
            for control in controls {
                ParameterRow { key: "{control.kind()}", control: control.clone(), scene }
            }
            button {
                class: "reset",
                onclick: move |_| reset(scene),
                "Reset"
            }
        }
    }
}
