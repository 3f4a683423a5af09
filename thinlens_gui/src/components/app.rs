use dioxus::prelude::*;
use thinlens::{Scene, SceneEvent};

use crate::{
    components::{
        controls::Controls,
        diagram::Diagram,
        logger::logger_component::Logger,
        status::{image_state, Status},
    },
    FRAME_PERIOD, THINLENS_UI_LOGS,
};

#[component]
pub fn App() -> Element {
    let mut scene = use_signal(Scene::default);
    let mut frame = use_signal(|| Scene::default().update());
    let mut controls = use_signal(|| scene.peek().controls().to_vec());

    use_future(move || async move {
        loop {
            tokio::time::sleep(FRAME_PERIOD).await;
            let next = scene.write().update();
            if *frame.peek() != next {
                let state = image_state(&next);
                if image_state(&frame.peek()) != state {
                    THINLENS_UI_LOGS
                        .write()
                        .add_log(&format!("image changed to: {state}"));
                }
                frame.set(next);
            }
            let current = scene.peek().controls().to_vec();
            if *controls.peek() != current {
                controls.set(current);
            }
        }
    });

    rsx! {
        div { class: "app",
            div {
                class: "diagram-container",
                onresize: move |e: Event<ResizeData>| {
                    if let Ok(size) = e.data().get_content_box_size() {
                        scene
                            .write()
                            .push_event(SceneEvent::Resize {
                                width: size.width,
                                height: size.height,
                            });
                    }
                },
                Diagram { diagram: frame.read().diagram().clone() }
            }
            Controls { controls: controls(), scene }
            Status { frame: frame() }
            footer { class: "footer", Logger {} }
        }
    }
}
