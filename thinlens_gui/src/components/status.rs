use dioxus::prelude::*;
use thinlens::Frame;
use uom::si::length::centimeter;

/// One-line summary of the image shown in the status bar
pub fn status_text(frame: &Frame) -> String {
    match frame.image() {
        Ok(image) => {
            let object_height = frame.parameters().object_height();
            format!(
                "v = {:.2} cm, h' = {:.2} cm, magnification {:.2} ({})",
                image.image_distance().get::<centimeter>(),
                image.image_height().get::<centimeter>(),
                image.magnification(object_height),
                image.characterization(object_height)
            )
        }
        Err(_) => "Image at infinity".to_owned(),
    }
}
/// Kind of image formed, used to log transitions between real, virtual and missing images.
pub fn image_state(frame: &Frame) -> String {
    frame
        .image()
        .as_ref()
        .map_or_else(|_| "no image".to_owned(), |image| format!("{} image", image.kind()))
}

#[component]
pub fn Status(frame: Frame) -> Element {
    rsx! {
        div { class: "status", "{status_text(&frame)}" }
    }
}
