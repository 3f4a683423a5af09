use dioxus::prelude::*;
use thinlens::geometry::{
    Arrow, ImageGlyph, LensGlyph, RayDiagram, Segment, Tint, DASH_LENGTH,
};

const NR_OF_OUTLINE_POINTS: usize = 41;

/// SVG path of the lens outline
fn lens_path(lens: &LensGlyph) -> String {
    let right = lens.outline(1.0, NR_OF_OUTLINE_POINTS);
    let left = lens.outline(-1.0, NR_OF_OUTLINE_POINTS);
    let mut path = String::new();
    for (i, p) in right.iter().chain(left.iter().rev()).enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        path += &format!("{command}{:.1},{:.1} ", p.x, p.y);
    }
    path.push('Z');
    path
}
/// SVG `points` attribute of an arrow head
fn head_points(arrow: &Arrow) -> String {
    arrow
        .head()
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn SegmentLine(segment: Segment, tint: Tint, dashed: bool) -> Element {
    let start = segment.start();
    let end = segment.end();
    let dash = if dashed {
        format!("{DASH_LENGTH},{DASH_LENGTH}")
    } else {
        "none".to_owned()
    };
    rsx! {
        line {
            x1: "{start.x}",
            y1: "{start.y}",
            x2: "{end.x}",
            y2: "{end.y}",
            stroke: tint.css(),
            stroke_width: "1",
            stroke_dasharray: dash,
        }
    }
}

#[component]
fn ArrowGlyph(arrow: Arrow, tint: Tint) -> Element {
    let base = arrow.base();
    let tip = arrow.tip();
    rsx! {
        line {
            x1: "{base.x}",
            y1: "{base.y}",
            x2: "{tip.x}",
            y2: "{tip.y}",
            stroke: tint.css(),
            stroke_width: "3",
        }
        polygon { points: head_points(&arrow), fill: tint.css() }
    }
}

/// Inline SVG rendering of a [`RayDiagram`]
#[component]
pub fn Diagram(diagram: RayDiagram) -> Element {
    let width = diagram.layout().width();
    let height = diagram.layout().height();
    let axis = diagram.axis();
    let image_arrow = match diagram.image() {
        ImageGlyph::Formed { arrow, .. } => Some(*arrow),
        ImageGlyph::AtInfinity => None,
    };
    rsx! {
        svg {
            class: "diagram",
            width: "{width}",
            height: "{height}",
            view_box: "0 0 {width} {height}",
            rect { width: "100%", height: "100%", fill: "white" }
            SegmentLine { segment: axis, tint: Tint::Lens, dashed: false }
            path {
                d: lens_path(diagram.lens()),
                fill: "rgba(200,200,255,0.2)",
                stroke: Tint::Lens.css(),
                stroke_width: "2",
            }
            for marker in diagram.markers() {
                circle {
                    cx: "{marker.position().x}",
                    cy: "{marker.position().y}",
                    r: "4",
                    fill: Tint::Marker.css(),
                }
                text {
                    x: "{marker.label().position().x}",
                    y: "{marker.label().position().y}",
                    fill: marker.label().tint().css(),
                    dominant_baseline: "hanging",
                    "{marker.label().text()}"
                }
            }
            for ray in diagram.rays() {
                for segment in ray.solid() {
                    SegmentLine { segment, tint: Tint::Ray, dashed: false }
                }
                if let Some(back_projection) = ray.back_projection() {
                    SegmentLine { segment: back_projection, tint: Tint::Ray, dashed: true }
                }
            }
            ArrowGlyph { arrow: *diagram.object(), tint: Tint::Object }
            if let Some(arrow) = image_arrow {
                ArrowGlyph { arrow, tint: Tint::Image }
            }
            for label in diagram.labels() {
                text {
                    x: "{label.position().x}",
                    y: "{label.position().y}",
                    fill: label.tint().css(),
                    dominant_baseline: "hanging",
                    "{label.text()}"
                }
            }
        }
    }
}
