//! Export of ray diagrams as image files
//!
//! The drawing is done using [`plotters`] directly in pixel space of a [`RayDiagram`].
use std::path::Path;

use log::info;
use nalgebra::Point2;
use plotters::{
    coord::Shift,
    element::{Circle, PathElement, Polygon, Text},
    prelude::{BitMapBackend, DrawingArea, DrawingBackend, IntoDrawingArea, SVGBackend},
    style::{Color, IntoFont, RGBAColor, RGBColor, WHITE},
};

use crate::{
    error::{LensResult, ThinLensError},
    geometry::{Arrow, ImageGlyph, RayDiagram, Segment, Tint, DASH_LENGTH},
    utils::{f64_to_i32, f64_to_u32},
};

const FONT_FAMILY: &str = "sans-serif";
const LENS_FILL: RGBAColor = RGBAColor(200, 200, 255, 0.2);
const NR_OF_OUTLINE_POINTS: usize = 41;
/// pixel coordinates are limited to this range before handing them to plotters
const COORD_LIMIT: f64 = 1.0e6;

fn color(tint: Tint) -> RGBColor {
    let (r, g, b) = tint.rgb();
    RGBColor(r, g, b)
}
fn coord(p: Point2<f64>) -> (i32, i32) {
    (
        f64_to_i32(p.x.clamp(-COORD_LIMIT, COORD_LIMIT)),
        f64_to_i32(p.y.clamp(-COORD_LIMIT, COORD_LIMIT)),
    )
}
fn render_error<E: std::fmt::Display>(e: E) -> ThinLensError {
    ThinLensError::Render(format!("drawing of ray diagram failed: {e}"))
}
fn draw_segment<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    segment: &Segment,
    tint: Tint,
    width: u32,
) -> LensResult<()> {
    root.draw(&PathElement::new(
        vec![coord(segment.start()), coord(segment.end())],
        color(tint).stroke_width(width),
    ))
    .map_err(render_error)
}
fn draw_text<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    position: Point2<f64>,
    tint: Tint,
) -> LensResult<()> {
    root.draw(&Text::new(
        text.to_owned(),
        coord(position),
        (FONT_FAMILY, 16).into_font().color(&color(tint)),
    ))
    .map_err(render_error)
}
fn draw_arrow<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    arrow: &Arrow,
    tint: Tint,
) -> LensResult<()> {
    draw_segment(root, &arrow.shaft(), tint, 3)?;
    root.draw(&Polygon::new(
        arrow.head().iter().map(|p| coord(*p)).collect::<Vec<_>>(),
        color(tint).filled(),
    ))
    .map_err(render_error)
}
/// Draw a [`RayDiagram`] onto an arbitrary plotters drawing area.
///
/// # Errors
///
/// This function will return an error if the underlying backend fails.
pub fn draw_diagram<DB: DrawingBackend>(
    diagram: &RayDiagram,
    root: &DrawingArea<DB, Shift>,
) -> LensResult<()> {
    root.fill(&WHITE).map_err(render_error)?;
    draw_segment(root, &diagram.axis(), Tint::Lens, 1)?;

    let lens = diagram.lens();
    let mut outline = lens.outline(1.0, NR_OF_OUTLINE_POINTS);
    outline.extend(lens.outline(-1.0, NR_OF_OUTLINE_POINTS).into_iter().rev());
    let outline: Vec<(i32, i32)> = outline.into_iter().map(coord).collect();
    root.draw(&Polygon::new(outline.clone(), LENS_FILL.filled()))
        .map_err(render_error)?;
    let mut closed = outline;
    if let Some(first) = closed.first().copied() {
        closed.push(first);
    }
    root.draw(&PathElement::new(closed, color(Tint::Lens).stroke_width(2)))
        .map_err(render_error)?;

    for marker in diagram.markers() {
        root.draw(&Circle::new(
            coord(marker.position()),
            4,
            color(Tint::Marker).filled(),
        ))
        .map_err(render_error)?;
        draw_text(
            root,
            marker.label().text(),
            marker.label().position(),
            marker.label().tint(),
        )?;
    }
    for ray in diagram.rays() {
        for segment in &ray.solid() {
            draw_segment(root, segment, Tint::Ray, 1)?;
        }
        if let Some(back_projection) = ray.back_projection() {
            for dash in back_projection.dashes(DASH_LENGTH) {
                draw_segment(root, &dash, Tint::Ray, 1)?;
            }
        }
    }
    draw_arrow(root, diagram.object(), Tint::Object)?;
    if let ImageGlyph::Formed { arrow, .. } = diagram.image() {
        draw_arrow(root, arrow, Tint::Image)?;
    }
    for label in diagram.labels() {
        draw_text(root, label.text(), label.position(), label.tint())?;
    }
    root.present().map_err(render_error)
}
fn raster_size(diagram: &RayDiagram) -> (u32, u32) {
    (
        f64_to_u32(diagram.layout().width()),
        f64_to_u32(diagram.layout().height()),
    )
}
/// Render a [`RayDiagram`] into an SVG document.
///
/// # Errors
///
/// This function will return an error if the drawing fails.
pub fn render_svg(diagram: &RayDiagram) -> LensResult<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, raster_size(diagram)).into_drawing_area();
        draw_diagram(diagram, &root)?;
    }
    Ok(buffer)
}
/// Write a [`RayDiagram`] to a file.
///
/// The format is determined by the file extension. Supported are `svg` and `png`.
///
/// # Errors
///
/// This function will return an error if
///   - the file extension is not supported.
///   - the file could not be written.
pub fn write_diagram(diagram: &RayDiagram, path: &Path) -> LensResult<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("svg") => {
            let root = SVGBackend::new(path, raster_size(diagram)).into_drawing_area();
            draw_diagram(diagram, &root)?;
        }
        Some("png") => {
            let root = BitMapBackend::new(path, raster_size(diagram)).into_drawing_area();
            draw_diagram(diagram, &root)?;
        }
        _ => {
            return Err(ThinLensError::Render(format!(
                "unsupported file type of {}. Choose \".svg\" or \".png\"",
                path.display()
            )))
        }
    }
    info!("ray diagram written to {}", path.display());
    Ok(())
}
