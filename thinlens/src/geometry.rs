#![warn(missing_docs)]
//! Construction of ray diagrams
//!
//! A [`RayDiagram`] contains everything needed to draw an imaging situation in pixel space: the
//! optical axis, the lens, the focal points, object and image arrows, the three characteristic
//! rays and a few text labels. The diagram is independent of any drawing backend. It is consumed
//! by the SVG exporter ([`crate::plot`]) as well as by the GUI.
//!
//! Pixel coordinates have their origin in the upper left corner with the y axis pointing
//! downwards. Physical coordinates (cm) have their origin in the lens center with the y axis
//! pointing upwards.
use log::warn;
use nalgebra::{Point2, Vector2};
use uom::si::length::centimeter;

use crate::{
    error::{LensResult, ThinLensError},
    optics::{ImageKind, ImageResult},
    parameters::LensParameters,
    utils::{f64_to_usize, usize_to_f64},
};

/// default scale in pixels per cm
pub const DEFAULT_SCALE: f64 = 20.0;
/// horizontal position of the lens relative to the drawing width
pub const LENS_POSITION_RATIO: f64 = 0.6;
/// half of the drawn lens height in pixels
pub const LENS_HALF_HEIGHT: f64 = 150.0;
/// half of the drawn lens thickness in pixels
pub const LENS_HALF_WIDTH: f64 = 30.0;
/// length of an arrow head in pixels
pub const ARROW_HEAD_LENGTH: f64 = 20.0;
/// half width of an arrow head in pixels
pub const ARROW_HEAD_HALF_WIDTH: f64 = 10.0;
/// default dash length for back projections in pixels
pub const DASH_LENGTH: f64 = 10.0;

/// Role of a diagram element. Renderers map it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// object arrow and its labels
    Object,
    /// image arrow and its labels
    Image,
    /// characteristic rays
    Ray,
    /// focal point markers
    Marker,
    /// lens outline and optical axis
    Lens,
}
impl Tint {
    /// RGB color of this tint.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Object => (0, 0, 255),
            Self::Image | Self::Ray | Self::Marker => (255, 0, 0),
            Self::Lens => (0, 0, 0),
        }
    }
    /// CSS representation of the color (e.g. `rgb(255,0,0)`)
    #[must_use]
    pub fn css(self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgb({r},{g},{b})")
    }
}

/// Size and scale of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
    scale: f64,
}
impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            scale: DEFAULT_SCALE,
        }
    }
}
impl Layout {
    /// Creates a new [`Layout`] of the given size (in pixels) using the [`DEFAULT_SCALE`].
    ///
    /// # Errors
    ///
    /// This function will return an error if width or height are not positive and finite.
    pub fn new(width: f64, height: f64) -> LensResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ThinLensError::Parameter(format!(
                "invalid drawing size {width} x {height}"
            )));
        }
        Ok(Self {
            width,
            height,
            scale: DEFAULT_SCALE,
        })
    }
    /// Modify the scale (pixels per cm).
    ///
    /// # Errors
    ///
    /// This function will return an error if the scale is not positive and finite.
    pub fn with_scale(mut self, scale: f64) -> LensResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ThinLensError::Parameter(
                "scale must be positive and finite".into(),
            ));
        }
        self.scale = scale;
        Ok(self)
    }
    /// Return a copy of this layout with a new size. An invalid size is ignored and the
    /// unmodified layout is returned.
    #[must_use]
    pub fn resized(self, width: f64, height: f64) -> Self {
        Self::new(width, height).map_or_else(
            |_| {
                warn!("ignoring invalid drawing size {width} x {height}");
                self
            },
            |layout| Self {
                scale: self.scale,
                ..layout
            },
        )
    }
    /// Width of the drawing area in pixels
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }
    /// Height of the drawing area in pixels
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
    /// Scale in pixels per cm
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }
    /// Horizontal pixel position of the lens
    #[must_use]
    pub fn lens_x(&self) -> f64 {
        self.width * LENS_POSITION_RATIO
    }
    /// Vertical pixel position of the optical axis
    #[must_use]
    pub fn axis_y(&self) -> f64 {
        self.height / 2.0
    }
    /// Convert a physical position (cm, origin in lens center, y upwards) into pixel coordinates.
    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> Point2<f64> {
        Point2::new(
            self.scale.mul_add(x, self.lens_x()),
            self.scale.mul_add(-y, self.axis_y()),
        )
    }
    /// Physical x coordinate (cm) of the right border of the drawing area
    #[must_use]
    pub fn right_border(&self) -> f64 {
        (self.width - self.lens_x()) / self.scale
    }
    /// Clip a segment to the drawing area. Returns `None` if the segment lies completely outside.
    #[must_use]
    pub fn clip(&self, segment: &Segment) -> Option<Segment> {
        segment.clipped(Point2::origin(), Point2::new(self.width, self.height))
    }
}

/// A straight line between two pixel positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2<f64>,
    end: Point2<f64>,
}
impl Segment {
    /// Creates a new [`Segment`].
    #[must_use]
    pub const fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }
    /// start point
    #[must_use]
    pub const fn start(&self) -> Point2<f64> {
        self.start
    }
    /// end point
    #[must_use]
    pub const fn end(&self) -> Point2<f64> {
        self.end
    }
    /// Euclidean length
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
    /// Clip this segment to the axis-aligned rectangle spanned by `min` and `max` (Liang-Barsky).
    ///
    /// Returns `None` if no part of the segment lies inside the rectangle. End points inside the
    /// rectangle are kept unchanged.
    #[must_use]
    pub fn clipped(&self, min: Point2<f64>, max: Point2<f64>) -> Option<Self> {
        let d = self.end - self.start;
        let mut t_start: f64 = 0.0;
        let mut t_end: f64 = 1.0;
        for (p, q) in [
            (-d.x, self.start.x - min.x),
            (d.x, max.x - self.start.x),
            (-d.y, self.start.y - min.y),
            (d.y, max.y - self.start.y),
        ] {
            if p.abs() < f64::EPSILON {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > t_end {
                    return None;
                }
                t_start = f64::max(t_start, t);
            } else {
                if t < t_start {
                    return None;
                }
                t_end = f64::min(t_end, t);
            }
        }
        let start = if t_start > 0.0 {
            self.start + d * t_start
        } else {
            self.start
        };
        let end = if t_end < 1.0 {
            self.start + d * t_end
        } else {
            self.end
        };
        Some(Self::new(start, end))
    }
    /// Split this segment into visible dashes for backends without native dash support.
    ///
    /// The segment is divided into `floor(length / (2 * dash_length))` pairs of dash and gap of equal
    /// size. A segment too short for a single pair is returned as a single dash.
    #[must_use]
    pub fn dashes(&self, dash_length: f64) -> Vec<Self> {
        let nr_of_dashes = if dash_length > 0.0 {
            f64_to_usize((self.length() / (2.0 * dash_length)).floor())
        } else {
            0
        };
        if nr_of_dashes == 0 {
            return vec![*self];
        }
        let unit = (self.end - self.start) / (2.0 * usize_to_f64(nr_of_dashes));
        (0..nr_of_dashes)
            .map(|i| {
                let start = self.start + unit * (2.0 * usize_to_f64(i));
                Self::new(start, start + unit)
            })
            .collect()
    }
}

/// An arrow (object or image) consisting of a shaft and a triangular head at its tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    base: Point2<f64>,
    tip: Point2<f64>,
    head: [Point2<f64>; 3],
}
impl Arrow {
    /// Creates a new [`Arrow`] pointing from `base` to `tip`.
    #[must_use]
    pub fn new(base: Point2<f64>, tip: Point2<f64>) -> Self {
        let head = (tip - base).try_normalize(f64::EPSILON).map_or([tip; 3], |dir| {
            let normal = Vector2::new(-dir.y, dir.x);
            let back = tip - dir * ARROW_HEAD_LENGTH;
            [
                tip,
                back + normal * ARROW_HEAD_HALF_WIDTH,
                back - normal * ARROW_HEAD_HALF_WIDTH,
            ]
        });
        Self { base, tip, head }
    }
    /// foot point (on the optical axis)
    #[must_use]
    pub const fn base(&self) -> Point2<f64> {
        self.base
    }
    /// tip of the arrow
    #[must_use]
    pub const fn tip(&self) -> Point2<f64> {
        self.tip
    }
    /// triangle of the arrow head. The first point is the tip.
    #[must_use]
    pub const fn head(&self) -> [Point2<f64>; 3] {
        self.head
    }
    /// the shaft as [`Segment`]
    #[must_use]
    pub const fn shaft(&self) -> Segment {
        Segment::new(self.base, self.tip)
    }
}

/// The three characteristic rays used for the image construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayKind {
    /// incident parallel to the optical axis, refracted through the rear focal point
    Parallel,
    /// incident through the front focal point, refracted parallel to the optical axis
    Focal,
    /// passes the lens center undeviated
    Central,
}

/// A characteristic ray starting at the object tip.
///
/// The physically travelled path consists of the `incident` part (object tip to lens) and the
/// `emergent` part (lens to image tip or to the border of the drawing). For virtual images the
/// emergent rays diverge. In this case `back_projection` holds the (dashed) extension from the
/// lens back to the virtual image tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySpec {
    kind: RayKind,
    incident: Segment,
    emergent: Segment,
    back_projection: Option<Segment>,
}
impl RaySpec {
    /// kind of this ray
    #[must_use]
    pub const fn kind(&self) -> RayKind {
        self.kind
    }
    /// part of the ray between object tip and lens
    #[must_use]
    pub const fn incident(&self) -> Segment {
        self.incident
    }
    /// part of the ray behind the lens
    #[must_use]
    pub const fn emergent(&self) -> Segment {
        self.emergent
    }
    /// solid drawn segments (incident and emergent)
    #[must_use]
    pub const fn solid(&self) -> [Segment; 2] {
        [self.incident, self.emergent]
    }
    /// dashed virtual extension (only for virtual images)
    #[must_use]
    pub const fn back_projection(&self) -> Option<Segment> {
        self.back_projection
    }
}

/// Drawn shape of the lens: an ellipse around the lens center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGlyph {
    center: Point2<f64>,
    half_width: f64,
    half_height: f64,
}
impl LensGlyph {
    /// center of the lens (on the optical axis)
    #[must_use]
    pub const fn center(&self) -> Point2<f64> {
        self.center
    }
    /// half thickness in pixels
    #[must_use]
    pub const fn half_width(&self) -> f64 {
        self.half_width
    }
    /// half height in pixels
    #[must_use]
    pub const fn half_height(&self) -> f64 {
        self.half_height
    }
    /// Sample points of the left (`side = -1.0`) or right (`side = 1.0`) lens surface.
    #[must_use]
    pub fn outline(&self, side: f64, nr_of_points: usize) -> Vec<Point2<f64>> {
        let steps = nr_of_points.max(2) - 1;
        (0..=steps)
            .map(|i| {
                let y = self.half_height * 2.0f64.mul_add(usize_to_f64(i) / usize_to_f64(steps), -1.0);
                let ratio = y / self.half_height;
                let x = self.half_width * ratio.mul_add(-ratio, 1.0).max(0.0).sqrt();
                Point2::new(side.mul_add(x, self.center.x), self.center.y + y)
            })
            .collect()
    }
}

/// A marker on the optical axis (focal point `F` or twice the focal length `2F`)
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: Point2<f64>,
    label: Label,
}
impl Marker {
    /// position on the optical axis
    #[must_use]
    pub const fn position(&self) -> Point2<f64> {
        self.position
    }
    /// text label of the marker
    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }
}

/// A text label
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    position: Point2<f64>,
    tint: Tint,
}
impl Label {
    /// Creates a new [`Label`]. `position` is the upper left corner of the text.
    #[must_use]
    pub fn new(text: &str, position: Point2<f64>, tint: Tint) -> Self {
        Self {
            text: text.to_owned(),
            position,
            tint,
        }
    }
    /// the text
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn text(&self) -> &str {
        &self.text
    }
    /// upper left corner of the text
    #[must_use]
    pub const fn position(&self) -> Point2<f64> {
        self.position
    }
    /// role of the label
    #[must_use]
    pub const fn tint(&self) -> Tint {
        self.tint
    }
}

/// The image part of a diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageGlyph {
    /// a finite image was formed
    Formed {
        /// image arrow
        arrow: Arrow,
        /// real or virtual
        kind: ImageKind,
    },
    /// the object sits in the focal point, the image is formed at infinity
    AtInfinity,
}

/// Complete drawing of an imaging situation.
#[derive(Debug, Clone, PartialEq)]
pub struct RayDiagram {
    layout: Layout,
    axis: Segment,
    lens: LensGlyph,
    markers: Vec<Marker>,
    object: Arrow,
    image: ImageGlyph,
    rays: Vec<RaySpec>,
    labels: Vec<Label>,
}
impl RayDiagram {
    /// Calculate the image of the given parameters and construct its diagram.
    #[must_use]
    pub fn build(parameters: &LensParameters, layout: &Layout) -> Self {
        Self::new(parameters, &parameters.image(), layout)
    }
    /// Construct the diagram from given parameters and an already calculated image.
    ///
    /// If `image` is an error, only object, lens and markers are drawn together with a placeholder
    /// text. No rays are constructed in this case.
    #[must_use]
    pub fn new(
        parameters: &LensParameters,
        image: &LensResult<ImageResult>,
        layout: &Layout,
    ) -> Self {
        let f = parameters.focal_length().get::<centimeter>();
        let u = parameters.object_distance().get::<centimeter>();
        let h = parameters.object_height().get::<centimeter>();

        let axis = Segment::new(
            Point2::new(0.0, layout.axis_y()),
            Point2::new(layout.width(), layout.axis_y()),
        );
        let lens = LensGlyph {
            center: layout.to_pixel(0.0, 0.0),
            half_width: LENS_HALF_WIDTH,
            half_height: LENS_HALF_HEIGHT,
        };
        let object = Arrow::new(layout.to_pixel(-u, 0.0), layout.to_pixel(-u, h));
        let mut labels = vec![Label::new(
            "u",
            Point2::new(
                (layout.scale() * u).mul_add(-0.5, layout.lens_x()),
                layout.axis_y() + 20.0,
            ),
            Tint::Object,
        )];
        let (image_glyph, rays) = match image {
            Ok(image) => {
                let v = image.image_distance().get::<centimeter>();
                let h_img = image.image_height().get::<centimeter>();
                let arrow = Arrow::new(layout.to_pixel(v, 0.0), layout.to_pixel(v, h_img));
                labels.append(&mut image_labels(v, h_img, layout));
                (
                    ImageGlyph::Formed {
                        arrow,
                        kind: image.kind(),
                    },
                    characteristic_rays(f, u, h, v, h_img, image.is_virtual(), layout),
                )
            }
            Err(_) => {
                labels.push(Label::new(
                    "Image at infinity",
                    Point2::new(layout.lens_x() + 100.0, layout.axis_y() - 30.0),
                    Tint::Image,
                ));
                (ImageGlyph::AtInfinity, Vec::new())
            }
        };
        Self {
            layout: *layout,
            axis,
            lens,
            markers: focal_markers(f, layout),
            object,
            image: image_glyph,
            rays,
            labels,
        }
    }
    /// the layout this diagram was constructed for
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }
    /// the optical axis spanning the full width
    #[must_use]
    pub const fn axis(&self) -> Segment {
        self.axis
    }
    /// the lens
    #[must_use]
    pub const fn lens(&self) -> &LensGlyph {
        &self.lens
    }
    /// focal point markers (`F` and `2F` on both sides)
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
    /// the object arrow
    #[must_use]
    pub const fn object(&self) -> &Arrow {
        &self.object
    }
    /// the image
    #[must_use]
    pub const fn image(&self) -> &ImageGlyph {
        &self.image
    }
    /// the characteristic rays. This is empty if no finite image is formed.
    #[must_use]
    pub fn rays(&self) -> &[RaySpec] {
        &self.rays
    }
    /// text labels
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}
fn focal_markers(f: f64, layout: &Layout) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(4);
    for side in [-1.0, 1.0] {
        for (multiple, text, text_offset) in [(1.0, "F", 10.0), (2.0, "2F", 15.0)] {
            let position = layout.to_pixel(side * multiple * f, 0.0);
            markers.push(Marker {
                position,
                label: Label::new(
                    text,
                    Point2::new(position.x - text_offset, position.y + 10.0),
                    Tint::Marker,
                ),
            });
        }
    }
    markers
}
fn image_labels(v: f64, h_img: f64, layout: &Layout) -> Vec<Label> {
    let image_x = layout.to_pixel(v, 0.0).x;
    vec![
        Label::new(
            "v",
            Point2::new(
                (layout.scale() * v).mul_add(0.5, layout.lens_x()),
                layout.axis_y() + 20.0,
            ),
            Tint::Image,
        ),
        Label::new(
            &format!("h': {:.1} cm", h_img.abs()),
            Point2::new(image_x + 10.0, layout.axis_y() - 50.0),
            Tint::Image,
        ),
        Label::new(
            &format!("v: {:.1} cm", v.abs()),
            Point2::new(image_x + 10.0, layout.axis_y() - 20.0),
            Tint::Image,
        ),
    ]
}
/// Construct the three characteristic rays. All values in cm, `v` and `h_img` are signed.
fn characteristic_rays(
    f: f64,
    u: f64,
    h: f64,
    v: f64,
    h_img: f64,
    is_virtual: bool,
    layout: &Layout,
) -> Vec<RaySpec> {
    let px = |x: f64, y: f64| layout.to_pixel(x, y);
    // images close to infinity lie far outside of the drawing area
    let clipped = |segment: Segment| layout.clip(&segment).unwrap_or(segment);
    let object_tip = px(-u, h);
    let image_tip = px(v, h_img);
    let lens_center = px(0.0, 0.0);
    // hit points on the lens plane
    let parallel_hit = px(0.0, h);
    let focal_hit = px(0.0, h_img);
    if is_virtual {
        let x_end = layout.right_border();
        let ray = |kind, hit: Point2<f64>, end: Point2<f64>| RaySpec {
            kind,
            incident: Segment::new(object_tip, hit),
            emergent: clipped(Segment::new(hit, end)),
            back_projection: layout.clip(&Segment::new(hit, image_tip)),
        };
        vec![
            ray(
                RayKind::Parallel,
                parallel_hit,
                px(x_end, h * (1.0 - x_end / f)),
            ),
            ray(RayKind::Focal, focal_hit, px(x_end, h_img)),
            ray(RayKind::Central, lens_center, px(x_end, -h / u * x_end)),
        ]
    } else {
        let ray = |kind, hit: Point2<f64>| RaySpec {
            kind,
            incident: Segment::new(object_tip, hit),
            emergent: clipped(Segment::new(hit, image_tip)),
            back_projection: None,
        };
        vec![
            ray(RayKind::Parallel, parallel_hit),
            ray(RayKind::Focal, focal_hit),
            ray(RayKind::Central, lens_center),
        ]
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{centimeter, utils::test_helper::test_helper::check_logs};
    use approx::assert_abs_diff_eq;

    fn params(f: f64, u: f64, h: f64) -> LensParameters {
        LensParameters::new(centimeter!(f), centimeter!(u), centimeter!(h)).unwrap()
    }
    fn assert_point_eq(a: Point2<f64>, b: Point2<f64>) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }
    /// distance of point `p` from the infinite line through `a` and `b`
    fn distance_to_line(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
        let d = b - a;
        let n = Vector2::new(-d.y, d.x).normalize();
        (p - a).dot(&n).abs()
    }
    #[test]
    fn layout() {
        let layout = Layout::default();
        assert_eq!(layout.lens_x(), 600.0);
        assert_eq!(layout.axis_y(), 300.0);
        assert_point_eq(layout.to_pixel(-15.0, 5.0), Point2::new(300.0, 200.0));
        assert_abs_diff_eq!(layout.right_border(), 20.0);
        assert!(Layout::new(0.0, 100.0).is_err());
        assert!(Layout::new(100.0, f64::NAN).is_err());
        assert!(layout.with_scale(0.0).is_err());
        assert_eq!(layout.with_scale(10.0).unwrap().scale(), 10.0);
    }
    #[test]
    fn layout_resized() {
        let layout = Layout::default().with_scale(25.0).unwrap().resized(800.0, 400.0);
        assert_eq!(layout.width(), 800.0);
        assert_eq!(layout.height(), 400.0);
        assert_eq!(layout.scale(), 25.0);
        testing_logger::setup();
        let unchanged = layout.resized(-1.0, 400.0);
        assert_eq!(unchanged, layout);
        check_logs(
            log::Level::Warn,
            vec!["ignoring invalid drawing size -1 x 400"],
        );
    }
    #[test]
    fn segment_dashes() {
        let segment = Segment::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0));
        let dashes = segment.dashes(10.0);
        assert_eq!(dashes.len(), 5);
        assert_point_eq(dashes[0].start(), Point2::new(0.0, 0.0));
        assert_point_eq(dashes[0].end(), Point2::new(10.0, 0.0));
        assert_point_eq(dashes[4].start(), Point2::new(80.0, 0.0));
        assert_point_eq(dashes[4].end(), Point2::new(90.0, 0.0));
        let short = Segment::new(Point2::new(0.0, 0.0), Point2::new(0.0, 15.0));
        assert_eq!(short.dashes(10.0), vec![short]);
        assert_eq!(segment.dashes(0.0), vec![segment]);
        assert_abs_diff_eq!(short.length(), 15.0);
    }
    #[test]
    fn segment_clipping() {
        let min = Point2::new(0.0, 0.0);
        let max = Point2::new(100.0, 50.0);
        let inside = Segment::new(Point2::new(10.0, 10.0), Point2::new(90.0, 40.0));
        assert_eq!(inside.clipped(min, max), Some(inside));
        let crossing = Segment::new(Point2::new(50.0, 25.0), Point2::new(250.0, 25.0));
        let clipped = crossing.clipped(min, max).unwrap();
        assert_eq!(clipped.start(), crossing.start());
        assert_point_eq(clipped.end(), Point2::new(100.0, 25.0));
        let diagonal = Segment::new(Point2::new(-50.0, -50.0), Point2::new(150.0, 150.0));
        let clipped = diagonal.clipped(min, max).unwrap();
        assert_point_eq(clipped.start(), Point2::new(0.0, 0.0));
        assert_point_eq(clipped.end(), Point2::new(50.0, 50.0));
        let outside = Segment::new(Point2::new(-10.0, 60.0), Point2::new(200.0, 60.0));
        assert_eq!(outside.clipped(min, max), None);
        let layout = Layout::default();
        let vertical = Segment::new(Point2::new(500.0, 300.0), Point2::new(500.0, -1.0e12));
        let clipped = layout.clip(&vertical).unwrap();
        assert_eq!(clipped.start(), vertical.start());
        assert_point_eq(clipped.end(), Point2::new(500.0, 0.0));
    }
    #[test]
    fn object_close_to_focal_point() {
        let layout = Layout::default();
        for u in [5.999_999_9, 6.000_000_1] {
            let diagram = RayDiagram::build(&params(6.0, u, 5.0), &layout);
            assert_eq!(diagram.rays().len(), 3);
            for ray in diagram.rays() {
                for segment in ray.solid().iter().chain(ray.back_projection().iter()) {
                    if layout.clip(segment).is_some() {
                        assert!(segment.length() <= layout.width().hypot(layout.height()) + 1e-6);
                    }
                }
                if let Some(back_projection) = ray.back_projection() {
                    assert!(back_projection.dashes(DASH_LENGTH).len() < 100);
                }
            }
        }
    }
    #[test]
    fn arrow_head() {
        let arrow = Arrow::new(Point2::new(100.0, 300.0), Point2::new(100.0, 200.0));
        let head = arrow.head();
        assert_point_eq(head[0], Point2::new(100.0, 200.0));
        assert_abs_diff_eq!(head[1].y, 220.0, epsilon = 1e-9);
        assert_abs_diff_eq!(head[2].y, 220.0, epsilon = 1e-9);
        assert_abs_diff_eq!((head[1].x - head[2].x).abs(), 20.0, epsilon = 1e-9);
        // downward arrow
        let arrow = Arrow::new(Point2::new(100.0, 300.0), Point2::new(100.0, 350.0));
        assert_abs_diff_eq!(arrow.head()[1].y, 330.0, epsilon = 1e-9);
        // degenerated arrow
        let arrow = Arrow::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert_eq!(arrow.head(), [Point2::new(1.0, 1.0); 3]);
        assert_eq!(arrow.shaft().length(), 0.0);
    }
    #[test]
    fn lens_outline() {
        let diagram = RayDiagram::build(&LensParameters::default(), &Layout::default());
        let outline = diagram.lens().outline(1.0, 5);
        assert_eq!(outline.len(), 5);
        assert_point_eq(outline[0], Point2::new(600.0, 150.0));
        assert_point_eq(outline[2], Point2::new(630.0, 300.0));
        assert_point_eq(outline[4], Point2::new(600.0, 450.0));
        let left = diagram.lens().outline(-1.0, 3);
        assert_point_eq(left[1], Point2::new(570.0, 300.0));
    }
    #[test]
    fn markers() {
        let diagram = RayDiagram::build(&LensParameters::default(), &Layout::default());
        let positions: Vec<f64> = diagram.markers().iter().map(|m| m.position().x).collect();
        assert_eq!(positions, vec![480.0, 360.0, 720.0, 840.0]);
        assert_eq!(diagram.markers()[0].label().text(), "F");
        assert_eq!(diagram.markers()[1].label().text(), "2F");
        assert_point_eq(diagram.markers()[0].label().position(), Point2::new(470.0, 310.0));
    }
    #[test]
    fn real_image() {
        let layout = Layout::default();
        let diagram = RayDiagram::build(&params(6.0, 15.0, 5.0), &layout);
        assert_point_eq(diagram.object().base(), Point2::new(300.0, 300.0));
        assert_point_eq(diagram.object().tip(), Point2::new(300.0, 200.0));
        let ImageGlyph::Formed { arrow, kind } = diagram.image() else {
            panic!("image expected")
        };
        assert_eq!(*kind, ImageKind::Real);
        assert_point_eq(arrow.base(), Point2::new(800.0, 300.0));
        assert_point_eq(arrow.tip(), Point2::new(800.0, 300.0 + 20.0 * 10.0 / 3.0));
        assert_eq!(diagram.rays().len(), 3);
        for ray in diagram.rays() {
            assert!(ray.back_projection().is_none());
            assert_point_eq(ray.incident().start(), diagram.object().tip());
            assert_point_eq(ray.emergent().end(), arrow.tip());
            assert_abs_diff_eq!(ray.incident().end().x, 600.0);
        }
        // parallel ray
        assert_eq!(diagram.rays()[0].kind(), RayKind::Parallel);
        assert_abs_diff_eq!(diagram.rays()[0].incident().end().y, 200.0);
        // focal ray passes the front focal point
        let focal = diagram.rays()[1].incident();
        assert_eq!(diagram.rays()[1].kind(), RayKind::Focal);
        assert!(distance_to_line(Point2::new(480.0, 300.0), focal.start(), focal.end()) < 1e-9);
        assert_abs_diff_eq!(diagram.rays()[1].emergent().start().y, arrow.tip().y);
        // parallel ray passes rear focal point
        let refracted = diagram.rays()[0].emergent();
        assert!(
            distance_to_line(Point2::new(720.0, 300.0), refracted.start(), refracted.end()) < 1e-9
        );
        // central ray is straight
        let central = diagram.rays()[2];
        assert_eq!(central.kind(), RayKind::Central);
        assert_point_eq(central.incident().end(), Point2::new(600.0, 300.0));
        assert!(distance_to_line(arrow.tip(), central.incident().start(), central.incident().end()) < 1e-9);
    }
    #[test]
    fn virtual_image() {
        let layout = Layout::default();
        let diagram = RayDiagram::build(&params(6.0, 3.0, 5.0), &layout);
        let ImageGlyph::Formed { arrow, kind } = diagram.image() else {
            panic!("image expected")
        };
        assert_eq!(*kind, ImageKind::Virtual);
        // v = -6, h' = 10 -> upright image left of the lens
        assert_point_eq(arrow.base(), Point2::new(480.0, 300.0));
        assert_point_eq(arrow.tip(), Point2::new(480.0, 100.0));
        assert_eq!(diagram.rays().len(), 3);
        for ray in diagram.rays() {
            let back = ray.back_projection().unwrap();
            assert_point_eq(back.start(), ray.emergent().start());
            assert_point_eq(back.end(), arrow.tip());
            // emergent rays end on the border of the drawing area
            let end = ray.emergent().end();
            assert!(
                (end.x - layout.width()).abs() < 1e-9 || (end.y - layout.height()).abs() < 1e-9
            );
            // emergent ray lies on the line of its back projection
            assert!(distance_to_line(ray.emergent().end(), back.start(), back.end()) < 1e-6);
        }
        // parallel ray is refracted through rear focal point
        let emergent = diagram.rays()[0].emergent();
        assert!(distance_to_line(Point2::new(720.0, 300.0), emergent.start(), emergent.end()) < 1e-9);
        // focal ray leaves the lens parallel to the axis
        let emergent = diagram.rays()[1].emergent();
        assert_abs_diff_eq!(emergent.start().y, emergent.end().y);
        // focal ray incident comes from the direction of the front focal point
        let incident = diagram.rays()[1].incident();
        assert!(distance_to_line(Point2::new(480.0, 300.0), incident.start(), incident.end()) < 1e-9);
    }
    #[test]
    fn object_in_focal_point() {
        let diagram = RayDiagram::build(&params(6.0, 6.0, 5.0), &Layout::default());
        assert_eq!(*diagram.image(), ImageGlyph::AtInfinity);
        assert!(diagram.rays().is_empty());
        assert!(diagram
            .labels()
            .iter()
            .any(|l| l.text() == "Image at infinity"));
        assert_eq!(diagram.markers().len(), 4);
    }
    #[test]
    fn labels() {
        let diagram = RayDiagram::build(&params(6.0, 15.0, 5.0), &Layout::default());
        let texts: Vec<&str> = diagram.labels().iter().map(Label::text).collect();
        assert_eq!(texts, vec!["u", "v", "h': 3.3 cm", "v: 10.0 cm"]);
        assert_point_eq(diagram.labels()[0].position(), Point2::new(450.0, 320.0));
        assert_point_eq(diagram.labels()[1].position(), Point2::new(700.0, 320.0));
        assert_eq!(diagram.labels()[0].tint(), Tint::Object);
    }
    #[test]
    fn deterministic() {
        let layout = Layout::new(1200.0, 700.0).unwrap();
        for p in [params(6.0, 15.0, 5.0), params(6.0, 3.0, 5.0), params(6.0, 6.0, 5.0)] {
            assert_eq!(RayDiagram::build(&p, &layout), RayDiagram::build(&p, &layout));
        }
    }
    #[test]
    fn tint() {
        assert_eq!(Tint::Object.css(), "rgb(0,0,255)");
        assert_eq!(Tint::Ray.rgb(), (255, 0, 0));
        assert_eq!(Tint::Lens.rgb(), (0, 0, 0));
    }
}
