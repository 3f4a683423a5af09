use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use thinlens::{
    centimeter,
    error::ThinLensError,
    geometry::{ImageGlyph, Layout, RayDiagram},
    optics::{compute_cm, ImageKind, IMAGE_AT_INFINITY},
    parameters::{LensParameters, ParameterKind},
    plot::render_svg,
    scene::{ControlEvent, Key, Scene, SceneEvent},
};
use uom::si::length::centimeter;

fn params(f: f64, u: f64, h: f64) -> LensParameters {
    LensParameters::new(centimeter!(f), centimeter!(u), centimeter!(h)).unwrap()
}

#[test]
fn real_image_scenario() {
    let image = compute_cm(6.0, 15.0, 5.0).unwrap();
    assert_abs_diff_eq!(image.image_distance().get::<centimeter>(), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        image.image_height().get::<centimeter>(),
        -10.0 / 3.0,
        epsilon = 1e-12
    );
    assert!(!image.is_virtual());
}
#[test]
fn virtual_image_scenario() {
    let image = compute_cm(6.0, 3.0, 5.0).unwrap();
    assert_abs_diff_eq!(image.image_distance().get::<centimeter>(), -6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(image.image_height().get::<centimeter>(), 10.0, epsilon = 1e-12);
    assert!(image.is_virtual());
}
#[test]
fn object_in_focal_point_scenario() {
    let result = compute_cm(6.0, 6.0, 5.0);
    assert_matches!(&result, Err(ThinLensError::DegenerateInput(m)) if m == IMAGE_AT_INFINITY);
    let diagram = RayDiagram::build(&params(6.0, 6.0, 5.0), &Layout::default());
    assert_eq!(*diagram.image(), ImageGlyph::AtInfinity);
    assert!(diagram.rays().is_empty());
}
#[test]
fn formulas_hold_over_parameter_grid() {
    let mut f: f64 = 0.5;
    while f < 20.0 {
        let mut u: f64 = 0.25;
        while u < 40.0 {
            if (u - f).abs() > 1e-9 {
                let h = 3.0;
                let image = compute_cm(f, u, h).unwrap();
                let v = image.image_distance().get::<centimeter>();
                let h_img = image.image_height().get::<centimeter>();
                assert_abs_diff_eq!(v, f * u / (u - f), epsilon = 1e-9);
                assert_abs_diff_eq!(h_img, -v * h / u, epsilon = 1e-9);
                assert_abs_diff_eq!(h_img / h, -v / u, epsilon = 1e-9);
                assert_eq!(image.is_virtual(), u < f);
                let expected_kind = if u < f {
                    ImageKind::Virtual
                } else {
                    ImageKind::Real
                };
                assert_eq!(image.kind(), expected_kind);
            }
            u += 0.75;
        }
        f += 1.5;
    }
}
#[test]
fn rendering_is_deterministic() {
    let layout = Layout::default();
    for p in [params(6.0, 15.0, 5.0), params(6.0, 3.0, 5.0), params(6.0, 6.0, 5.0)] {
        let first = RayDiagram::build(&p, &layout);
        let second = RayDiagram::build(&p, &layout);
        assert_eq!(first, second);
        assert_eq!(render_svg(&first).unwrap(), render_svg(&second).unwrap());
    }
}
#[test]
fn interactive_session() {
    let mut scene = Scene::default();
    // drag object distance slider to its lower end: virtual image
    scene.push_event(SceneEvent::Control {
        kind: ParameterKind::ObjectDistance,
        event: ControlEvent::SliderPressed(0.0),
    });
    scene.push_event(SceneEvent::Control {
        kind: ParameterKind::ObjectDistance,
        event: ControlEvent::SliderReleased,
    });
    let frame = scene.update();
    assert!(frame.image().as_ref().unwrap().is_virtual());
    assert!(frame
        .diagram()
        .rays()
        .iter()
        .all(|r| r.back_projection().is_some()));

    // type the focal length equal to the object distance: image at infinity
    let kind = ParameterKind::FocalLength;
    scene.push_event(SceneEvent::Control {
        kind,
        event: ControlEvent::TextFocused,
    });
    for key in [Key::Backspace, Key::Backspace, Key::Backspace, Key::Char('3'), Key::Enter] {
        scene.push_event(SceneEvent::Control {
            kind,
            event: ControlEvent::Key(key),
        });
    }
    let frame = scene.update();
    assert_matches!(frame.image(), Err(ThinLensError::DegenerateInput(_)));
    assert_eq!(scene.control(kind).text_field().text(), "3.0");

    // invalid text is discarded
    scene.push_event(SceneEvent::Control {
        kind,
        event: ControlEvent::TextFocused,
    });
    for key in [Key::Backspace, Key::Backspace, Key::Backspace, Key::Char('9'), Key::Char('9')] {
        scene.push_event(SceneEvent::Control {
            kind,
            event: ControlEvent::Key(key),
        });
    }
    scene.push_event(SceneEvent::Control {
        kind,
        event: ControlEvent::TextBlurred,
    });
    let frame = scene.update();
    assert_eq!(frame.parameters().value_cm(kind), 3.0);
    assert_eq!(scene.control(kind).text_field().text(), "3.0");
}
