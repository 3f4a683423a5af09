//! This is the documentation for the **thinlens** package.
//!
//! It simulates the image formation of a thin convex lens. Given the focal length `f`, the object
//! distance `u` and the object height `h`, the image distance `v` and image height `h'` are
//! calculated from the thin lens equation. The result can be visualized as a ray diagram showing
//! the three characteristic rays.
//!
//! The package is structured as follows:
//!   - [`optics`]: the calculator
//!   - [`geometry`]: construction of the ray diagram in pixel space
//!   - [`scene`]: state machine of the interactive simulation (sliders and text fields)
//!   - [`plot`]: export of ray diagrams as SVG or PNG files
//!   - [`console`]: command line handling
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod geometry;
pub mod optics;
pub mod parameters;
pub mod plot;
pub mod scene;
pub mod utils;

pub use geometry::{Layout, RayDiagram};
pub use optics::{compute, ImageResult};
pub use parameters::{LensParameters, ParameterKind};
pub use scene::{Frame, Scene, SceneEvent};

/// Return the version information of the currently built thinlens library.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
