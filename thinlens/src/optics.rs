#![warn(missing_docs)]
//! The thin lens calculator
//!
//! This module solves the thin lens equation `1/f = 1/u + 1/v` for the image distance `v` and
//! derives the image height `h'` from the magnification `m = h'/h = -v/u`.
//!
//! Sign convention: the object is placed in front of the lens at a positive distance `u`. A
//! positive image distance denotes a real image behind the lens, a negative one a virtual image on
//! the object side. A negative image height denotes an inverted image.
use num::Zero;
use serde::{Deserialize, Serialize};
use strum::Display;
use uom::si::{f64::Length, length::centimeter};

use crate::{
    error::{LensResult, ThinLensError},
    parameters::LensParameters,
};

/// Message used when the object sits in the focal point.
pub const IMAGE_AT_INFINITY: &str =
    "the object distance equals the focal length, the image is formed at infinity";

/// Kind of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ImageKind {
    /// light rays physically converge behind the lens. The image can be projected onto a screen.
    Real,
    /// light rays only appear to diverge from a point in front of the lens.
    Virtual,
}
/// Orientation of an image with respect to the object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// image is upside down
    Inverted,
    /// image has the same orientation as the object
    Upright,
}
/// Size of an image with respect to the object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ImageSize {
    /// image is larger than the object
    Magnified,
    /// image is smaller than the object
    Reduced,
    /// image has the same size as the object (object at 2f)
    #[strum(serialize = "same size")]
    SameSize,
}

/// Result of an imaging calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageResult {
    image_distance: Length,
    image_height: Length,
    is_virtual: bool,
}
impl ImageResult {
    /// Signed image distance `v`. Negative values denote a virtual image.
    #[must_use]
    pub const fn image_distance(&self) -> Length {
        self.image_distance
    }
    /// Signed image height `h'`. Negative values denote an inverted image.
    #[must_use]
    pub const fn image_height(&self) -> Length {
        self.image_height
    }
    /// Returns `true` if the image is virtual (object inside the focal length).
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        self.is_virtual
    }
    /// Return the [`ImageKind`] of this image.
    #[must_use]
    pub const fn kind(&self) -> ImageKind {
        if self.is_virtual {
            ImageKind::Virtual
        } else {
            ImageKind::Real
        }
    }
    /// Lateral magnification `h'/h` of the given object height.
    #[must_use]
    pub fn magnification(&self, object_height: Length) -> f64 {
        (self.image_height / object_height).value
    }
    /// Return the [`Orientation`] of the image.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.image_height.is_sign_negative() {
            Orientation::Inverted
        } else {
            Orientation::Upright
        }
    }
    /// Return the [`ImageSize`] of the image compared to the given object height.
    #[must_use]
    pub fn size(&self, object_height: Length) -> ImageSize {
        let magnification = self.magnification(object_height).abs();
        if approx::relative_eq!(magnification, 1.0, max_relative = 1e-9) {
            ImageSize::SameSize
        } else if magnification > 1.0 {
            ImageSize::Magnified
        } else {
            ImageSize::Reduced
        }
    }
    /// Short textual characterization such as `real, inverted, reduced`.
    #[must_use]
    pub fn characterization(&self, object_height: Length) -> String {
        format!(
            "{}, {}, {}",
            self.kind(),
            self.orientation(),
            self.size(object_height)
        )
    }
}

/// Calculate the image of an object formed by a thin lens.
///
/// The image distance is `v = f*u / (u - f)`, the image height `h' = -(v*h) / u`. The image is
/// virtual if `u < f`.
///
/// # Errors
///
/// This function will return
///   - [`ThinLensError::DegenerateInput`] if the object distance equals the focal length (the image is
///     formed at infinity). This also applies if `u` is numerically so close to `f` that `v` is not finite.
///   - [`ThinLensError::Parameter`] if any of the given values is not finite or the object distance is zero.
pub fn compute(
    focal_length: Length,
    object_distance: Length,
    object_height: Length,
) -> LensResult<ImageResult> {
    if !focal_length.is_finite() || !object_distance.is_finite() || !object_height.is_finite() {
        return Err(ThinLensError::Parameter(
            "focal length, object distance and object height must be finite".into(),
        ));
    }
    if object_distance.is_zero() {
        return Err(ThinLensError::Parameter(
            "object distance must not be zero".into(),
        ));
    }
    if (object_distance - focal_length).is_zero() {
        return Err(ThinLensError::DegenerateInput(IMAGE_AT_INFINITY.into()));
    }
    let image_distance: Length =
        (focal_length * object_distance) / (object_distance - focal_length);
    let image_height: Length = -(image_distance * object_height) / object_distance;
    if !image_distance.is_finite() || !image_height.is_finite() {
        return Err(ThinLensError::DegenerateInput(IMAGE_AT_INFINITY.into()));
    }
    Ok(ImageResult {
        image_distance,
        image_height,
        is_virtual: object_distance < focal_length,
    })
}
/// Convenience wrapper of [`compute`] for plain values in cm.
///
/// # Errors
///
/// See [`compute`].
pub fn compute_cm(
    focal_length: f64,
    object_distance: f64,
    object_height: f64,
) -> LensResult<ImageResult> {
    compute(
        Length::new::<centimeter>(focal_length),
        Length::new::<centimeter>(object_distance),
        Length::new::<centimeter>(object_height),
    )
}
impl LensParameters {
    /// Calculate the image formed by this lens setup.
    ///
    /// # Errors
    ///
    /// This function returns [`ThinLensError::DegenerateInput`] if the object sits in the focal point.
    pub fn image(&self) -> LensResult<ImageResult> {
        compute(
            self.focal_length(),
            self.object_distance(),
            self.object_height(),
        )
    }
}
