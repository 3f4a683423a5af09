#![warn(missing_docs)]
//! Lens parameters and their admissible ranges
//!
//! A [`LensParameters`] value is the complete input of a simulation: focal length, object distance
//! and object height of a thin convex lens setup. It is an immutable value; changes produce a new
//! copy (see the `with_*` functions).
use std::fmt::Display;

use crate::{
    centimeter,
    error::{LensResult, ThinLensError},
};
use num::Zero;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use uom::si::{f64::Length, length::centimeter};

/// The three user controllable quantities of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum ParameterKind {
    /// focal length `f`
    FocalLength,
    /// object distance `u`
    ObjectDistance,
    /// object height `h`
    ObjectHeight,
}

impl ParameterKind {
    /// Return the (inclusive) range of values the interactive scene accepts for this parameter.
    #[must_use]
    pub const fn range(self) -> ParameterRange {
        match self {
            Self::FocalLength => ParameterRange::new(3.0, 15.0),
            Self::ObjectDistance => ParameterRange::new(3.0, 30.0),
            Self::ObjectHeight => ParameterRange::new(1.0, 10.0),
        }
    }
    /// Return the initial value (in cm) of a fresh session.
    #[must_use]
    pub const fn initial_value(self) -> f64 {
        match self {
            Self::FocalLength => 6.0,
            Self::ObjectDistance => 15.0,
            Self::ObjectHeight => 5.0,
        }
    }
    /// Short label shown next to the input widgets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FocalLength => "Focal length f:",
            Self::ObjectDistance => "Object distance u:",
            Self::ObjectHeight => "Object height h:",
        }
    }
    /// Identifier usable for HTML ids or JSON keys.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FocalLength => "focal_length",
            Self::ObjectDistance => "object_distance",
            Self::ObjectHeight => "object_height",
        }
    }
}
impl Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Inclusive value range of a parameter in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    min: f64,
    max: f64,
}
impl ParameterRange {
    /// Create a new range. `min` must not be larger than `max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    /// Lower bound
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }
    /// Upper bound
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
    /// Check, if the given value lies within the range (bounds included). `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
    /// Clamp a value into this range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
    /// Map a relative position (0.0 = lower bound, 1.0 = upper bound) to a value of this range.
    ///
    /// Positions outside of `0.0..=1.0` are clamped.
    #[must_use]
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        self.clamp((self.max - self.min).mul_add(fraction, self.min))
    }
    /// Inverse of [`value_at_fraction`](Self::value_at_fraction).
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        if self.max > self.min {
            (self.clamp(value) - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }
}

/// Parameters of a single thin convex lens setup.
///
/// All values are strictly positive and finite. The lens is located at the origin, the object is
/// placed at `object_distance` in front of it (left side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensParameters {
    focal_length: Length,
    object_distance: Length,
    object_height: Length,
}
impl Default for LensParameters {
    /// Parameters of a fresh session: f = 6 cm, u = 15 cm, h = 5 cm
    fn default() -> Self {
        Self {
            focal_length: centimeter!(ParameterKind::FocalLength.initial_value()),
            object_distance: centimeter!(ParameterKind::ObjectDistance.initial_value()),
            object_height: centimeter!(ParameterKind::ObjectHeight.initial_value()),
        }
    }
}
impl LensParameters {
    /// Creates new [`LensParameters`].
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the given lengths is not finite or not positive.
    pub fn new(
        focal_length: Length,
        object_distance: Length,
        object_height: Length,
    ) -> LensResult<Self> {
        check_positive("focal length", focal_length)?;
        check_positive("object distance", object_distance)?;
        check_positive("object height", object_height)?;
        Ok(Self {
            focal_length,
            object_distance,
            object_height,
        })
    }
    /// Focal length `f`
    #[must_use]
    pub const fn focal_length(&self) -> Length {
        self.focal_length
    }
    /// Object distance `u`
    #[must_use]
    pub const fn object_distance(&self) -> Length {
        self.object_distance
    }
    /// Object height `h`
    #[must_use]
    pub const fn object_height(&self) -> Length {
        self.object_height
    }
    /// Return a copy with a modified focal length.
    ///
    /// # Errors
    ///
    /// This function returns an error if the value is not finite or not positive.
    pub fn with_focal_length(self, focal_length: Length) -> LensResult<Self> {
        Self::new(focal_length, self.object_distance, self.object_height)
    }
    /// Return a copy with a modified object distance.
    ///
    /// # Errors
    ///
    /// This function returns an error if the value is not finite or not positive.
    pub fn with_object_distance(self, object_distance: Length) -> LensResult<Self> {
        Self::new(self.focal_length, object_distance, self.object_height)
    }
    /// Return a copy with a modified object height.
    ///
    /// # Errors
    ///
    /// This function returns an error if the value is not finite or not positive.
    pub fn with_object_height(self, object_height: Length) -> LensResult<Self> {
        Self::new(self.focal_length, self.object_distance, object_height)
    }
    /// Return the value of the given parameter in cm.
    #[must_use]
    pub fn value_cm(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::FocalLength => self.focal_length,
            ParameterKind::ObjectDistance => self.object_distance,
            ParameterKind::ObjectHeight => self.object_height,
        }
        .get::<centimeter>()
    }
    /// Return a copy where the given parameter is set to `value` (in cm).
    ///
    /// # Errors
    ///
    /// This function returns an error if the value is not finite or not positive.
    pub fn with_value_cm(self, kind: ParameterKind, value: f64) -> LensResult<Self> {
        match kind {
            ParameterKind::FocalLength => self.with_focal_length(centimeter!(value)),
            ParameterKind::ObjectDistance => self.with_object_distance(centimeter!(value)),
            ParameterKind::ObjectHeight => self.with_object_height(centimeter!(value)),
        }
    }
    /// Check if all parameters lie within the ranges of the interactive scene.
    #[must_use]
    pub fn is_within_ranges(&self) -> bool {
        ParameterKind::iter().all(|kind| kind.range().contains(self.value_cm(kind)))
    }
}
fn check_positive(name: &str, value: Length) -> LensResult<()> {
    if !value.is_finite() || value <= Length::zero() {
        return Err(ThinLensError::Parameter(format!(
            "{name} must be positive and finite"
        )));
    }
    Ok(())
}
