//! Handling the thinlens CLI
//!
//! This module handles the command line parsing and the textual output of a calculation.
use std::{io::Write, path::PathBuf};

use clap::{builder::Str, Parser};
use serde::Serialize;
use uom::si::length::centimeter;

use crate::{
    centimeter,
    error::{LensResult, ThinLensError},
    geometry::Layout,
    get_version,
    optics::ImageResult,
    parameters::{LensParameters, ParameterKind},
};

/// Command line arguments for the thinlens application.
#[derive(Parser, Debug)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct Args {
    /// focal length f of the lens in cm
    #[arg(short, long, default_value_t = ParameterKind::FocalLength.initial_value())]
    pub focal_length: f64,

    /// distance u of the object from the lens in cm
    #[arg(short = 'u', long, default_value_t = ParameterKind::ObjectDistance.initial_value())]
    pub object_distance: f64,

    /// height h of the object in cm
    #[arg(long, default_value_t = ParameterKind::ObjectHeight.initial_value())]
    pub object_height: f64,

    /// write the ray diagram to this file (.svg or .png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// width of the ray diagram in pixels
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    /// height of the ray diagram in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// print the result as JSON
    #[arg(long)]
    pub json: bool,
}
impl Args {
    /// Return the [`LensParameters`] given on the command line.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the values is not positive and finite.
    pub fn parameters(&self) -> LensResult<LensParameters> {
        LensParameters::new(
            centimeter!(self.focal_length),
            centimeter!(self.object_distance),
            centimeter!(self.object_height),
        )
    }
    /// Return the [`Layout`] of the ray diagram.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given size is invalid.
    pub fn layout(&self) -> LensResult<Layout> {
        Layout::new(self.width, self.height)
    }
}

/// Machine readable summary of a calculation
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    focal_length: f64,
    object_distance: f64,
    object_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_virtual: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    magnification: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}
impl Report {
    /// Creates a new [`Report`]. All lengths are given in cm.
    #[must_use]
    pub fn new(parameters: &LensParameters, image: &LensResult<ImageResult>) -> Self {
        let mut report = Self {
            focal_length: parameters.focal_length().get::<centimeter>(),
            object_distance: parameters.object_distance().get::<centimeter>(),
            object_height: parameters.object_height().get::<centimeter>(),
            image_distance: None,
            image_height: None,
            is_virtual: None,
            magnification: None,
            message: None,
        };
        match image {
            Ok(image) => {
                report.image_distance = Some(image.image_distance().get::<centimeter>());
                report.image_height = Some(image.image_height().get::<centimeter>());
                report.is_virtual = Some(image.is_virtual());
                report.magnification = Some(image.magnification(parameters.object_height()));
            }
            Err(e) => report.message = Some(e.message().to_owned()),
        }
        report
    }
}

/// Write a human readable summary of a calculation.
///
/// # Errors
///
/// This function will return an error if writing fails.
pub fn write_summary(
    writer: &mut impl Write,
    parameters: &LensParameters,
    image: &LensResult<ImageResult>,
) -> LensResult<()> {
    let mut text = String::from("Lens parameters:\n");
    for kind in [
        ParameterKind::FocalLength,
        ParameterKind::ObjectDistance,
        ParameterKind::ObjectHeight,
    ] {
        text += &format!("  {:<20}{:>8.2} cm\n", kind.label(), parameters.value_cm(kind));
    }
    match image {
        Ok(image) => {
            let object_height = parameters.object_height();
            text += "Image:\n";
            text += &format!(
                "  {:<20}{:>8.2} cm\n",
                "Image distance v:",
                image.image_distance().get::<centimeter>()
            );
            text += &format!(
                "  {:<20}{:>8.2} cm\n",
                "Image height h':",
                image.image_height().get::<centimeter>()
            );
            text += &format!(
                "  {:<20}{:>8.2}\n",
                "Magnification:",
                image.magnification(object_height)
            );
            text += &format!("  {}\n", image.characterization(object_height));
        }
        Err(e) => text += &format!("No finite image: {}\n", e.message()),
    }
    write!(writer, "{text}")
        .map_err(|e| ThinLensError::Console(format!("writing summary failed: {e}")))
}
/// Write the [`Report`] of a calculation as pretty printed JSON.
///
/// # Errors
///
/// This function will return an error if writing fails.
pub fn write_json(
    writer: &mut impl Write,
    parameters: &LensParameters,
    image: &LensResult<ImageResult>,
) -> LensResult<()> {
    let json = serde_json::to_string_pretty(&Report::new(parameters, image))
        .map_err(|e| ThinLensError::Console(format!("serialization of report failed: {e}")))?;
    writeln!(writer, "{json}")
        .map_err(|e| ThinLensError::Console(format!("writing report failed: {e}")))
}
