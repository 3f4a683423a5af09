/// Convert a (pixel) coordinate to the integer raster used by drawing backends.
///
/// The value is rounded to the nearest integer. Values outside of the `i32` range saturate.
#[must_use]
pub fn f64_to_i32(value: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let newval = value.round() as i32;
    newval
}

/// Convert a (pixel) size to an unsigned raster size.
///
/// Negative values and NaN map to 0.
#[must_use]
pub fn f64_to_u32(value: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let newval = value.round() as u32;
    newval
}
#[must_use]
pub const fn f64_to_usize(value: f64) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let newval = value as usize;
    newval
}
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}
