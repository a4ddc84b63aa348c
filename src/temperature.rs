//! Color temperature to chromaticity conversion.
//!
//! A fixed-point rendition of the Kang et al. cubic fit of the Planckian
//! locus. `x` is a cubic in `1/kelvin`, `y` a cubic in `x`, both evaluated in
//! a 16-bit fixed-point domain and scaled back to the unit range at the end.
//! Devices expect this exact mapping, so the constants and the order of
//! evaluation must not change.

use log::trace;

use crate::types::Point;

/// Kelvin below which the low-temperature `x` fit applies.
const X_THRESHOLD: f64 = 4000.0;
/// Kelvin below which the first `y` fit applies.
const Y_FIRST_THRESHOLD: f64 = 2222.0;
/// Kelvin below which the second `y` fit applies.
const Y_SECOND_THRESHOLD: f64 = 4000.0;

const POW_2_16: f64 = 65536.0;
const POW_2_32: f64 = 4294967296.0;
const POW_2_48: f64 = 281474976710656.0;

/// Convert a mired value to an xy point, rounded to 4 decimal places.
///
/// Any positive `ct` gives a finite result. Zero and negative values are not
/// guarded: `ct == 0` divides to an infinite Kelvin and lands on the
/// high-temperature limit of the fit, negative values extrapolate the low
/// branch. Use [`crate::try_ct_to_light_xy`] for a checked conversion.
///
/// # Examples
///
/// ```
/// use hue_color_rs::{Point, ct_to_xy};
///
/// assert_eq!(ct_to_xy(370.0), Point::new(0.4591, 0.4106));
/// assert_eq!(ct_to_xy(153.0), Point::new(0.3129, 0.3231));
/// ```
pub fn ct_to_xy(ct: f64) -> Point {
    let kelvin = 1_000_000.0 / ct;

    let x = if kelvin < X_THRESHOLD {
        -17440695910400.0 / kelvin / kelvin / kelvin - 15358885888.0 / kelvin / kelvin
            + 57520658.0 / kelvin
            + 11790.0
    } else {
        -198301902438400.0 / kelvin / kelvin / kelvin
            + 138086835814.0 / kelvin / kelvin
            + 14590587.0 / kelvin
            + 15754.0
    };

    let y = if kelvin < Y_FIRST_THRESHOLD {
        -18126.0 * x * x * x / POW_2_48 - 22087.0 * x * x / POW_2_32 + 35808.0 * x / POW_2_16
            - 3312.0
    } else if kelvin < Y_SECOND_THRESHOLD {
        -15645.0 * x * x * x / POW_2_48 - 22514.0 * x * x / POW_2_32 + 34265.0 * x / POW_2_16
            - 2744.0
    } else {
        50491.0 * x * x * x / POW_2_48 - 96229.0 * x * x / POW_2_32 + 61458.0 * x / POW_2_16
            - 6062.0
    };

    trace!("ct {ct} -> {kelvin}K, fixed point ({x}, {y})");

    let y = y * 4.0;
    let x = x / 65535.0;
    let y = y / 65535.0;

    Point::new(round4(x), round4(y))
}

fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}
