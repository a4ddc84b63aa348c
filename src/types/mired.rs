//! Reciprocal color temperature.

use serde::{Deserialize, Serialize};

use crate::temperature::ct_to_xy;
use crate::types::Point;

/// Color temperature in mired (`1_000_000 / kelvin`), the bridge's native
/// `ct` unit.
///
/// Higher values are warmer. Hue white ambiance bulbs typically accept
/// 153 (about 6500K) to 500 (2000K); the device's own range is reported in
/// [`crate::CtRange`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Mired {
    pub(crate) value: u16,
}

impl Mired {
    /// Create a new Mired with the given value.
    ///
    /// Returns `None` for zero, which has no Kelvin equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::Mired;
    ///
    /// assert!(Mired::create(0).is_none());
    /// assert_eq!(Mired::create(370).unwrap().value(), 370);
    /// ```
    pub fn create(value: u16) -> Option<Self> {
        if value > 0 { Some(Mired { value }) } else { None }
    }

    /// Nearest mired value for a Kelvin temperature.
    ///
    /// Returns `None` when the result does not fit the bridge's integer range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::Mired;
    ///
    /// assert_eq!(Mired::from_kelvin(2700).unwrap().value(), 370);
    /// assert_eq!(Mired::from_kelvin(6500).unwrap().value(), 154);
    /// assert!(Mired::from_kelvin(0).is_none());
    /// ```
    pub fn from_kelvin(kelvin: u32) -> Option<Self> {
        if kelvin == 0 {
            return None;
        }
        let value = (1_000_000.0 / kelvin as f64).round();
        if value < 1.0 || value > u16::MAX as f64 {
            return None;
        }
        Self::create(value as u16)
    }

    /// Get the mired value.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Temperature in Kelvin.
    pub fn kelvin(&self) -> f64 {
        1_000_000.0 / self.value as f64
    }

    /// Approximate chromaticity on the Planckian locus.
    pub fn to_xy(&self) -> Point {
        ct_to_xy(self.value as f64)
    }
}

impl From<Mired> for f64 {
    fn from(m: Mired) -> Self {
        m.value as f64
    }
}
