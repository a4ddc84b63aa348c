//! Color modes reported by the bridge.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The setting a light last used to produce its color.
///
/// Parsed from the bridge's `state.colormode` string.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use hue_color_rs::ColorMode;
///
/// assert_eq!(ColorMode::from_str("ct").unwrap(), ColorMode::Ct);
/// assert_eq!(ColorMode::Xy.to_string(), "xy");
/// assert!(ColorMode::from_str("rgb").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// CIE xy chromaticity
    Xy,
    /// Color temperature in mired
    Ct,
    /// Hue and saturation
    Hs,
}
