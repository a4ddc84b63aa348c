//! Light capabilities as reported by the bridge.

use serde::{Deserialize, Serialize};

use crate::gamut::GamutType;

/// The `capabilities` object of a light.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Capabilities {
    #[serde(default)]
    pub certified: Option<bool>,
    #[serde(default)]
    pub control: Control,
}

/// The `capabilities.control` object: what the light can be told to do.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Control {
    /// Device gamut as `[[rx, ry], [gx, gy], [bx, by]]`.
    #[serde(default)]
    pub colorgamut: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub colorgamuttype: Option<GamutType>,
    #[serde(default)]
    pub ct: Option<CtRange>,
    #[serde(default)]
    pub mindimlevel: Option<u32>,
    #[serde(default)]
    pub maxlumen: Option<u32>,
}

/// Supported color temperature range in mired.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CtRange {
    pub min: u16,
    pub max: u16,
}

impl CtRange {
    pub fn new(min: u16, max: u16) -> Self {
        CtRange { min, max }
    }

    /// Clamp a mired value into the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::CtRange;
    ///
    /// let range = CtRange::new(153, 500);
    /// assert_eq!(range.clamp(100), 153);
    /// assert_eq!(range.clamp(370), 370);
    /// assert_eq!(range.clamp(600), 500);
    /// ```
    pub fn clamp(&self, ct: u16) -> u16 {
        ct.max(self.min).min(self.max)
    }

    pub fn contains(&self, ct: u16) -> bool {
        (self.min..=self.max).contains(&ct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bridge_capabilities() {
        let caps: Capabilities = serde_json::from_value(json!({
            "certified": true,
            "control": {
                "mindimlevel": 1000,
                "maxlumen": 806,
                "colorgamuttype": "C",
                "colorgamut": [[0.6915, 0.3083], [0.17, 0.7], [0.1532, 0.0475]],
                "ct": {"min": 153, "max": 500}
            },
            "streaming": {"renderer": true, "proxy": true}
        }))
        .unwrap();

        assert_eq!(caps.certified, Some(true));
        assert_eq!(caps.control.colorgamuttype, Some(GamutType::C));
        assert_eq!(caps.control.colorgamut.as_ref().map(Vec::len), Some(3));
        assert_eq!(caps.control.ct, Some(CtRange::new(153, 500)));
        assert_eq!(caps.control.maxlumen, Some(806));
    }

    #[test]
    fn test_parse_white_only_capabilities() {
        let caps: Capabilities = serde_json::from_value(json!({
            "control": {"mindimlevel": 5000, "maxlumen": 800}
        }))
        .unwrap();
        assert!(caps.control.colorgamut.is_none());
        assert!(caps.control.ct.is_none());
    }

    #[test]
    fn test_range_contains() {
        let range = CtRange::new(153, 454);
        assert!(range.contains(153));
        assert!(range.contains(454));
        assert!(!range.contains(500));
    }
}
