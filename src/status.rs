//! Light state as reported by the bridge.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::payload::StateUpdate;
use crate::types::{ColorMode, Point};

/// The `state` object of a light.
///
/// `colormode` is kept as the raw bridge string so unknown modes survive a
/// round trip; use [`LightState::color_mode`] for the parsed value.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightState {
    #[serde(default)]
    pub on: Option<bool>,
    #[serde(default)]
    pub bri: Option<u8>,
    #[serde(default)]
    pub hue: Option<u16>,
    #[serde(default)]
    pub sat: Option<u8>,
    #[serde(default)]
    pub xy: Option<Point>,
    #[serde(default)]
    pub ct: Option<u16>,
    #[serde(default)]
    pub colormode: Option<String>,
    #[serde(default)]
    pub reachable: Option<bool>,
}

impl LightState {
    /// The parsed color mode, `None` when missing or unrecognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::{ColorMode, LightState};
    ///
    /// let mut state = LightState::default();
    /// assert!(state.color_mode().is_none());
    ///
    /// state.colormode = Some("ct".into());
    /// assert_eq!(state.color_mode(), Some(ColorMode::Ct));
    /// ```
    pub fn color_mode(&self) -> Option<ColorMode> {
        self.colormode
            .as_deref()
            .and_then(|mode| ColorMode::from_str(mode).ok())
    }

    /// Update this state with values from another state.
    ///
    /// Values set in `other` overwrite values in `self`.
    pub fn update(&mut self, other: &Self) {
        if let Some(on) = other.on {
            self.on = Some(on);
        }
        if let Some(bri) = other.bri {
            self.bri = Some(bri);
        }
        if let Some(hue) = other.hue {
            self.hue = Some(hue);
        }
        if let Some(sat) = other.sat {
            self.sat = Some(sat);
        }
        if let Some(xy) = other.xy {
            self.xy = Some(xy);
        }
        if let Some(ct) = other.ct {
            self.ct = Some(ct);
        }
        if let Some(mode) = &other.colormode {
            self.colormode = Some(mode.clone());
        }
        if let Some(reachable) = other.reachable {
            self.reachable = Some(reachable);
        }
    }

    /// Apply an accepted state update, as the bridge does.
    ///
    /// Setting `xy` or `ct` switches the color mode accordingly; when both are
    /// present the bridge gives `xy` precedence.
    pub(crate) fn update_from_request(&mut self, update: &StateUpdate) {
        if let Some(on) = update.on {
            self.on = Some(on);
        }
        if let Some(bri) = update.bri {
            self.bri = Some(bri);
        }
        if let Some(ct) = update.ct {
            self.ct = Some(ct);
            self.colormode = Some(ColorMode::Ct.to_string());
        }
        if let Some(xy) = update.xy {
            self.xy = Some(xy);
            self.colormode = Some(ColorMode::Xy.to_string());
        }
    }
}
