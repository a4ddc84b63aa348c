//! A bridge light and the gamut-aware color entry points.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capabilities::{Capabilities, CtRange};
use crate::errors::Error;
use crate::gamut::{Gamut, WIDE_GAMUT};
use crate::payload::StateUpdate;
use crate::status::LightState;
use crate::temperature::ct_to_xy;
use crate::types::{ColorMode, Point, XyInput};

type Result<T> = std::result::Result<T, Error>;

/// A light as described by the bridge's `GET /lights/{id}` response.
///
/// Only the fields needed for color work are kept; everything else in the
/// bridge JSON is ignored. Every field is optional so that `{}` parses.
///
/// # Example
///
/// ```
/// use hue_color_rs::Light;
///
/// let light = Light::from_json(r#"{"name": "Hallway", "state": {"on": true}}"#).unwrap();
/// assert_eq!(light.name(), Some("Hallway"));
/// assert!(light.state().color_mode().is_none());
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Light {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    modelid: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    capabilities: Capabilities,
    #[serde(default)]
    state: LightState,
}

impl Light {
    pub fn new(name: Option<&str>) -> Self {
        Light {
            name: name.map(String::from),
            ..Default::default()
        }
    }

    /// Parse a light from bridge JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }

    /// Parse a light from an already decoded bridge JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn model_id(&self) -> Option<&str> {
        self.modelid.as_deref()
    }

    /// The bridge's light type, e.g. `"Extended color light"`.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// Set the gamut vertices this light reports.
    pub fn with_color_gamut(mut self, vertices: Vec<[f64; 2]>) -> Self {
        self.capabilities.control.colorgamut = Some(vertices);
        self
    }

    pub fn with_state(mut self, state: LightState) -> Self {
        self.state = state;
        self
    }

    /// The device's color temperature range, if it reports one.
    pub fn ct_range(&self) -> Option<CtRange> {
        self.capabilities.control.ct
    }

    /// The gamut to clip colors into.
    ///
    /// Uses the reported `colorgamut` when it has three vertices, without
    /// validating them, and [`WIDE_GAMUT`] otherwise.
    pub fn gamut(&self) -> Gamut {
        match self.capabilities.control.colorgamut.as_deref() {
            Some([r, g, b]) => Gamut::new(Point::from(*r), Point::from(*g), Point::from(*b)),
            Some(other) => {
                debug!(
                    "light {:?} reports {} gamut vertices, using wide gamut",
                    self.name,
                    other.len()
                );
                WIDE_GAMUT
            }
            None => {
                debug!("light {:?} has no gamut, using wide gamut", self.name);
                WIDE_GAMUT
            }
        }
    }

    /// Like [`Light::gamut`], but reject a reported gamut that is not a
    /// proper triangle.
    pub fn try_gamut(&self) -> Result<Gamut> {
        match self.capabilities.control.colorgamut.as_deref() {
            Some(vertices) => Gamut::try_from(vertices),
            None => Ok(WIDE_GAMUT),
        }
    }

    /// Record a state update the bridge accepted.
    pub fn apply(&mut self, update: &StateUpdate) {
        self.state.update_from_request(update);
    }
}

/// The gamut [`ct_to_light_xy`] and [`xy_to_light_xy`] clip into.
pub fn light_gamut(light: &Light) -> Gamut {
    light.gamut()
}

/// Convert a mired value to the closest xy the light can show.
///
/// # Examples
///
/// ```
/// use hue_color_rs::{Light, WIDE_GAMUT, ct_to_light_xy};
///
/// let bare = Light::default();
/// assert_eq!(ct_to_light_xy(300.0, &bare), WIDE_GAMUT.nearest_from_ct(300.0));
/// ```
pub fn ct_to_light_xy(ct: f64, light: &Light) -> Point {
    light_gamut(light).nearest_from_ct(ct)
}

/// Clip an xy color into the light's gamut.
///
/// # Examples
///
/// ```
/// use hue_color_rs::{Light, Point, xy_to_light_xy};
///
/// let light = Light::default();
/// assert_eq!(xy_to_light_xy([0.4, 0.4], &light), Point::new(0.4, 0.4));
/// assert_ne!(xy_to_light_xy(Point::new(0.9, 0.9), &light), Point::new(0.9, 0.9));
/// ```
pub fn xy_to_light_xy(xy: impl Into<XyInput>, light: &Light) -> Point {
    light_gamut(light).nearest(xy.into().point())
}

/// Checked form of [`ct_to_light_xy`].
///
/// Rejects a non-positive or non-finite `ct` and a malformed device gamut.
pub fn try_ct_to_light_xy(ct: f64, light: &Light) -> Result<Point> {
    if !ct.is_finite() || ct <= 0.0 {
        return Err(Error::InvalidMired(ct));
    }
    Ok(light.try_gamut()?.nearest_from_ct(ct))
}

/// Checked form of [`xy_to_light_xy`]. Rejects a malformed device gamut.
pub fn try_xy_to_light_xy(xy: impl Into<XyInput>, light: &Light) -> Result<Point> {
    Ok(light.try_gamut()?.nearest(xy.into().point()))
}

/// The color the light currently reports, as xy.
///
/// In `xy` mode the reported point is returned as is. In `ct` mode the
/// reported temperature is converted with [`ct_to_xy`] but not clipped into
/// the light's gamut. Any other mode gives `None`.
///
/// # Examples
///
/// ```
/// use hue_color_rs::{Light, LightState, Point, light_xy};
///
/// let state = LightState {
///     colormode: Some("ct".into()),
///     ct: Some(370),
///     ..Default::default()
/// };
/// let light = Light::default().with_state(state);
/// assert_eq!(light_xy(&light), Some(Point::new(0.4591, 0.4106)));
/// ```
pub fn light_xy(light: &Light) -> Option<Point> {
    let state = light.state();
    match state.color_mode()? {
        ColorMode::Xy => state.xy,
        // TODO: clip into light_gamut(light) once callers no longer compare
        // against the raw locus point
        ColorMode::Ct => state.ct.map(|ct| ct_to_xy(ct as f64)),
        ColorMode::Hs => None,
    }
}
