//! Request body for `PUT /lights/{id}/state`.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Mired, Point};

type Result<T> = std::result::Result<T, Error>;

/// A state update to send to a light.
///
/// Only the attributes that were set are serialized, so a body built from a
/// single point is exactly `{"xy":[x,y]}`.
///
/// # Creating Updates
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use hue_color_rs::{Point, StateUpdate};
///    let update = StateUpdate::from(Point::new(0.4591, 0.4106));
///    assert_eq!(update.to_json().unwrap(), r#"{"xy":[0.4591,0.4106]}"#);
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use hue_color_rs::StateUpdate;
///    let mut update = StateUpdate::new();
///    update.on(true);
///    update.brightness(200);
///    update.ct(370);
///    assert!(update.is_valid());
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StateUpdate {
    pub(crate) on: Option<bool>,
    pub(crate) bri: Option<u8>,
    pub(crate) xy: Option<Point>,
    pub(crate) ct: Option<u16>,
    /// Deciseconds.
    pub(crate) transitiontime: Option<u16>,
}

impl StateUpdate {
    /// Create a new empty update.
    ///
    /// At least one attribute must be set for the update to be valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this update contains at least one attribute.
    ///
    /// A transition time alone changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::StateUpdate;
    ///
    /// let mut update = StateUpdate::new();
    /// update.transition_time(4);
    /// assert!(!update.is_valid());
    ///
    /// update.on(false);
    /// assert!(update.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.on.is_some() || self.bri.is_some() || self.xy.is_some() || self.ct.is_some()
    }

    pub fn on(&mut self, on: bool) {
        self.on = Some(on);
    }

    pub fn brightness(&mut self, bri: u8) {
        self.bri = Some(bri);
    }

    pub fn xy(&mut self, xy: Point) {
        self.xy = Some(xy);
    }

    pub fn ct(&mut self, ct: u16) {
        self.ct = Some(ct);
    }

    pub fn transition_time(&mut self, deciseconds: u16) {
        self.transitiontime = Some(deciseconds);
    }

    pub fn get_xy(&self) -> Option<Point> {
        self.xy
    }

    pub fn get_ct(&self) -> Option<u16> {
        self.ct
    }

    /// Serialize to the JSON body the bridge expects.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::JsonDump)
    }
}

impl From<Point> for StateUpdate {
    fn from(xy: Point) -> Self {
        let mut update = Self::new();
        update.xy(xy);
        update
    }
}

impl From<&Mired> for StateUpdate {
    fn from(ct: &Mired) -> Self {
        let mut update = Self::new();
        update.ct(ct.value());
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_set_fields_serialized() {
        let mut update = StateUpdate::new();
        update.on(true);
        update.xy(Point::new(0.5, 0.25));
        update.transition_time(10);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"on": true, "xy": [0.5, 0.25], "transitiontime": 10})
        );
    }

    #[test]
    fn test_from_mired() {
        let update = StateUpdate::from(&Mired::create(370).unwrap());
        assert_eq!(update.to_json().unwrap(), r#"{"ct":370}"#);
    }

    #[test]
    fn test_empty_is_invalid() {
        let update = StateUpdate::new();
        assert!(!update.is_valid());
        assert_eq!(update.to_json().unwrap(), "{}");
    }
}
