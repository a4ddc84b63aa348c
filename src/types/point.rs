//! CIE 1931 chromaticity coordinates.

use serde::{Deserialize, Serialize};

/// A location in CIE 1931 xy chromaticity space.
///
/// Serialized the way the bridge reports and accepts colors: as a two-element
/// array `[x, y]`. Components are not restricted to `0.0..=1.0`; intermediate
/// geometry may step outside the unit square.
///
/// # Examples
///
/// ```
/// use hue_color_rs::Point;
///
/// let p = Point::new(0.3227, 0.329);
/// assert_eq!(serde_json::to_string(&p).unwrap(), "[0.3227,0.329]");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(xy: [f64; 2]) -> Self {
        Point::new(xy[0], xy[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A chromaticity supplied by a caller, either as a raw `[x, y]` pair from
/// bridge JSON or as an already constructed [`Point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XyInput {
    Pair([f64; 2]),
    Point(Point),
}

impl XyInput {
    /// Normalize to a [`Point`].
    pub fn point(self) -> Point {
        match self {
            XyInput::Pair(xy) => Point::from(xy),
            XyInput::Point(p) => p,
        }
    }
}

impl From<[f64; 2]> for XyInput {
    fn from(xy: [f64; 2]) -> Self {
        XyInput::Pair(xy)
    }
}

impl From<Point> for XyInput {
    fn from(p: Point) -> Self {
        XyInput::Point(p)
    }
}

impl From<XyInput> for Point {
    fn from(input: XyInput) -> Self {
        input.point()
    }
}
