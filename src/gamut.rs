//! Device color gamuts and clipping into them.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::Error;
use crate::geometry::{Line, closest_point_on_line, distance, is_above, is_below};
use crate::temperature::ct_to_xy;
use crate::types::Point;

type Result<T> = std::result::Result<T, Error>;

/// The triangle of xy chromaticities a light can reproduce.
///
/// Vertices must be given in the order the bridge reports them: red, green,
/// blue. Containment relies on that winding and a gamut built from reordered
/// vertices reports its interior as outside. The order is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[Point; 3]", from = "[Point; 3]")]
pub struct Gamut {
    r: Point,
    g: Point,
    b: Point,
}

/// Wide gamut used when a light does not report its own.
pub const WIDE_GAMUT: Gamut = Gamut::new(
    Point::new(0.700607, 0.299301),
    Point::new(0.172416, 0.746797),
    Point::new(0.135503, 0.039879),
);

/// Gamut A: early LivingColors and LightStrips.
pub const GAMUT_A: Gamut = Gamut::new(
    Point::new(0.704, 0.296),
    Point::new(0.2151, 0.7106),
    Point::new(0.138, 0.08),
);

/// Gamut B: first generation Hue bulbs.
pub const GAMUT_B: Gamut = Gamut::new(
    Point::new(0.675, 0.322),
    Point::new(0.409, 0.518),
    Point::new(0.167, 0.04),
);

/// Gamut C: current Hue color bulbs.
pub const GAMUT_C: Gamut = Gamut::new(
    Point::new(0.6915, 0.3083),
    Point::new(0.17, 0.7),
    Point::new(0.1532, 0.0475),
);

/// Hue's reference white point.
pub const WHITE: Point = Point::new(0.3227, 0.329);

impl Gamut {
    /// Create a gamut without validation.
    pub const fn new(r: Point, g: Point, b: Point) -> Self {
        Gamut { r, g, b }
    }

    /// Create a gamut, rejecting non-finite coordinates and triangles with no
    /// area (coincident or collinear vertices).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::{Gamut, Point};
    ///
    /// let r = Point::new(0.7, 0.3);
    /// let g = Point::new(0.17, 0.7);
    /// let b = Point::new(0.15, 0.05);
    /// assert!(Gamut::try_new(r, g, b).is_ok());
    /// assert!(Gamut::try_new(r, r, b).is_err());
    /// ```
    pub fn try_new(r: Point, g: Point, b: Point) -> Result<Self> {
        if !(r.is_finite() && g.is_finite() && b.is_finite()) {
            return Err(Error::degenerate_gamut(&r, &g, &b));
        }
        let area = (g.x() - r.x()) * (b.y() - r.y()) - (g.y() - r.y()) * (b.x() - r.x());
        if area == 0.0 {
            return Err(Error::degenerate_gamut(&r, &g, &b));
        }
        Ok(Gamut { r, g, b })
    }

    pub fn red(&self) -> Point {
        self.r
    }

    pub fn green(&self) -> Point {
        self.g
    }

    pub fn blue(&self) -> Point {
        self.b
    }

    /// The edges r-g, g-b and b-r, in that order.
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.r, self.g),
            Line::new(self.g, self.b),
            Line::new(self.b, self.r),
        ]
    }

    /// True when `point` lies inside the triangle or on its boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::{Point, WIDE_GAMUT};
    ///
    /// assert!(WIDE_GAMUT.contains(Point::new(0.4, 0.4)));
    /// assert!(WIDE_GAMUT.contains(WIDE_GAMUT.red()));
    /// assert!(!WIDE_GAMUT.contains(Point::new(0.9, 0.9)));
    /// ```
    pub fn contains(&self, point: Point) -> bool {
        let [rg, gb, br] = self.edges();
        is_below(point, &rg) && is_below(point, &gb) && is_above(point, &br)
    }

    /// The reproducible color closest to `point`.
    ///
    /// Points inside the gamut are returned unchanged. Anything else is
    /// projected onto each edge and the closest projection wins; on equal
    /// distances the earlier edge in [`Gamut::edges`] order is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::{Point, WIDE_GAMUT};
    ///
    /// let inside = Point::new(0.4, 0.4);
    /// assert_eq!(WIDE_GAMUT.nearest(inside), inside);
    ///
    /// let clipped = WIDE_GAMUT.nearest(Point::new(0.9, 0.9));
    /// assert_ne!(clipped, Point::new(0.9, 0.9));
    /// ```
    pub fn nearest(&self, point: Point) -> Point {
        if self.contains(point) {
            return point;
        }

        let [rg, gb, br] = self.edges();
        let mut best = closest_point_on_line(point, &rg);
        let mut best_distance = distance(point, best);
        for edge in [gb, br] {
            let candidate = closest_point_on_line(point, &edge);
            let d = distance(point, candidate);
            if d < best_distance {
                best = candidate;
                best_distance = d;
            }
        }

        debug!("clipped {point:?} into gamut as {best:?}");
        best
    }

    /// Convert a mired value with [`ct_to_xy`] and clip it into the gamut.
    pub fn nearest_from_ct(&self, ct: f64) -> Point {
        self.nearest(ct_to_xy(ct))
    }
}

impl From<[Point; 3]> for Gamut {
    fn from([r, g, b]: [Point; 3]) -> Self {
        Gamut::new(r, g, b)
    }
}

impl From<Gamut> for [Point; 3] {
    fn from(gamut: Gamut) -> Self {
        [gamut.r, gamut.g, gamut.b]
    }
}

impl TryFrom<&[[f64; 2]]> for Gamut {
    type Error = Error;

    /// Build a gamut from the bridge's `colorgamut` array.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_color_rs::{GAMUT_C, Gamut};
    ///
    /// let reported = [[0.6915, 0.3083], [0.17, 0.7], [0.1532, 0.0475]];
    /// assert_eq!(Gamut::try_from(&reported[..]).unwrap(), GAMUT_C);
    /// assert!(Gamut::try_from(&reported[..2]).is_err());
    /// ```
    fn try_from(vertices: &[[f64; 2]]) -> Result<Self> {
        match vertices {
            [r, g, b] => Gamut::try_new(Point::from(*r), Point::from(*g), Point::from(*b)),
            _ => Err(Error::InvalidGamutLength(vertices.len())),
        }
    }
}

/// The gamut class a light reports in `capabilities.control.colorgamuttype`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum GamutType {
    A,
    B,
    C,
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

impl GamutType {
    /// The published triangle for this class. `Other` maps to [`WIDE_GAMUT`].
    pub fn gamut(&self) -> Gamut {
        match self {
            GamutType::A => GAMUT_A,
            GamutType::B => GAMUT_B,
            GamutType::C => GAMUT_C,
            GamutType::Other => WIDE_GAMUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn on_segment(p: Point, line: &Line) -> bool {
        (distance(line.a, p) + distance(p, line.b) - line.length()).abs() < 1e-12
    }

    #[test]
    fn test_vertices_are_contained() {
        for gamut in GamutType::iter().map(|t| t.gamut()) {
            for vertex in [gamut.red(), gamut.green(), gamut.blue()] {
                assert!(gamut.contains(vertex), "{vertex:?} in {gamut:?}");
                assert_eq!(gamut.nearest(vertex), vertex);
            }
        }
    }

    #[test]
    fn test_white_is_contained() {
        for gamut in GamutType::iter().map(|t| t.gamut()) {
            assert!(gamut.contains(WHITE));
        }
    }

    #[test]
    fn test_nearest_is_identity_inside() {
        let p = Point::new(0.4, 0.35);
        assert!(GAMUT_B.contains(p));
        assert_eq!(GAMUT_B.nearest(p), p);
    }

    #[test]
    fn test_nearest_clips_to_red_green_edge() {
        let p = Point::new(0.9, 0.9);
        let clipped = WIDE_GAMUT.nearest(p);
        assert!(on_segment(clipped, &WIDE_GAMUT.edges()[0]));
        assert!((clipped.x() - 0.5204139453041964).abs() < 1e-12);
        assert!((clipped.y() - 0.4519648492593651).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_snaps_to_vertex_region() {
        assert_eq!(WIDE_GAMUT.nearest(Point::new(0.0, 0.0)), WIDE_GAMUT.blue());
        assert_eq!(WIDE_GAMUT.nearest(Point::new(0.8, 0.1)), WIDE_GAMUT.red());
        assert_eq!(WIDE_GAMUT.nearest(Point::new(0.1, 0.9)), WIDE_GAMUT.green());
    }

    #[test]
    fn test_nearest_is_minimal() {
        let samples = 200;
        let outside = [
            Point::new(0.9, 0.9),
            Point::new(0.0, 0.5),
            Point::new(0.5, 0.0),
            Point::new(0.75, 0.25),
            Point::new(0.3, 0.8),
            Point::new(-0.5, -0.5),
        ];
        for gamut in [WIDE_GAMUT, GAMUT_A, GAMUT_B, GAMUT_C] {
            for p in outside {
                assert!(!gamut.contains(p));
                let best = distance(p, gamut.nearest(p));
                for edge in gamut.edges() {
                    for i in 0..=samples {
                        let t = i as f64 / samples as f64;
                        let q = Point::new(
                            edge.a.x() + (edge.b.x() - edge.a.x()) * t,
                            edge.a.y() + (edge.b.y() - edge.a.y()) * t,
                        );
                        assert!(best <= distance(p, q) + 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn test_reversed_winding_inverts_containment() {
        let reversed = Gamut::new(WIDE_GAMUT.red(), WIDE_GAMUT.blue(), WIDE_GAMUT.green());
        assert!(!reversed.contains(Point::new(0.4, 0.4)));
    }

    #[test]
    fn test_nearest_from_ct() {
        assert_eq!(WIDE_GAMUT.nearest_from_ct(370.0), ct_to_xy(370.0));
        let clipped = GAMUT_B.nearest_from_ct(153.0);
        assert_eq!(clipped, GAMUT_B.nearest(ct_to_xy(153.0)));
    }

    #[test]
    fn test_try_new_rejects_degenerate() {
        let r = Point::new(0.7, 0.3);
        let g = Point::new(0.17, 0.7);
        assert_eq!(
            Gamut::try_new(r, r, g).unwrap_err(),
            Error::degenerate_gamut(&r, &r, &g)
        );
        let collinear = [
            Point::new(0.1, 0.1),
            Point::new(0.2, 0.2),
            Point::new(0.4, 0.4),
        ];
        assert!(Gamut::try_new(collinear[0], collinear[1], collinear[2]).is_err());
        let nan = Point::new(f64::NAN, 0.3);
        assert!(Gamut::try_new(r, g, nan).is_err());
    }

    #[test]
    fn test_try_from_checks_length() {
        let four = [[0.7, 0.3], [0.17, 0.7], [0.15, 0.05], [0.3, 0.3]];
        assert_eq!(
            Gamut::try_from(&four[..]).unwrap_err(),
            Error::InvalidGamutLength(4)
        );
    }

    #[test]
    fn test_serde_as_vertex_array() {
        let json = serde_json::to_value(GAMUT_A).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[0.704, 0.296], [0.2151, 0.7106], [0.138, 0.08]])
        );
        let back: Gamut = serde_json::from_value(json).unwrap();
        assert_eq!(back, GAMUT_A);
    }

    #[test]
    fn test_gamut_type_strings() {
        let parsed: GamutType = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(parsed, GamutType::Other);
        assert_eq!(GamutType::C.to_string(), "C");
        assert_eq!("B".parse::<GamutType>().unwrap(), GamutType::B);
    }
}
