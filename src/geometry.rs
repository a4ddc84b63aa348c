//! Planar geometry over chromaticity coordinates.
//!
//! These helpers are deliberately unguarded: zero-length lines and vertical
//! lines are not meaningful inputs, and degenerate arithmetic shows up as
//! non-finite coordinates rather than as an error.

use crate::types::Point;

/// An ordered pair of points.
///
/// Treated as an infinite line by [`relation_of_point_to_line`] and as a closed
/// segment by [`closest_point_on_line`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub const fn new(a: Point, b: Point) -> Self {
        Line { a, b }
    }

    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }
}

/// Which side of a line a point lies on, comparing y values at the point's x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Above,
    Below,
    On,
}

/// Classify `point` against the infinite line through `line.a` and `line.b`.
///
/// The comparison is the sign of `point.y - line_y(point.x)`, computed from the
/// cross product so both endpoints of `line` come out exactly [`Relation::On`].
/// A vertical line has no y at a given x; every point is reported as
/// [`Relation::On`] for it.
///
/// # Examples
///
/// ```
/// use hue_color_rs::{Line, Point, Relation, relation_of_point_to_line};
///
/// let diagonal = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
/// assert_eq!(relation_of_point_to_line(Point::new(0.2, 0.8), &diagonal), Relation::Above);
/// assert_eq!(relation_of_point_to_line(Point::new(0.8, 0.2), &diagonal), Relation::Below);
/// assert_eq!(relation_of_point_to_line(Point::new(0.5, 0.5), &diagonal), Relation::On);
/// ```
pub fn relation_of_point_to_line(point: Point, line: &Line) -> Relation {
    let dx = line.b.x() - line.a.x();
    let dy = line.b.y() - line.a.y();
    if dx == 0.0 {
        return Relation::On;
    }

    let mut side = dx * (point.y() - line.a.y()) - dy * (point.x() - line.a.x());
    if dx < 0.0 {
        side = -side;
    }

    if side > 0.0 {
        Relation::Above
    } else if side < 0.0 {
        Relation::Below
    } else {
        Relation::On
    }
}

/// True when `point` is above `line` or on it.
pub fn is_above(point: Point, line: &Line) -> bool {
    matches!(
        relation_of_point_to_line(point, line),
        Relation::Above | Relation::On
    )
}

/// True when `point` is below `line` or on it.
pub fn is_below(point: Point, line: &Line) -> bool {
    matches!(
        relation_of_point_to_line(point, line),
        Relation::Below | Relation::On
    )
}

/// Project `point` onto the segment `line`, clamped to its endpoints.
///
/// # Examples
///
/// ```
/// use hue_color_rs::{Line, Point, closest_point_on_line};
///
/// let segment = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
/// assert_eq!(closest_point_on_line(Point::new(0.25, 3.0), &segment), Point::new(0.25, 0.0));
/// assert_eq!(closest_point_on_line(Point::new(-2.0, 1.0), &segment), Point::new(0.0, 0.0));
/// ```
pub fn closest_point_on_line(point: Point, line: &Line) -> Point {
    let ap = (point.x() - line.a.x(), point.y() - line.a.y());
    let ab = (line.b.x() - line.a.x(), line.b.y() - line.a.y());

    let ab2 = ab.0 * ab.0 + ab.1 * ab.1;
    let ap_ab = ap.0 * ab.0 + ap.1 * ab.1;
    let t = (ap_ab / ab2).clamp(0.0, 1.0);

    Point::new(line.a.x() + ab.0 * t, line.a.y() + ab.1 * t)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> Line {
        Line::new(Point::new(0.1, 0.2), Point::new(0.7, 0.5))
    }

    #[test]
    fn test_endpoints_are_on_line() {
        let line = Line::new(Point::new(0.700607, 0.299301), Point::new(0.172416, 0.746797));
        assert_eq!(relation_of_point_to_line(line.a, &line), Relation::On);
        assert_eq!(relation_of_point_to_line(line.b, &line), Relation::On);
        assert!(is_above(line.a, &line));
        assert!(is_below(line.a, &line));
    }

    #[test]
    fn test_relation_ignores_direction() {
        let forward = segment();
        let reversed = Line::new(forward.b, forward.a);
        let p = Point::new(0.4, 0.9);
        assert_eq!(relation_of_point_to_line(p, &forward), Relation::Above);
        assert_eq!(relation_of_point_to_line(p, &reversed), Relation::Above);
    }

    #[test]
    fn test_relation_extends_past_segment() {
        let line = segment();
        assert_eq!(
            relation_of_point_to_line(Point::new(5.0, 0.0), &line),
            Relation::Below
        );
    }

    #[test]
    fn test_vertical_line_is_on() {
        let line = Line::new(Point::new(0.3, 0.0), Point::new(0.3, 1.0));
        assert_eq!(
            relation_of_point_to_line(Point::new(0.9, 0.1), &line),
            Relation::On
        );
    }

    #[test]
    fn test_closest_point_is_clamped() {
        let line = segment();
        let probes = [
            Point::new(-1.0, -1.0),
            Point::new(2.0, 2.0),
            Point::new(0.4, 0.35),
            Point::new(0.3, 0.9),
            Point::new(0.9, -0.4),
        ];
        for p in probes {
            let c = closest_point_on_line(p, &line);
            let along = distance(line.a, c) + distance(c, line.b);
            assert!((along - line.length()).abs() < 1e-12, "{c:?} off segment");
        }
        assert_eq!(closest_point_on_line(Point::new(-1.0, -1.0), &line), line.a);
        assert_eq!(closest_point_on_line(Point::new(2.0, 2.0), &line), line.b);
    }

    #[test]
    fn test_closest_point_is_perpendicular_foot() {
        let line = segment();
        let p = Point::new(0.3, 0.6);
        let c = closest_point_on_line(p, &line);
        let dot = (p.x() - c.x()) * (line.b.x() - line.a.x())
            + (p.y() - c.y()) * (line.b.y() - line.a.y());
        assert!(dot.abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_line_is_not_finite() {
        let p = Point::new(0.2, 0.2);
        let line = Line::new(p, p);
        assert!(!closest_point_on_line(Point::new(0.5, 0.5), &line).is_finite());
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }
}
