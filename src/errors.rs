use crate::types::Point;

/// All error types reported by the checked conversion paths.
///
/// The unchecked functions ([`crate::ct_to_xy`], [`crate::Gamut::nearest`],
/// [`crate::ct_to_light_xy`], ...) never fail; degenerate input shows up in
/// their results as non-finite coordinates instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A `colorgamut` array did not hold exactly three vertices.
    #[error("gamut needs 3 vertices, got {0}")]
    InvalidGamutLength(usize),

    /// Two gamut vertices coincide or a coordinate is not finite.
    #[error("degenerate gamut r={r:?} g={g:?} b={b:?}")]
    DegenerateGamut { r: Point, g: Point, b: Point },

    /// A color temperature that has no Kelvin equivalent.
    #[error("invalid mired value {0}")]
    InvalidMired(f64),
}

impl Error {
    /// Create a new degenerate gamut error
    pub fn degenerate_gamut(r: &Point, g: &Point, b: &Point) -> Self {
        Error::DegenerateGamut {
            r: *r,
            g: *g,
            b: *b,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
