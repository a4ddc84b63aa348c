//! # hue_color_rs
//!
//! Color temperature and gamut helpers for Philips Hue lights.
//!
//! Hue bridges speak CIE 1931 xy chromaticity and mired color temperature.
//! This crate converts between the two and clips colors into the triangle a
//! particular light can actually reproduce, so the result can be sent straight
//! to the bridge in a `PUT /lights/{id}/state` body.
//!
//! ## Quick Start
//!
//! ```
//! use hue_color_rs::{Light, StateUpdate, ct_to_light_xy};
//!
//! let light = Light::from_json(r#"{
//!     "capabilities": {"control": {
//!         "colorgamut": [[0.6915, 0.3083], [0.17, 0.7], [0.1532, 0.0475]]
//!     }}
//! }"#)?;
//!
//! // 2700K warm white, clipped into the light's gamut
//! let xy = ct_to_light_xy(370.0, &light);
//! let body = StateUpdate::from(xy).to_json()?;
//! assert_eq!(body, r#"{"xy":[0.4591,0.4106]}"#);
//! # Ok::<(), hue_color_rs::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Color Temperature**: [`ct_to_xy`] maps mired to xy with the fixed-point
//!   Planckian locus fit Hue devices use
//! - **Gamuts**: [`Gamut`] containment and nearest-point clipping, with the
//!   published [`GAMUT_A`], [`GAMUT_B`], [`GAMUT_C`] and the [`WIDE_GAMUT`]
//!   fallback
//! - **Light Descriptions**: parse bridge JSON into [`Light`] and pick its gamut
//! - **Entry Points**: [`ct_to_light_xy`], [`xy_to_light_xy`], [`light_xy`]
//! - **Checked Paths**: [`try_ct_to_light_xy`], [`try_xy_to_light_xy`] and
//!   [`Gamut::try_new`] report degenerate input as [`Error`]
//!
//! ## Degenerate Input
//!
//! The plain functions never fail. A zero-length gamut edge or a
//! nonsensical temperature produces non-finite or extrapolated coordinates
//! rather than an error, which is what existing bridge clients rely on. Use the
//! `try_` variants to have such input rejected.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: clipping and gamut fallbacks at
//! `debug`, converter internals at `trace`. Install any logger to see them.

mod capabilities;
mod errors;
mod gamut;
mod geometry;
mod light;
mod payload;
mod status;
mod temperature;
mod types;

// Re-export public API
pub use capabilities::{Capabilities, Control, CtRange};
pub use errors::Error;
pub use gamut::{GAMUT_A, GAMUT_B, GAMUT_C, Gamut, GamutType, WHITE, WIDE_GAMUT};
pub use geometry::{
    Line, Relation, closest_point_on_line, distance, is_above, is_below,
    relation_of_point_to_line,
};
pub use light::{
    Light, ct_to_light_xy, light_gamut, light_xy, try_ct_to_light_xy, try_xy_to_light_xy,
    xy_to_light_xy,
};
pub use payload::StateUpdate;
pub use status::LightState;
pub use temperature::ct_to_xy;
pub use types::{ColorMode, Mired, Point, XyInput};
