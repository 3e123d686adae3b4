//! Platform-free effect engines for the portfolio site.
//!
//! Every engine owns one drawing surface or element, exposes
//! `init`/`resize`/pointer handlers/`destroy`, and advances one display frame
//! per [`Animate::frame`] call. Surfaces are injected through the traits in
//! [`surface`], so the engines run unchanged under the WASM front-end and in
//! host-side tests.

pub mod ambient;
pub mod animate;
pub mod color;
pub mod confetti;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod magnetic;
pub mod surface;
pub mod throttle;
pub mod tilt;

pub use ambient::*;
pub use animate::*;
pub use color::{ColorStop, Rgb};
pub use confetti::*;
pub use config::*;
pub use cursor::*;
pub use ease::*;
pub use error::FxError;
pub use geometry::*;
pub use magnetic::*;
pub use surface::*;
pub use throttle::*;
pub use tilt::*;
