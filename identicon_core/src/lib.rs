//! # Identicons
//!
//! Deterministic avatars derived from an arbitrary input string:
//!
//! - hash the input (MD5)
//! - take the fill color from the first three digest bytes
//! - expand the digest into a mirrored 5-wide grid
//! - keep cells with even values
//! - paint every kept cell as a 50x50 square on a 250x250 canvas

pub mod canvas;
pub mod color;
pub mod digest;
pub mod errors;
pub mod grid;
pub mod identicon;
pub mod pixels;

pub use errors::IdenticonError;
pub use identicon::{generate_identicon, generate_pixel, Identicon};
