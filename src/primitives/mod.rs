//! Primitives - the small value types every effect is assembled from
//!
//! Each primitive renders itself as a CSS fragment via `to_css()`;
//! the catalogue types (`Keyframes`, palettes) are closed sets.

#[macro_use]
pub mod bounded;
pub mod anchor;
pub mod chance;
pub mod keyframes;
pub mod palette;

pub use anchor::{Anchor, Point};
pub use chance::Chance;
pub use keyframes::Keyframes;
