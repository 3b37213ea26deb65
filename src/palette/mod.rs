//! Palette synthesis: hex encoding, incidence ordering, dominant pick

pub mod compose;
pub mod encode;

pub use compose::{compose, dominant, ranked_indices};
pub use encode::{parse_hex, to_hex};
