//! Visual theme for the editor canvas

pub mod palette;

pub use palette::{background_fill, hex_color};
