//! Value-to-color assignment for series.
//!
//! A [`ColorAssigner`] walks a [`GroupRegistry`](crate::group::GroupRegistry) and
//! attaches a [`ColorTable`] to every series. Legends are read back from those tables.

mod palette;
mod style;

pub use palette::{
    CATEGORY_PALETTE, ColorAssigner, ColorTable, OFF_COLOR, PaletteColorAssigner,
    SIGNAL_STRENGTH_COLORS,
};
pub use style::ChartColor;
