//! Series groups: the unit the bar chart shows or hides.

mod registry;
mod series;

pub use registry::{GroupRegistry, SeriesGroup};
pub use series::{Entry, Series};
