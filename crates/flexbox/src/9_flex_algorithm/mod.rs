//! Multi-line flex layout algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! Measure runs line breaking, flexible length resolution, align-content
//! distribution and stretching in that order; layout runs the positioner over
//! the lines the last measure produced.

mod align_content;
mod flexible_lengths;
mod line_breaking;
mod lines;
mod positioning;
mod stretch;

pub use align_content::CrossSizeDistributor;
pub use flexible_lengths::{FlexibleLengthResolver, determine_main_size};
pub use line_breaking::LineBuilder;
pub use lines::{FlexLine, largest_main_size, total_cross_size};
pub use positioning::Positioner;
pub use stretch::ItemStretcher;
