//! Multi-line flex layout core.
//!
//! Partitions host-supplied items into flex lines, resolves flexible lengths,
//! distributes cross-axis space between lines and emits final item rectangles.
//! The host owns content measurement; this crate only issues sizing requests
//! through the [`FlexItem`] capability and reads back what the item reports.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

mod cache;
mod container;
mod error;
mod rounding;
mod sizing;

// Chapter modules mapped to the Flexbox Level 1 structure.
// Spec: §5: Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6: Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7: Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §9: Flex Layout Algorithm (multi-line)
#[path = "9_flex_algorithm/mod.rs"]
mod chapter9;

#[cfg(test)]
mod test_support;

pub use cache::LayoutCache;
pub use chapter5::{
    AlignContent, AlignItems, ContainerProperties, FlexDirection, FlexWrap, JustifyContent,
    Paddings,
};
pub use chapter6::{AlignSelf, FlexItem, Margins, Measurement, Rect};
pub use chapter7::{Axes, order_key, resolve_axes, sort_indices_by_order_stable};
pub use chapter9::FlexLine;
pub use container::{FlexContainer, MeasuredContainer};
pub use error::FlexError;
pub use rounding::{RoundingErrorAccumulator, round_half_up};
pub use sizing::{
    ItemSize, MAX_SIZE, MeasuredState, SizingConstraint, child_constraint, clamp_between,
};
