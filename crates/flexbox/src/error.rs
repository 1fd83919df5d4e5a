//! Errors surfaced at the public API boundary.

use thiserror::Error;

/// Failure modes of the flex layout entry points.
///
/// Degenerate numeric inputs (zero flex factor totals, zero item counts) are
/// not errors; the algorithm treats them as "nothing to distribute".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlexError {
    /// A raw host constant did not map to any variant of a layout property.
    #[error("invalid value {value} for {property}")]
    InvalidValue {
        /// Name of the property being converted (e.g. `flex-direction`).
        property: &'static str,
        /// The rejected raw value.
        value: i32,
    },
    /// `layout` was requested without a current `measure` result.
    #[error("layout requested before a successful measure")]
    NotMeasured,
}
