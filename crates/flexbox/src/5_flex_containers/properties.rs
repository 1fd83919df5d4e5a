//! Container property snapshot consumed by a layout run.

use super::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};

/// Container padding on the four physical sides.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Paddings {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Paddings {
    /// Same padding on every side.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Padding at the low (left or top) edge of the given axis.
    #[inline]
    pub const fn leading(self, horizontal: bool) -> i32 {
        if horizontal { self.left } else { self.top }
    }

    /// Padding at the high (right or bottom) edge of the given axis.
    #[inline]
    pub const fn trailing(self, horizontal: bool) -> i32 {
        if horizontal { self.right } else { self.bottom }
    }

    /// Leading plus trailing padding along the given axis.
    #[inline]
    pub const fn total(self, horizontal: bool) -> i32 {
        self.leading(horizontal) + self.trailing(horizontal)
    }
}

/// Immutable snapshot of the flex container properties for one layout call.
///
/// Defaults: `Row`, `NoWrap`, `FlexStart` justification, `Stretch` for both
/// item and content alignment, no line cap, zero padding, left-to-right.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ContainerProperties {
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Maximum number of lines; items past the cap pack into the last line.
    pub max_lines: Option<usize>,
    pub paddings: Paddings,
    pub is_rtl: bool,
}

impl Default for ContainerProperties {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            max_lines: None,
            paddings: Paddings::default(),
            is_rtl: false,
        }
    }
}

impl ContainerProperties {
    #[inline]
    pub const fn with_direction(mut self, flex_direction: FlexDirection) -> Self {
        self.flex_direction = flex_direction;
        self
    }

    #[inline]
    pub const fn with_wrap(mut self, flex_wrap: FlexWrap) -> Self {
        self.flex_wrap = flex_wrap;
        self
    }

    #[inline]
    pub const fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    #[inline]
    pub const fn with_align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    #[inline]
    pub const fn with_align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = align_content;
        self
    }

    #[inline]
    pub const fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    #[inline]
    pub const fn with_paddings(mut self, paddings: Paddings) -> Self {
        self.paddings = paddings;
        self
    }

    #[inline]
    pub const fn with_rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// True for `Row` and `RowReverse`.
    #[inline]
    pub const fn is_main_axis_horizontal(&self) -> bool {
        self.flex_direction.is_horizontal()
    }

    /// Total padding along the main axis.
    #[inline]
    pub const fn main_paddings(&self) -> i32 {
        self.paddings.total(self.is_main_axis_horizontal())
    }

    /// Total padding along the cross axis.
    #[inline]
    pub const fn cross_paddings(&self) -> i32 {
        self.paddings.total(!self.is_main_axis_horizontal())
    }

    /// True when `max_lines` forbids opening another line after `line_count`.
    #[inline]
    pub fn line_cap_reached(&self, line_count: usize) -> bool {
        self.max_lines.is_some_and(|cap| line_count >= cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if main and cross paddings are not taken from the matching physical sides.
    fn paddings_follow_direction() {
        let paddings = Paddings {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        let row = ContainerProperties::default().with_paddings(paddings);
        assert_eq!(row.main_paddings(), 4);
        assert_eq!(row.cross_paddings(), 6);
        let column = row.with_direction(FlexDirection::ColumnReverse);
        assert_eq!(column.main_paddings(), 6);
        assert_eq!(column.cross_paddings(), 4);
    }

    #[test]
    /// # Panics
    /// Panics if the default snapshot differs from the documented defaults.
    fn defaults() {
        let props = ContainerProperties::default();
        assert_eq!(props.flex_direction, FlexDirection::Row);
        assert_eq!(props.flex_wrap, FlexWrap::NoWrap);
        assert_eq!(props.justify_content, JustifyContent::FlexStart);
        assert_eq!(props.align_items, AlignItems::Stretch);
        assert_eq!(props.align_content, AlignContent::Stretch);
        assert!(!props.line_cap_reached(100));
        assert!(props.with_max_lines(Some(2)).line_cap_reached(2));
    }
}
