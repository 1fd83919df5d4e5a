//! Flex Items: the host capability the layout core consumes
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

mod arena;

pub use arena::{ItemArena, ItemSlot};

use crate::chapter5::AlignItems;
use crate::error::FlexError;
use crate::sizing::{ItemSize, MAX_SIZE, MeasuredState, SizingConstraint};

/// Per-item override of the container's `align-items`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignSelf {
    /// Defer to the container's `align-items`.
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

impl AlignSelf {
    /// Effective alignment once `Auto` is resolved against the container.
    #[inline]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::Stretch => AlignItems::Stretch,
        }
    }

    /// The host's raw constant (`-1` for `Auto`).
    #[inline]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Auto => -1,
            Self::FlexStart => AlignItems::FlexStart.raw(),
            Self::FlexEnd => AlignItems::FlexEnd.raw(),
            Self::Center => AlignItems::Center.raw(),
            Self::Baseline => AlignItems::Baseline.raw(),
            Self::Stretch => AlignItems::Stretch.raw(),
        }
    }
}

impl From<AlignItems> for AlignSelf {
    fn from(value: AlignItems) -> Self {
        match value {
            AlignItems::FlexStart => Self::FlexStart,
            AlignItems::FlexEnd => Self::FlexEnd,
            AlignItems::Center => Self::Center,
            AlignItems::Baseline => Self::Baseline,
            AlignItems::Stretch => Self::Stretch,
        }
    }
}

impl TryFrom<i32> for AlignSelf {
    type Error = FlexError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == -1 {
            return Ok(Self::Auto);
        }
        AlignItems::try_from(value)
            .map(Self::from)
            .map_err(|_| FlexError::InvalidValue {
                property: "align-self",
                value,
            })
    }
}

/// Item margins. `start`/`end` are resolved against the layout direction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Margins {
    pub start: i32,
    pub end: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    /// Same margin on every side.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self {
            start: value,
            end: value,
            top: value,
            bottom: value,
        }
    }

    /// Physical left margin.
    #[inline]
    pub const fn left(self, is_rtl: bool) -> i32 {
        if is_rtl { self.end } else { self.start }
    }

    /// Physical right margin.
    #[inline]
    pub const fn right(self, is_rtl: bool) -> i32 {
        if is_rtl { self.start } else { self.end }
    }
}

/// What an item reports back from a sizing request.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Measurement {
    pub width: i32,
    pub height: i32,
    /// Distance from the item's top edge to its first baseline, if it has one.
    pub baseline: Option<i32>,
    pub state: MeasuredState,
}

impl Measurement {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            baseline: None,
            state: MeasuredState {
                width_too_small: false,
                height_too_small: false,
            },
        }
    }

    #[inline]
    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    #[inline]
    pub const fn with_state(mut self, state: MeasuredState) -> Self {
        self.state = state;
        self
    }
}

/// Final item rectangle, relative to the container's top-left corner.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[inline]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }
}

/// Capability a host implements once per item kind.
///
/// The core reads the sizing attributes, issues `measure` requests and finally
/// hands each visible item its rectangle through `place`. It never inspects
/// content. Defaults follow the usual flex item defaults: no grow, shrink of
/// one, no basis percentage, `align-self: auto`, order zero.
pub trait FlexItem {
    /// Requested width.
    fn width(&self) -> ItemSize;

    /// Requested height.
    fn height(&self) -> ItemSize;

    /// Answer a sizing request with the item's measured size.
    fn measure(&mut self, width: SizingConstraint, height: SizingConstraint) -> Measurement;

    /// Receive the final rectangle.
    fn place(&mut self, rect: Rect);

    /// Collapsed items stay in their line's index list but take no space.
    fn is_collapsed(&self) -> bool {
        false
    }

    fn min_width(&self) -> i32 {
        0
    }

    fn min_height(&self) -> i32 {
        0
    }

    fn max_width(&self) -> i32 {
        MAX_SIZE
    }

    fn max_height(&self) -> i32 {
        MAX_SIZE
    }

    fn margins(&self) -> Margins {
        Margins::default()
    }

    fn flex_grow(&self) -> f32 {
        0.0
    }

    fn flex_shrink(&self) -> f32 {
        1.0
    }

    /// Fraction of the container's exact main size used as flex basis.
    fn flex_basis_percent(&self) -> Option<f32> {
        None
    }

    fn align_self(&self) -> AlignSelf {
        AlignSelf::Auto
    }

    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
    fn order(&self) -> i32 {
        0
    }

    /// Force a line break before this item when wrapping is enabled.
    fn wrap_before(&self) -> bool {
        false
    }
}

impl<T: FlexItem + ?Sized> FlexItem for Box<T> {
    fn width(&self) -> ItemSize {
        (**self).width()
    }

    fn height(&self) -> ItemSize {
        (**self).height()
    }

    fn measure(&mut self, width: SizingConstraint, height: SizingConstraint) -> Measurement {
        (**self).measure(width, height)
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect);
    }

    fn is_collapsed(&self) -> bool {
        (**self).is_collapsed()
    }

    fn min_width(&self) -> i32 {
        (**self).min_width()
    }

    fn min_height(&self) -> i32 {
        (**self).min_height()
    }

    fn max_width(&self) -> i32 {
        (**self).max_width()
    }

    fn max_height(&self) -> i32 {
        (**self).max_height()
    }

    fn margins(&self) -> Margins {
        (**self).margins()
    }

    fn flex_grow(&self) -> f32 {
        (**self).flex_grow()
    }

    fn flex_shrink(&self) -> f32 {
        (**self).flex_shrink()
    }

    fn flex_basis_percent(&self) -> Option<f32> {
        (**self).flex_basis_percent()
    }

    fn align_self(&self) -> AlignSelf {
        (**self).align_self()
    }

    fn order(&self) -> i32 {
        (**self).order()
    }

    fn wrap_before(&self) -> bool {
        (**self).wrap_before()
    }
}
