//! Flex line aggregate rebuilt by every measure pass.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-lines>

use std::collections::BTreeSet;

use crate::chapter5::{AlignItems, ContainerProperties, FlexWrap};
use crate::chapter6::{FlexItem, ItemArena};

/// One flex line: item indices plus the sizes accumulated while filling it.
///
/// `main_size` includes every visible item's outer main size and the
/// container's main-axis padding once. Dummy lines carry no items and only
/// represent cross-axis space injected by `align-content`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    /// Indices of the items in this line, collapsed ones included.
    items: Vec<usize>,
    /// Items that take part in layout.
    visible_count: usize,
    main_size: i32,
    cross_size: i32,
    total_flex_grow: f32,
    total_flex_shrink: f32,
    /// Cross space occupied before this line, container cross padding included.
    sum_cross_size_before: i32,
    /// Largest distance from the line's baseline edge to an item baseline.
    max_baseline: i32,
    /// Largest distance from an item baseline to the opposite line edge.
    max_descent: i32,
    any_grow: bool,
    any_shrink: bool,
    /// Items that hit a min/max bound while resolving flexible lengths.
    frozen: BTreeSet<usize>,
    dummy: bool,
}

impl FlexLine {
    /// Open an empty line.
    pub(crate) fn open(main_paddings: i32, sum_cross_size_before: i32) -> Self {
        Self {
            main_size: main_paddings,
            sum_cross_size_before,
            ..Self::default()
        }
    }

    /// Spacing-only line injected between or around real lines.
    pub(crate) fn dummy(cross_size: i32) -> Self {
        Self {
            cross_size: cross_size.max(0),
            dummy: true,
            ..Self::default()
        }
    }

    /// Item indices in placement order, collapsed items included.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of items that are not collapsed.
    pub const fn visible_item_count(&self) -> usize {
        self.visible_count
    }

    pub const fn main_size(&self) -> i32 {
        self.main_size
    }

    pub const fn cross_size(&self) -> i32 {
        self.cross_size
    }

    pub const fn total_flex_grow(&self) -> f32 {
        self.total_flex_grow
    }

    pub const fn total_flex_shrink(&self) -> f32 {
        self.total_flex_shrink
    }

    pub const fn sum_cross_size_before(&self) -> i32 {
        self.sum_cross_size_before
    }

    pub const fn max_baseline(&self) -> i32 {
        self.max_baseline
    }

    /// True if some visible item has a positive grow factor.
    pub const fn any_grow(&self) -> bool {
        self.any_grow
    }

    /// True if some visible item has a positive shrink factor.
    pub const fn any_shrink(&self) -> bool {
        self.any_shrink
    }

    pub fn is_frozen(&self, index: usize) -> bool {
        self.frozen.contains(&index)
    }

    pub fn frozen_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.frozen.iter().copied()
    }

    pub const fn is_dummy(&self) -> bool {
        self.dummy
    }

    /// True when the line holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn push_collapsed(&mut self, index: usize) {
        self.items.push(index);
    }

    /// Append a measured, visible item and fold its sizes into the line.
    pub(crate) fn add_item<I: FlexItem>(
        &mut self,
        arena: &ItemArena<'_, I>,
        index: usize,
        properties: &ContainerProperties,
    ) {
        self.items.push(index);
        self.visible_count += 1;
        self.main_size += arena.outer_main(index);
        let grow = arena.flex_grow(index);
        let shrink = arena.flex_shrink(index);
        self.total_flex_grow += grow;
        self.total_flex_shrink += shrink;
        self.any_grow |= grow > 0.0;
        self.any_shrink |= shrink > 0.0;
        self.cross_size = self.cross_size.max(arena.outer_cross(index));
        self.account_baseline(arena, index, properties);
    }

    /// Grow the line's cross size so baseline-aligned items fit around a
    /// shared baseline. Only applies to horizontal main axes.
    fn account_baseline<I: FlexItem>(
        &mut self,
        arena: &ItemArena<'_, I>,
        index: usize,
        properties: &ContainerProperties,
    ) {
        if !arena.main_is_horizontal()
            || arena.alignment(index, properties.align_items) != AlignItems::Baseline
        {
            return;
        }
        let Some(baseline) = arena.baseline(index) else {
            return;
        };
        let height = arena.height(index);
        let margin_top = arena.cross_margin_leading(index);
        let margin_bottom = arena.cross_margin_trailing(index);
        let (ascent, descent) = if properties.flex_wrap == FlexWrap::WrapReverse {
            (height - baseline + margin_bottom, baseline + margin_top)
        } else {
            (baseline + margin_top, height - baseline + margin_bottom)
        };
        self.max_baseline = self.max_baseline.max(ascent);
        self.max_descent = self.max_descent.max(descent);
        self.cross_size = self.cross_size.max(self.max_baseline + self.max_descent);
    }

    /// Recompute cross size and baseline metrics from the current item sizes.
    pub(crate) fn refresh_cross<I: FlexItem>(
        &mut self,
        arena: &ItemArena<'_, I>,
        properties: &ContainerProperties,
    ) {
        self.cross_size = 0;
        self.max_baseline = 0;
        self.max_descent = 0;
        let visible: Vec<usize> = self
            .items
            .iter()
            .copied()
            .filter(|&index| !arena.is_collapsed(index))
            .collect();
        for index in visible {
            self.cross_size = self.cross_size.max(arena.outer_cross(index));
            self.account_baseline(arena, index, properties);
        }
    }

    /// Shift the main size after an item's outer main size changed by `delta`.
    pub(crate) fn adjust_main_size(&mut self, delta: i32) {
        self.main_size += delta;
    }

    pub(crate) fn set_cross_size(&mut self, cross_size: i32) {
        self.cross_size = cross_size;
    }

    pub(crate) fn grow_cross_size(&mut self, delta: i32) {
        self.cross_size += delta;
    }

    /// Freeze an item and drop its factors from the line totals.
    pub(crate) fn freeze(&mut self, index: usize, grow: f32, shrink: f32) {
        if self.frozen.insert(index) {
            self.total_flex_grow -= grow;
            self.total_flex_shrink -= shrink;
        }
    }
}

/// Largest line main size; container main padding is already included.
pub fn largest_main_size(lines: &[FlexLine]) -> i32 {
    lines.iter().map(FlexLine::main_size).max().unwrap_or(0)
}

/// Sum of all line cross sizes, dummy lines included.
pub fn total_cross_size(lines: &[FlexLine]) -> i32 {
    lines.iter().map(FlexLine::cross_size).sum()
}
