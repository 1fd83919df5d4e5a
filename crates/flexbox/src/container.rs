//! Flex container: the measure and layout entry points.

use std::mem;

use log::debug;

use crate::cache::LayoutCache;
use crate::chapter5::{
    AlignContent, AlignItems, ContainerProperties, FlexDirection, FlexWrap, JustifyContent,
    Paddings,
};
use crate::chapter6::{FlexItem, ItemArena, ItemSlot, Rect};
use crate::chapter7::sort_indices_by_order_stable;
use crate::chapter9::{
    CrossSizeDistributor, FlexLine, FlexibleLengthResolver, ItemStretcher, LineBuilder,
    Positioner, determine_main_size, largest_main_size, total_cross_size,
};
use crate::error::FlexError;
use crate::sizing::{MeasuredState, SizingConstraint};

/// Container size resolved by `measure`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MeasuredContainer {
    pub width: i32,
    pub height: i32,
    /// "Too small" flags of the container merged with those of every item.
    pub state: MeasuredState,
}

/// A flex container owning its items and the results of the last measure.
///
/// Setters invalidate the last measure; `layout` then fails with
/// [`FlexError::NotMeasured`] until `measure` runs again.
#[derive(Debug)]
pub struct FlexContainer<I> {
    properties: ContainerProperties,
    items: Vec<I>,
    slots: Vec<ItemSlot>,
    lines: Vec<FlexLine>,
    rects: Vec<Option<Rect>>,
    cache: LayoutCache,
    measured: Option<MeasuredContainer>,
}

impl<I: FlexItem> Default for FlexContainer<I> {
    fn default() -> Self {
        Self::new(ContainerProperties::default())
    }
}

impl<I: FlexItem> FlexContainer<I> {
    pub const fn new(properties: ContainerProperties) -> Self {
        Self {
            properties,
            items: Vec::new(),
            slots: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            cache: LayoutCache::new(false),
            measured: None,
        }
    }

    pub fn with_items(properties: ContainerProperties, items: Vec<I>) -> Self {
        let mut container = Self::new(properties);
        container.items = items;
        container
    }

    pub const fn properties(&self) -> &ContainerProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: ContainerProperties) {
        self.properties = properties;
        self.invalidate();
    }

    pub fn set_flex_direction(&mut self, flex_direction: FlexDirection) {
        self.properties.flex_direction = flex_direction;
        self.invalidate();
    }

    pub fn set_flex_wrap(&mut self, flex_wrap: FlexWrap) {
        self.properties.flex_wrap = flex_wrap;
        self.invalidate();
    }

    pub fn set_justify_content(&mut self, justify_content: JustifyContent) {
        self.properties.justify_content = justify_content;
        self.invalidate();
    }

    pub fn set_align_items(&mut self, align_items: AlignItems) {
        self.properties.align_items = align_items;
        self.invalidate();
    }

    pub fn set_align_content(&mut self, align_content: AlignContent) {
        self.properties.align_content = align_content;
        self.invalidate();
    }

    pub fn set_max_lines(&mut self, max_lines: Option<usize>) {
        self.properties.max_lines = max_lines;
        self.invalidate();
    }

    pub fn set_paddings(&mut self, paddings: Paddings) {
        self.properties.paddings = paddings;
        self.invalidate();
    }

    pub fn set_rtl(&mut self, is_rtl: bool) {
        self.properties.is_rtl = is_rtl;
        self.invalidate();
    }

    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.invalidate();
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Mutable access to the items; invalidates the last measure.
    pub fn items_mut(&mut self) -> &mut [I] {
        self.invalidate();
        &mut self.items
    }

    pub fn take_items(&mut self) -> Vec<I> {
        self.invalidate();
        mem::take(&mut self.items)
    }

    /// Enable or disable reuse of identical measure requests within one measure.
    pub fn set_measure_cache_enabled(&mut self, enabled: bool) {
        self.cache.set_measure_enabled(enabled);
    }

    pub const fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    fn invalidate(&mut self) {
        self.measured = None;
        self.lines.clear();
        self.rects.clear();
    }

    /// Measure with constraints given along the main and cross axes.
    ///
    /// Rebuilds every line from scratch, resolves flexible lengths, spaces
    /// lines when the cross request is exact and stretches items.
    pub fn measure(&mut self, main: SizingConstraint, cross: SizingConstraint) -> MeasuredContainer {
        let properties = self.properties;
        let item_count = self.items.len();
        self.cache.reset(item_count);
        self.slots.clear();
        self.slots.resize(item_count, ItemSlot::default());
        self.rects.clear();
        self.rects.resize(item_count, None);

        let orders: Vec<i32> = self.items.iter().map(FlexItem::order).collect();
        let order = sort_indices_by_order_stable(&orders);
        let mut arena = ItemArena::new(
            &mut self.items,
            &mut self.slots,
            &mut self.cache,
            properties.is_main_axis_horizontal(),
            properties.is_rtl,
        );

        let mut lines = LineBuilder::new(&properties, main, cross).build(&mut arena, &order);
        let target = determine_main_size(main, &lines);
        FlexibleLengthResolver::new(&properties, cross, target).resolve(&mut arena, &mut lines);
        CrossSizeDistributor::new(&properties, cross).distribute(&mut lines);
        ItemStretcher::new(&properties).stretch(&mut arena, &lines);

        let measured = Self::resolve_size(&properties, main, cross, &lines, arena.state());
        debug!(
            target: "flexbox::container",
            "[FLEX-MEASURE] items={item_count} lines={} target_main={target} size={}x{} state={:?}",
            lines.len(),
            measured.width,
            measured.height,
            measured.state
        );
        self.lines = lines;
        self.measured = Some(measured);
        measured
    }

    /// Measure with physical width and height constraints.
    pub fn measure_size(
        &mut self,
        width: SizingConstraint,
        height: SizingConstraint,
    ) -> MeasuredContainer {
        if self.properties.is_main_axis_horizontal() {
            self.measure(width, height)
        } else {
            self.measure(height, width)
        }
    }

    /// Container size from its lines and the requests it was measured with.
    fn resolve_size(
        properties: &ContainerProperties,
        main: SizingConstraint,
        cross: SizingConstraint,
        lines: &[FlexLine],
        item_state: MeasuredState,
    ) -> MeasuredContainer {
        let (main_size, main_too_small) = main.resolve(largest_main_size(lines));
        let (cross_size, cross_too_small) =
            cross.resolve(total_cross_size(lines) + properties.cross_paddings());
        let (width, height, width_too_small, height_too_small) =
            if properties.is_main_axis_horizontal() {
                (main_size, cross_size, main_too_small, cross_too_small)
            } else {
                (cross_size, main_size, cross_too_small, main_too_small)
            };
        MeasuredContainer {
            width,
            height,
            state: item_state.merge(MeasuredState {
                width_too_small,
                height_too_small,
            }),
        }
    }

    /// The size computed by the last measure, if still current.
    pub const fn measured(&self) -> Option<MeasuredContainer> {
        self.measured
    }

    /// Place every visible item inside the given bounds.
    ///
    /// Item rectangles are relative to the container's top-left corner.
    ///
    /// # Errors
    /// Returns [`FlexError::NotMeasured`] when no current measure exists.
    pub fn layout(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        is_rtl: bool,
    ) -> Result<(), FlexError> {
        if self.measured.is_none() {
            return Err(FlexError::NotMeasured);
        }
        let properties = self.properties.with_rtl(is_rtl);
        let mut arena = ItemArena::new(
            &mut self.items,
            &mut self.slots,
            &mut self.cache,
            properties.is_main_axis_horizontal(),
            is_rtl,
        );
        Positioner::new(&properties).position(
            &mut arena,
            &self.lines,
            right - left,
            bottom - top,
            &mut self.rects,
        );
        Ok(())
    }

    /// Lines of the last measure, without dummy or empty lines.
    pub fn lines(&self) -> impl Iterator<Item = &FlexLine> + '_ {
        self.lines
            .iter()
            .filter(|line| !line.is_dummy() && !line.is_empty())
    }

    /// Index into [`Self::lines`] of the line holding item `index`.
    pub fn line_index_of(&self, index: usize) -> Option<usize> {
        self.measured.and(self.cache.line_of(index))
    }

    /// Rectangle handed to item `index` by the last layout.
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied().flatten()
    }
}
