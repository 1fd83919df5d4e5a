//! Index-addressed view over the host items for one layout run.
//!
//! Lines refer to items by position; the arena translates main/cross axis
//! questions into the physical width/height the host speaks.

use log::trace;

use super::{FlexItem, Margins, Rect};
use crate::cache::LayoutCache;
use crate::chapter5::AlignItems;
use crate::sizing::{ItemSize, MeasuredState, SizingConstraint, clamp_between};

/// Last measured size of one item.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ItemSlot {
    pub width: i32,
    pub height: i32,
    pub baseline: Option<i32>,
}

/// Borrowed items plus their measured slots, seen through the main/cross axes.
pub struct ItemArena<'run, I> {
    items: &'run mut [I],
    slots: &'run mut [ItemSlot],
    cache: &'run mut LayoutCache,
    main_is_horizontal: bool,
    is_rtl: bool,
    state: MeasuredState,
}

impl<'run, I: FlexItem> ItemArena<'run, I> {
    pub fn new(
        items: &'run mut [I],
        slots: &'run mut [ItemSlot],
        cache: &'run mut LayoutCache,
        main_is_horizontal: bool,
        is_rtl: bool,
    ) -> Self {
        Self {
            items,
            slots,
            cache,
            main_is_horizontal,
            is_rtl,
            state: MeasuredState::default(),
        }
    }

    #[inline]
    pub const fn main_is_horizontal(&self) -> bool {
        self.main_is_horizontal
    }

    /// Union of every state reported by items measured through this arena.
    #[inline]
    pub const fn state(&self) -> MeasuredState {
        self.state
    }

    #[inline]
    fn read<R>(&self, index: usize, default: R, read: impl FnOnce(&I) -> R) -> R {
        self.items.get(index).map_or(default, read)
    }

    #[inline]
    fn slot(&self, index: usize) -> ItemSlot {
        self.slots.get(index).copied().unwrap_or_default()
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.read(index, true, FlexItem::is_collapsed)
    }

    pub fn wrap_before(&self, index: usize) -> bool {
        self.read(index, false, FlexItem::wrap_before)
    }

    pub fn flex_grow(&self, index: usize) -> f32 {
        self.read(index, 0.0, |item| item.flex_grow().max(0.0))
    }

    pub fn flex_shrink(&self, index: usize) -> f32 {
        self.read(index, 0.0, |item| item.flex_shrink().max(0.0))
    }

    pub fn flex_basis_percent(&self, index: usize) -> Option<f32> {
        self.read(index, None, FlexItem::flex_basis_percent)
    }

    /// Effective cross alignment of an item.
    pub fn alignment(&self, index: usize, align_items: AlignItems) -> AlignItems {
        self.read(index, align_items, |item| {
            item.align_self().resolve(align_items)
        })
    }

    pub fn requested_main(&self, index: usize) -> ItemSize {
        let horizontal = self.main_is_horizontal;
        self.read(index, ItemSize::WrapContent, |item| {
            if horizontal { item.width() } else { item.height() }
        })
    }

    pub fn requested_cross(&self, index: usize) -> ItemSize {
        let horizontal = self.main_is_horizontal;
        self.read(index, ItemSize::WrapContent, |item| {
            if horizontal { item.height() } else { item.width() }
        })
    }

    pub fn min_main(&self, index: usize) -> i32 {
        let horizontal = self.main_is_horizontal;
        self.read(index, 0, |item| {
            if horizontal { item.min_width() } else { item.min_height() }
        })
    }

    pub fn max_main(&self, index: usize) -> i32 {
        let horizontal = self.main_is_horizontal;
        self.read(index, 0, |item| {
            if horizontal { item.max_width() } else { item.max_height() }
        })
    }

    pub fn min_cross(&self, index: usize) -> i32 {
        let horizontal = self.main_is_horizontal;
        self.read(index, 0, |item| {
            if horizontal { item.min_height() } else { item.min_width() }
        })
    }

    pub fn max_cross(&self, index: usize) -> i32 {
        let horizontal = self.main_is_horizontal;
        self.read(index, 0, |item| {
            if horizontal { item.max_height() } else { item.max_width() }
        })
    }

    /// Measured size along the main axis.
    pub fn main_size(&self, index: usize) -> i32 {
        let slot = self.slot(index);
        if self.main_is_horizontal { slot.width } else { slot.height }
    }

    /// Measured size along the cross axis.
    pub fn cross_size(&self, index: usize) -> i32 {
        let slot = self.slot(index);
        if self.main_is_horizontal { slot.height } else { slot.width }
    }

    pub fn height(&self, index: usize) -> i32 {
        self.slot(index).height
    }

    pub fn baseline(&self, index: usize) -> Option<i32> {
        self.slot(index).baseline
    }

    /// Margin at the low (left or top) edge of the main axis.
    pub fn main_margin_leading(&self, index: usize) -> i32 {
        let margins = self.read(index, Margins::default(), FlexItem::margins);
        if self.main_is_horizontal {
            margins.left(self.is_rtl)
        } else {
            margins.top
        }
    }

    /// Margin at the high (right or bottom) edge of the main axis.
    pub fn main_margin_trailing(&self, index: usize) -> i32 {
        let margins = self.read(index, Margins::default(), FlexItem::margins);
        if self.main_is_horizontal {
            margins.right(self.is_rtl)
        } else {
            margins.bottom
        }
    }

    /// Margin at the low (top or left) edge of the cross axis.
    pub fn cross_margin_leading(&self, index: usize) -> i32 {
        let margins = self.read(index, Margins::default(), FlexItem::margins);
        if self.main_is_horizontal {
            margins.top
        } else {
            margins.left(self.is_rtl)
        }
    }

    /// Margin at the high (bottom or right) edge of the cross axis.
    pub fn cross_margin_trailing(&self, index: usize) -> i32 {
        let margins = self.read(index, Margins::default(), FlexItem::margins);
        if self.main_is_horizontal {
            margins.bottom
        } else {
            margins.right(self.is_rtl)
        }
    }

    pub fn main_margins(&self, index: usize) -> i32 {
        self.main_margin_leading(index) + self.main_margin_trailing(index)
    }

    pub fn cross_margins(&self, index: usize) -> i32 {
        self.cross_margin_leading(index) + self.cross_margin_trailing(index)
    }

    /// Main size plus main-axis margins.
    pub fn outer_main(&self, index: usize) -> i32 {
        self.main_size(index) + self.main_margins(index)
    }

    /// Cross size plus cross-axis margins.
    pub fn outer_cross(&self, index: usize) -> i32 {
        self.cross_size(index) + self.cross_margins(index)
    }

    /// Issue a sizing request expressed in main/cross terms.
    pub fn measure_axes(&mut self, index: usize, main: SizingConstraint, cross: SizingConstraint) {
        let (width, height) = if self.main_is_horizontal {
            (main, cross)
        } else {
            (cross, main)
        };
        let measurement = match self.cache.lookup(index, width, height) {
            Some(cached) => cached,
            None => {
                let Some(item) = self.items.get_mut(index) else {
                    return;
                };
                let fresh = item.measure(width, height);
                self.cache.store(index, width, height, fresh);
                fresh
            }
        };
        trace!(
            target: "flexbox::measure",
            "[FLEX-MEASURE] item={index} width={width:?} height={height:?} -> {}x{} baseline={:?}",
            measurement.width,
            measurement.height,
            measurement.baseline
        );
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = ItemSlot {
                width: measurement.width.max(0),
                height: measurement.height.max(0),
                baseline: measurement.baseline,
            };
        }
        self.state = self.state.merge(measurement.state);
    }

    /// Remeasure at the item's current main size and `cross` exactly.
    pub fn measure_fixed_cross(&mut self, index: usize, cross: i32) {
        let main = self.main_size(index);
        self.measure_axes(
            index,
            SizingConstraint::Exact(main),
            SizingConstraint::Exact(cross.max(0)),
        );
    }

    /// Clamp the measured cross size into the item's min/max cross bounds,
    /// remeasuring when the clamp changes it.
    pub fn clamp_cross(&mut self, index: usize) {
        let current = self.cross_size(index);
        let clamped = clamp_between(current, self.min_cross(index), self.max_cross(index));
        if clamped != current {
            trace!(
                target: "flexbox::measure",
                "[FLEX-MEASURE] item={index} cross clamp {current} -> {clamped}"
            );
            self.measure_fixed_cross(index, clamped);
        }
    }

    /// Remember which line item `index` landed in.
    pub fn record_line(&mut self, index: usize, line: usize) {
        self.cache.record_line(index, line);
    }

    /// Hand the final rectangle to the item.
    pub fn place(&mut self, index: usize, rect: Rect) {
        if let Some(item) = self.items.get_mut(index) {
            item.place(rect);
        }
    }
}
