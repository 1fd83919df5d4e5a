//! Main-axis justification, cross-axis alignment and final rectangles.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use log::{debug, trace};

use super::lines::FlexLine;
use crate::chapter5::{AlignItems, ContainerProperties, JustifyContent};
use crate::chapter6::{FlexItem, ItemArena, Rect};
use crate::chapter7::{Axes, resolve_axes};
use crate::rounding::{RoundingErrorAccumulator, round_half_up};

/// Span of an item along one axis, in content-box coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Span {
    start: i32,
    end: i32,
}

/// Walks lines and items and emits each item's rectangle.
pub struct Positioner<'props> {
    properties: &'props ContainerProperties,
    axes: Axes,
}

impl<'props> Positioner<'props> {
    pub const fn new(properties: &'props ContainerProperties) -> Self {
        Self {
            properties,
            axes: resolve_axes(
                properties.flex_direction,
                properties.flex_wrap,
                properties.is_rtl,
            ),
        }
    }

    /// Place every visible item inside a `width` x `height` container.
    ///
    /// Rectangles are relative to the container's top-left corner and are
    /// also written to `rects` by item index.
    pub fn position<I: FlexItem>(
        &self,
        arena: &mut ItemArena<'_, I>,
        lines: &[FlexLine],
        width: i32,
        height: i32,
        rects: &mut [Option<Rect>],
    ) {
        let horizontal = self.axes.main_is_horizontal;
        let paddings = self.properties.paddings;
        let (outer_main, outer_cross) = if horizontal {
            (width, height)
        } else {
            (height, width)
        };
        let inner_main = outer_main - paddings.total(horizontal);
        let inner_cross = outer_cross - paddings.total(!horizontal);
        debug!(
            target: "flexbox::position",
            "[FLEX-POSITION] axes={:?} inner_main={inner_main} inner_cross={inner_cross} lines={}",
            self.axes,
            lines.len()
        );

        let mut cross_anchor = if self.axes.cross_reversed {
            inner_cross
        } else {
            0
        };
        for line in lines {
            if line.visible_item_count() > 0 {
                self.position_line(arena, line, inner_main, cross_anchor, rects);
            }
            if self.axes.cross_reversed {
                cross_anchor -= line.cross_size();
            } else {
                cross_anchor += line.cross_size();
            }
        }
    }

    /// Starting anchor and the fractional spacing inserted after each item.
    fn justify(&self, inner_main: i32, line_main: i32, count: usize) -> (i32, f64) {
        let reversed = self.axes.main_reversed;
        let free = inner_main - line_main;
        let count = count as f64;
        match self.properties.justify_content {
            JustifyContent::FlexStart => (if reversed { inner_main } else { 0 }, 0.0),
            JustifyContent::FlexEnd => (if reversed { line_main } else { free }, 0.0),
            JustifyContent::Center => {
                let anchor = if reversed {
                    (inner_main + line_main) / 2
                } else {
                    free / 2
                };
                (anchor, 0.0)
            }
            JustifyContent::SpaceAround => {
                let unit = f64::from(free) / count;
                let half = round_half_up(unit) as i32 / 2;
                (if reversed { inner_main - half } else { half }, unit)
            }
            JustifyContent::SpaceBetween => {
                let unit = if count > 1.0 {
                    f64::from(free) / (count - 1.0)
                } else {
                    0.0
                };
                (if reversed { inner_main } else { 0 }, unit)
            }
            JustifyContent::SpaceEvenly => {
                let unit = f64::from(free) / (count + 1.0);
                let anchor = if reversed {
                    round_half_up(f64::from(inner_main) - unit)
                } else {
                    round_half_up(unit)
                };
                (anchor as i32, unit)
            }
        }
    }

    fn position_line<I: FlexItem>(
        &self,
        arena: &mut ItemArena<'_, I>,
        line: &FlexLine,
        inner_main: i32,
        cross_anchor: i32,
        rects: &mut [Option<Rect>],
    ) {
        let line_main = line.main_size() - self.properties.main_paddings();
        let (mut main_anchor, spacing) =
            self.justify(inner_main, line_main, line.visible_item_count());
        let mut accumulator = RoundingErrorAccumulator::new();

        for &index in line.items() {
            if arena.is_collapsed(index) {
                continue;
            }
            let size = arena.main_size(index);
            let leading = arena.main_margin_leading(index);
            let trailing = arena.main_margin_trailing(index);
            let gap = accumulator.round_and_compensate(spacing);
            let main = if self.axes.main_reversed {
                let end = main_anchor - trailing;
                let start = end - size;
                main_anchor = start - leading - gap;
                Span { start, end }
            } else {
                let start = main_anchor + leading;
                let end = start + size;
                main_anchor = end + trailing + gap;
                Span { start, end }
            };
            let cross = self.cross_span(arena, index, line, cross_anchor);
            let rect = self.to_rect(main, cross);
            trace!(
                target: "flexbox::position",
                "[FLEX-POSITION] item={index} main={main:?} cross={cross:?} rect={rect:?}"
            );
            if let Some(slot) = rects.get_mut(index) {
                *slot = Some(rect);
            }
            arena.place(index, rect);
        }
    }

    /// Cross span of one item inside its line. `anchor` is the line's
    /// cross-start edge, which is the high edge when the cross axis is reversed.
    fn cross_span<I: FlexItem>(
        &self,
        arena: &ItemArena<'_, I>,
        index: usize,
        line: &FlexLine,
        anchor: i32,
    ) -> Span {
        let size = arena.cross_size(index);
        let leading = arena.cross_margin_leading(index);
        let trailing = arena.cross_margin_trailing(index);
        let line_cross = line.cross_size();
        let outer = size + leading + trailing;
        let mut alignment = arena.alignment(index, self.properties.align_items);
        let baseline = arena.baseline(index);
        if alignment == AlignItems::Baseline && (!self.axes.main_is_horizontal || baseline.is_none())
        {
            alignment = AlignItems::FlexStart;
        }
        let item_baseline = baseline.unwrap_or(0);

        if self.axes.cross_reversed {
            let end = match alignment {
                AlignItems::FlexStart | AlignItems::Stretch => anchor - trailing,
                AlignItems::FlexEnd => anchor - line_cross + leading + size,
                AlignItems::Center => anchor - (line_cross / 2 - outer / 2) - trailing,
                AlignItems::Baseline => {
                    let descent = size - item_baseline;
                    anchor - (line.max_baseline() - descent).max(trailing)
                }
            };
            Span {
                start: end - size,
                end,
            }
        } else {
            let start = match alignment {
                AlignItems::FlexStart | AlignItems::Stretch => anchor + leading,
                AlignItems::FlexEnd => anchor + line_cross - trailing - size,
                AlignItems::Center => anchor + line_cross / 2 - outer / 2 + leading,
                AlignItems::Baseline => {
                    anchor + (line.max_baseline() - item_baseline).max(leading)
                }
            };
            Span {
                start,
                end: start + size,
            }
        }
    }

    /// Translate main/cross spans into a physical rectangle, offset by padding.
    fn to_rect(&self, main: Span, cross: Span) -> Rect {
        let paddings = self.properties.paddings;
        let horizontal = self.axes.main_is_horizontal;
        let main_offset = paddings.leading(horizontal);
        let cross_offset = paddings.leading(!horizontal);
        if horizontal {
            Rect {
                left: main_offset + main.start,
                top: cross_offset + cross.start,
                right: main_offset + main.end,
                bottom: cross_offset + cross.end,
            }
        } else {
            Rect {
                left: cross_offset + cross.start,
                top: main_offset + main.start,
                right: cross_offset + cross.end,
                bottom: main_offset + main.end,
            }
        }
    }
}
