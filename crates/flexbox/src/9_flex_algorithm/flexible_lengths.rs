//! Resolving flexible lengths per line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::{debug, trace};

use super::lines::{FlexLine, largest_main_size};
use crate::chapter5::ContainerProperties;
use crate::chapter6::{FlexItem, ItemArena};
use crate::rounding::RoundingErrorAccumulator;
use crate::sizing::{SizingConstraint, child_constraint};

/// Main size every line is relaxed towards: the exact container size, or the
/// largest natural line size capped by an at-most request.
pub fn determine_main_size(main: SizingConstraint, lines: &[FlexLine]) -> i32 {
    let largest = largest_main_size(lines);
    match main {
        SizingConstraint::Exact(size) => size,
        SizingConstraint::AtMost(size) => largest.min(size),
        SizingConstraint::Unconstrained => largest,
    }
}

/// Distributes main-axis free space across the items of each line by their
/// grow or shrink factors, freezing items that hit a min/max bound.
pub struct FlexibleLengthResolver<'props> {
    properties: &'props ContainerProperties,
    cross: SizingConstraint,
    target: i32,
}

impl<'props> FlexibleLengthResolver<'props> {
    pub const fn new(
        properties: &'props ContainerProperties,
        cross: SizingConstraint,
        target: i32,
    ) -> Self {
        Self {
            properties,
            cross,
            target,
        }
    }

    pub fn resolve<I: FlexItem>(&self, arena: &mut ItemArena<'_, I>, lines: &mut [FlexLine]) {
        for (line_index, line) in lines.iter_mut().enumerate() {
            self.resolve_line(arena, line, line_index);
        }
    }

    fn resolve_line<I: FlexItem>(
        &self,
        arena: &mut ItemArena<'_, I>,
        line: &mut FlexLine,
        line_index: usize,
    ) {
        let growing = self.target > line.main_size() && line.any_grow();
        let shrinking = self.target < line.main_size() && line.any_shrink();
        if line.visible_item_count() == 0 || !(growing || shrinking) {
            return;
        }
        let visible: Vec<usize> = line
            .items()
            .iter()
            .copied()
            .filter(|&index| !arena.is_collapsed(index))
            .collect();

        // Items with no factor in the active direction never move.
        for &index in &visible {
            let factor = if growing {
                arena.flex_grow(index)
            } else {
                arena.flex_shrink(index)
            };
            if factor <= 0.0 {
                line.freeze(index, arena.flex_grow(index), arena.flex_shrink(index));
            }
        }

        let mut accumulator = RoundingErrorAccumulator::new();
        for pass in 0..=visible.len() {
            let available = self.target - line.main_size();
            if available == 0 {
                break;
            }
            let total = if available > 0 {
                line.total_flex_grow()
            } else {
                line.total_flex_shrink()
            };
            if total <= 0.0 {
                break;
            }
            let unit = f64::from(available) / f64::from(total);
            let mut violated = false;

            for &index in &visible {
                if line.is_frozen(index) {
                    continue;
                }
                let grow = arena.flex_grow(index);
                let shrink = arena.flex_shrink(index);
                let factor = if available > 0 { grow } else { shrink };
                if factor <= 0.0 {
                    continue;
                }
                let old_outer = arena.outer_main(index);
                let raw = f64::from(arena.main_size(index)) + unit * f64::from(factor);
                let min = f64::from(arena.min_main(index));
                let max = f64::from(arena.max_main(index));
                let bound = if raw < min {
                    Some(min)
                } else if raw > max {
                    Some(max)
                } else {
                    None
                };
                let new_main = match bound {
                    Some(limit) => {
                        line.freeze(index, grow, shrink);
                        violated = true;
                        limit as i32
                    }
                    None => accumulator.round_and_compensate(raw),
                };
                trace!(
                    target: "flexbox::flex",
                    "[FLEX-GROW] line={line_index} pass={pass} item={index} raw={raw:.3} -> {new_main}"
                );
                let cross_request = child_constraint(
                    self.cross,
                    line.sum_cross_size_before() + arena.cross_margins(index),
                    arena.requested_cross(index),
                );
                arena.measure_axes(index, SizingConstraint::Exact(new_main), cross_request);
                arena.clamp_cross(index);
                line.adjust_main_size(arena.outer_main(index) - old_outer);
            }

            debug!(
                target: "flexbox::flex",
                "[FLEX-GROW] line={line_index} pass={pass} available={available} unit={unit:.3} main={} target={} violated={violated}",
                line.main_size(),
                self.target
            );
            if !violated {
                break;
            }
        }
        line.refresh_cross(arena, self.properties);
    }
}
