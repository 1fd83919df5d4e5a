//! Stretching items to their line's cross size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#valdef-align-items-stretch>

use log::trace;

use super::lines::FlexLine;
use crate::chapter5::{AlignItems, ContainerProperties};
use crate::chapter6::{FlexItem, ItemArena};
use crate::sizing::clamp_between;

/// Expands `Stretch`-aligned items to fill the cross size of their line.
pub struct ItemStretcher<'props> {
    properties: &'props ContainerProperties,
}

impl<'props> ItemStretcher<'props> {
    pub const fn new(properties: &'props ContainerProperties) -> Self {
        Self { properties }
    }

    pub fn stretch<I: FlexItem>(&self, arena: &mut ItemArena<'_, I>, lines: &[FlexLine]) {
        for line in lines.iter().filter(|line| !line.is_dummy()) {
            let line_cross = line.cross_size();
            for &index in line.items() {
                if arena.is_collapsed(index)
                    || arena.alignment(index, self.properties.align_items) != AlignItems::Stretch
                    || arena.outer_cross(index) >= line_cross
                {
                    continue;
                }
                let stretched = clamp_between(
                    line_cross - arena.cross_margins(index),
                    arena.min_cross(index),
                    arena.max_cross(index),
                );
                if stretched == arena.cross_size(index) {
                    continue;
                }
                trace!(
                    target: "flexbox::stretch",
                    "[FLEX-STRETCH] item={index} cross {} -> {stretched} line_cross={line_cross}",
                    arena.cross_size(index)
                );
                arena.measure_fixed_cross(index, stretched);
            }
        }
    }
}
