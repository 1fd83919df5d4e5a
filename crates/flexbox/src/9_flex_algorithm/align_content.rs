//! Align-content packing logic for multi-line flex containers.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use std::mem;

use log::debug;

use super::lines::{FlexLine, total_cross_size};
use crate::chapter5::{AlignContent, ContainerProperties};
use crate::rounding::RoundingErrorAccumulator;
use crate::sizing::SizingConstraint;

/// Split `total` into `parts` whole-pixel shares that add up to `total`; the
/// last share absorbs any rounding remainder.
fn split_evenly(total: i32, parts: usize) -> Vec<i32> {
    if parts == 0 {
        return Vec::new();
    }
    let unit = f64::from(total) / parts as f64;
    let mut accumulator = RoundingErrorAccumulator::new();
    let mut shares: Vec<i32> = (1..parts)
        .map(|_| accumulator.round_and_compensate(unit))
        .collect();
    let given: i32 = shares.iter().sum();
    shares.push(total - given);
    shares
}

/// Allocates free cross space across lines once the container cross size is exact.
pub struct CrossSizeDistributor<'props> {
    properties: &'props ContainerProperties,
    cross: SizingConstraint,
}

impl<'props> CrossSizeDistributor<'props> {
    pub const fn new(properties: &'props ContainerProperties, cross: SizingConstraint) -> Self {
        Self { properties, cross }
    }

    pub fn distribute(&self, lines: &mut Vec<FlexLine>) {
        let SizingConstraint::Exact(container_cross) = self.cross else {
            return;
        };
        let cross_paddings = self.properties.cross_paddings();
        if let [line] = lines.as_mut_slice() {
            line.set_cross_size((container_cross - cross_paddings).max(0));
            return;
        }
        let line_count = lines.len();
        if line_count == 0 {
            return;
        }
        let free_space = container_cross - total_cross_size(lines) - cross_paddings;
        debug!(
            target: "flexbox::align_content",
            "[ALIGN-CONTENT] mode={:?} container_cross={container_cross} lines={line_count} free={free_space}",
            self.properties.align_content
        );
        match self.properties.align_content {
            AlignContent::FlexStart => {}
            AlignContent::FlexEnd => lines.insert(0, FlexLine::dummy(free_space)),
            AlignContent::Center => center(lines, free_space),
            AlignContent::Stretch => {
                if free_space > 0 {
                    for (line, share) in lines.iter_mut().zip(split_evenly(free_space, line_count)) {
                        line.grow_cross_size(share);
                    }
                }
            }
            AlignContent::SpaceBetween => {
                if free_space > 0 {
                    insert_between(lines, free_space);
                }
            }
            AlignContent::SpaceAround => {
                if free_space > 0 {
                    insert_around(lines, free_space);
                } else {
                    center(lines, free_space);
                }
            }
        }
    }
}

/// Leading and trailing dummy lines, each half the free space.
fn center(lines: &mut Vec<FlexLine>, free_space: i32) {
    let half = free_space.max(0) / 2;
    lines.insert(0, FlexLine::dummy(half));
    lines.push(FlexLine::dummy(half));
}

/// A dummy line between every adjacent pair of real lines.
fn insert_between(lines: &mut Vec<FlexLine>, free_space: i32) {
    let real = mem::take(lines);
    let mut gaps = split_evenly(free_space, real.len().saturating_sub(1)).into_iter();
    for line in real {
        lines.push(line);
        if let Some(gap) = gaps.next() {
            lines.push(FlexLine::dummy(gap));
        }
    }
}

/// A dummy line before and after every real line.
fn insert_around(lines: &mut Vec<FlexLine>, free_space: i32) {
    let real = mem::take(lines);
    let mut gaps = split_evenly(free_space, real.len() * 2).into_iter();
    for line in real {
        lines.push(FlexLine::dummy(gaps.next().unwrap_or(0)));
        lines.push(line);
        lines.push(FlexLine::dummy(gaps.next().unwrap_or(0)));
    }
}
