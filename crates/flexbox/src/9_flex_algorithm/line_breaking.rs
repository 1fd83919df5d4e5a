//! Line breaking logic for multi-line flex layouts.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::lines::FlexLine;
use crate::chapter5::{ContainerProperties, FlexWrap};
use crate::chapter6::{FlexItem, ItemArena};
use crate::rounding::round_half_up;
use crate::sizing::{ItemSize, SizingConstraint, child_constraint};

/// Partitions items into flex lines, measuring each item as it is placed.
pub struct LineBuilder<'props> {
    properties: &'props ContainerProperties,
    main: SizingConstraint,
    cross: SizingConstraint,
}

impl<'props> LineBuilder<'props> {
    pub const fn new(
        properties: &'props ContainerProperties,
        main: SizingConstraint,
        cross: SizingConstraint,
    ) -> Self {
        Self {
            properties,
            main,
            cross,
        }
    }

    /// Build lines from items walked in `order`.
    ///
    /// Every line holds at least one item; with no items at all a single
    /// empty line is returned so the container still has a defined size.
    pub fn build<I: FlexItem>(&self, arena: &mut ItemArena<'_, I>, order: &[usize]) -> Vec<FlexLine> {
        let main_paddings = self.properties.main_paddings();
        let mut occupied_cross = self.properties.cross_paddings();
        let mut lines: Vec<FlexLine> = Vec::new();
        let mut line = FlexLine::open(main_paddings, occupied_cross);

        for &index in order {
            if arena.is_collapsed(index) {
                line.push_collapsed(index);
                arena.record_line(index, lines.len());
                continue;
            }
            self.measure_item(arena, index, occupied_cross);

            if self.needs_wrap(arena, index, &line, lines.len()) {
                debug!(
                    target: "flexbox::lines",
                    "[FLEX-LINES] wrap before item={index} line={} line_main={} line_cross={}",
                    lines.len(),
                    line.main_size(),
                    line.cross_size()
                );
                occupied_cross += line.cross_size();
                lines.push(line);
                line = FlexLine::open(main_paddings, occupied_cross);
                if arena.requested_cross(index) == ItemSize::MatchParent {
                    self.remeasure_cross(arena, index, occupied_cross);
                }
            }
            line.add_item(arena, index, self.properties);
            arena.record_line(index, lines.len());
        }
        lines.push(line);

        debug!(
            target: "flexbox::lines",
            "[FLEX-LINES] items={} lines={} wrap={:?} main={:?}",
            order.len(),
            lines.len(),
            self.properties.flex_wrap,
            self.main
        );
        lines
    }

    /// Main request for an item: a percentage basis against an exact
    /// container, otherwise the item's own request.
    fn requested_main<I: FlexItem>(&self, arena: &ItemArena<'_, I>, index: usize) -> ItemSize {
        match (arena.flex_basis_percent(index), self.main) {
            (Some(percent), SizingConstraint::Exact(size)) if percent >= 0.0 => {
                ItemSize::Fixed(round_half_up(f64::from(size) * f64::from(percent)) as i32)
            }
            _ => arena.requested_main(index),
        }
    }

    fn measure_item<I: FlexItem>(
        &self,
        arena: &mut ItemArena<'_, I>,
        index: usize,
        occupied_cross: i32,
    ) {
        let main_request = child_constraint(
            self.main,
            self.properties.main_paddings() + arena.main_margins(index),
            self.requested_main(arena, index),
        );
        let cross_request = child_constraint(
            self.cross,
            occupied_cross + arena.cross_margins(index),
            arena.requested_cross(index),
        );
        arena.measure_axes(index, main_request, cross_request);
        arena.clamp_cross(index);
    }

    /// Fill-remaining items are measured again once the cross space consumed
    /// by the closed lines is known.
    fn remeasure_cross<I: FlexItem>(
        &self,
        arena: &mut ItemArena<'_, I>,
        index: usize,
        occupied_cross: i32,
    ) {
        let cross_request = child_constraint(
            self.cross,
            occupied_cross + arena.cross_margins(index),
            ItemSize::MatchParent,
        );
        let main = arena.main_size(index);
        arena.measure_axes(index, SizingConstraint::Exact(main), cross_request);
        arena.clamp_cross(index);
    }

    fn needs_wrap<I: FlexItem>(
        &self,
        arena: &ItemArena<'_, I>,
        index: usize,
        line: &FlexLine,
        closed_lines: usize,
    ) -> bool {
        if self.properties.flex_wrap == FlexWrap::NoWrap
            || self.main.is_unconstrained()
            || line.visible_item_count() == 0
            || self.properties.line_cap_reached(closed_lines + 1)
        {
            return false;
        }
        arena.wrap_before(index)
            || self.main.expected_size() < line.main_size() + arena.outer_main(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LayoutCache;
    use crate::chapter6::ItemSlot;
    use crate::test_support::Boxed;

    fn build_lines(
        items: &mut [Boxed],
        properties: &ContainerProperties,
        main: SizingConstraint,
    ) -> Vec<FlexLine> {
        let mut slots = vec![ItemSlot::default(); items.len()];
        let mut cache = LayoutCache::new(false);
        cache.reset(items.len());
        let order: Vec<usize> = (0..items.len()).collect();
        let mut arena = ItemArena::new(items, &mut slots, &mut cache, true, false);
        LineBuilder::new(properties, main, SizingConstraint::Unconstrained)
            .build(&mut arena, &order)
    }

    fn line_items(lines: &[FlexLine]) -> Vec<Vec<usize>> {
        lines.iter().map(|line| line.items().to_vec()).collect()
    }

    #[test]
    /// # Panics
    /// Panics if four 100px items in a 250px wrapping container do not split two and two.
    fn wraps_when_line_would_overflow() {
        let mut items = vec![Boxed::new(100, 10); 4];
        let properties = ContainerProperties::default().with_wrap(FlexWrap::Wrap);
        let lines = build_lines(&mut items, &properties, SizingConstraint::Exact(250));
        assert_eq!(line_items(&lines), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(lines.first().map(FlexLine::main_size), Some(200));
        assert_eq!(lines.get(1).map(FlexLine::sum_cross_size_before), Some(10));
    }

    #[test]
    /// # Panics
    /// Panics if a non-wrapping container splits its items.
    fn nowrap_keeps_single_line() {
        let mut items = vec![Boxed::new(100, 10); 4];
        let properties = ContainerProperties::default();
        let lines = build_lines(&mut items, &properties, SizingConstraint::Exact(250));
        assert_eq!(line_items(&lines), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    /// # Panics
    /// Panics if an oversize first item opens an empty line before itself.
    fn oversize_item_stays_on_its_own_line() {
        let mut items = vec![
            Boxed::new(400, 10).with_requests(ItemSize::Fixed(400), ItemSize::WrapContent),
            Boxed::new(50, 10),
        ];
        let properties = ContainerProperties::default().with_wrap(FlexWrap::Wrap);
        let lines = build_lines(&mut items, &properties, SizingConstraint::AtMost(250));
        assert_eq!(line_items(&lines), vec![vec![0], vec![1]]);
    }

    #[test]
    /// # Panics
    /// Panics if the line cap does not pack remaining items into the last line.
    fn max_lines_caps_wrapping() {
        let mut items = vec![Boxed::new(100, 10); 5];
        let properties = ContainerProperties::default()
            .with_wrap(FlexWrap::Wrap)
            .with_max_lines(Some(2));
        let lines = build_lines(&mut items, &properties, SizingConstraint::Exact(250));
        assert_eq!(line_items(&lines), vec![vec![0, 1], vec![2, 3, 4]]);
    }

    #[test]
    /// # Panics
    /// Panics if wrap-before and collapsed items are not honored.
    fn wrap_before_and_collapsed_items() {
        let mut items = vec![
            Boxed::new(50, 10),
            Boxed::new(50, 10).collapsed(),
            Boxed::new(50, 10).with_wrap_before(),
            Boxed::new(50, 10),
        ];
        let properties = ContainerProperties::default().with_wrap(FlexWrap::Wrap);
        let lines = build_lines(&mut items, &properties, SizingConstraint::Exact(500));
        assert_eq!(line_items(&lines), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(lines.first().map(FlexLine::visible_item_count), Some(1));
        assert_eq!(items.get(1).map(|item| item.measure_count), Some(0));
    }

    #[test]
    /// # Panics
    /// Panics if an unconstrained main axis wraps.
    fn unconstrained_main_never_wraps() {
        let mut items = vec![Boxed::new(100, 10); 3];
        let properties = ContainerProperties::default().with_wrap(FlexWrap::Wrap);
        let lines = build_lines(&mut items, &properties, SizingConstraint::Unconstrained);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().map(FlexLine::main_size), Some(300));
    }

    #[test]
    /// # Panics
    /// Panics if zero items do not yield one empty line.
    fn no_items_yield_one_empty_line() {
        let mut items: Vec<Boxed> = Vec::new();
        let properties = ContainerProperties::default();
        let lines = build_lines(&mut items, &properties, SizingConstraint::Exact(100));
        assert_eq!(lines.len(), 1);
        assert!(lines.first().is_some_and(FlexLine::is_empty));
    }

    #[test]
    /// # Panics
    /// Panics if a percentage basis is not resolved against the exact main size.
    fn basis_percent_against_exact_main() {
        let mut items = vec![Boxed::new(10, 10).with_basis_percent(0.25)];
        let properties = ContainerProperties::default();
        let lines = build_lines(&mut items, &properties, SizingConstraint::Exact(300));
        assert_eq!(lines.first().map(FlexLine::main_size), Some(75));
    }
}
