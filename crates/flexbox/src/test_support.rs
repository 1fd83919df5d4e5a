//! Scripted item used by the unit tests.

use crate::chapter6::{AlignSelf, FlexItem, Margins, Measurement, Rect};
use crate::sizing::{ItemSize, MAX_SIZE, SizingConstraint};

/// Box with a fixed content size that answers requests like a plain widget:
/// exact requests win, at-most requests cap the content, unconstrained
/// requests report the content.
#[derive(Clone, Debug)]
pub struct Boxed {
    pub content_width: i32,
    pub content_height: i32,
    pub width_request: ItemSize,
    pub height_request: ItemSize,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub margins: Margins,
    pub grow: f32,
    pub shrink: f32,
    pub basis_percent: Option<f32>,
    pub align_self: AlignSelf,
    pub order: i32,
    pub wrap_before: bool,
    pub collapsed: bool,
    pub baseline: Option<i32>,
    pub measure_count: usize,
    pub placed: Option<Rect>,
}

impl Boxed {
    pub const fn new(content_width: i32, content_height: i32) -> Self {
        Self {
            content_width,
            content_height,
            width_request: ItemSize::WrapContent,
            height_request: ItemSize::WrapContent,
            min_width: 0,
            min_height: 0,
            max_width: MAX_SIZE,
            max_height: MAX_SIZE,
            margins: Margins {
                start: 0,
                end: 0,
                top: 0,
                bottom: 0,
            },
            grow: 0.0,
            shrink: 1.0,
            basis_percent: None,
            align_self: AlignSelf::Auto,
            order: 0,
            wrap_before: false,
            collapsed: false,
            baseline: None,
            measure_count: 0,
            placed: None,
        }
    }

    pub const fn with_grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }

    pub const fn with_shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub const fn with_min_size(mut self, min_width: i32, min_height: i32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub const fn with_max_size(mut self, max_width: i32, max_height: i32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub const fn with_requests(mut self, width: ItemSize, height: ItemSize) -> Self {
        self.width_request = width;
        self.height_request = height;
        self
    }

    pub const fn with_basis_percent(mut self, percent: f32) -> Self {
        self.basis_percent = Some(percent);
        self
    }

    pub const fn with_align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = align_self;
        self
    }

    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub const fn with_wrap_before(mut self) -> Self {
        self.wrap_before = true;
        self
    }

    pub const fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

fn answer(request: SizingConstraint, content: i32) -> i32 {
    match request {
        SizingConstraint::Exact(size) => size,
        SizingConstraint::AtMost(size) => content.min(size),
        SizingConstraint::Unconstrained => content,
    }
}

impl FlexItem for Boxed {
    fn width(&self) -> ItemSize {
        self.width_request
    }

    fn height(&self) -> ItemSize {
        self.height_request
    }

    fn measure(&mut self, width: SizingConstraint, height: SizingConstraint) -> Measurement {
        self.measure_count += 1;
        let measured = Measurement::new(
            answer(width, self.content_width),
            answer(height, self.content_height),
        );
        match self.baseline {
            Some(baseline) => measured.with_baseline(baseline),
            None => measured,
        }
    }

    fn place(&mut self, rect: Rect) {
        self.placed = Some(rect);
    }

    fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    fn min_width(&self) -> i32 {
        self.min_width
    }

    fn min_height(&self) -> i32 {
        self.min_height
    }

    fn max_width(&self) -> i32 {
        self.max_width
    }

    fn max_height(&self) -> i32 {
        self.max_height
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn flex_grow(&self) -> f32 {
        self.grow
    }

    fn flex_shrink(&self) -> f32 {
        self.shrink
    }

    fn flex_basis_percent(&self) -> Option<f32> {
        self.basis_percent
    }

    fn align_self(&self) -> AlignSelf {
        self.align_self
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn wrap_before(&self) -> bool {
        self.wrap_before
    }
}
