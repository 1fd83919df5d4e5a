//! Host-side test widget shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use flexbox_layout::{
    AlignSelf, FlexContainer, FlexItem, ItemSize, MAX_SIZE, Margins, Measurement, Rect,
    SizingConstraint,
};

/// Initialise logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A widget with a fixed content size, answering requests like a plain view.
#[derive(Clone, Debug)]
pub struct Widget {
    pub content: (i32, i32),
    pub request: (ItemSize, ItemSize),
    pub min: (i32, i32),
    pub max: (i32, i32),
    pub margins: Margins,
    pub grow: f32,
    pub shrink: f32,
    pub basis_percent: Option<f32>,
    pub align_self: AlignSelf,
    pub order: i32,
    pub wrap_before: bool,
    pub collapsed: bool,
    pub baseline: Option<i32>,
    pub requests: Vec<(SizingConstraint, SizingConstraint)>,
    pub placed: Option<Rect>,
}

impl Widget {
    /// Widget wrapping its content of `width` x `height`.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            content: (width, height),
            request: (ItemSize::WrapContent, ItemSize::WrapContent),
            min: (0, 0),
            max: (MAX_SIZE, MAX_SIZE),
            margins: Margins::default(),
            grow: 0.0,
            shrink: 1.0,
            basis_percent: None,
            align_self: AlignSelf::Auto,
            order: 0,
            wrap_before: false,
            collapsed: false,
            baseline: None,
            requests: Vec::new(),
            placed: None,
        }
    }

    /// Widget asking for a fixed `width` x `height`.
    pub fn fixed(width: i32, height: i32) -> Self {
        let mut widget = Self::new(width, height);
        widget.request = (ItemSize::Fixed(width), ItemSize::Fixed(height));
        widget
    }

    pub fn grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn max(mut self, width: i32, height: i32) -> Self {
        self.max = (width, height);
        self
    }

    pub fn min(mut self, width: i32, height: i32) -> Self {
        self.min = (width, height);
        self
    }

    pub fn height_request(mut self, height: ItemSize) -> Self {
        self.request.1 = height;
        self
    }

    pub fn align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = align_self;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    pub fn baseline(mut self, baseline: i32) -> Self {
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

impl FlexItem for Widget {
    fn width(&self) -> ItemSize {
        self.request.0
    }

    fn height(&self) -> ItemSize {
        self.request.1
    }

    fn measure(&mut self, width: SizingConstraint, height: SizingConstraint) -> Measurement {
        self.requests.push((width, height));
        let measured = Measurement::new(answer(width, self.content.0), answer(height, self.content.1));
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
        self.min.0
    }

    fn min_height(&self) -> i32 {
        self.min.1
    }

    fn max_width(&self) -> i32 {
        self.max.0
    }

    fn max_height(&self) -> i32 {
        self.max.1
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

/// Rectangles placed by the last layout, in item order.
pub fn placed(container: &FlexContainer<Widget>) -> Vec<Option<Rect>> {
    container.items().iter().map(|widget| widget.placed).collect()
}

/// Width of every placed item, in item order.
pub fn widths(container: &FlexContainer<Widget>) -> Vec<i32> {
    placed(container).into_iter().flatten().map(Rect::width).collect()
}
