use roundview_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis placement of children that are smaller than the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    fn offset(self, free: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => free * 0.5,
            Align::End => free,
        }
    }
}

// ── Axis ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }
}

// ── Flex ──────────────────────────────────────────────────────────────────

/// Shared layout of [`Row`] and [`Column`]: children take their natural size
/// along the main axis and are separated by `spacing`.
struct Flex {
    axis: Axis,
    children: Vec<Element>,
    spacing: f32,
    cross_align: Align,
}

impl Flex {
    fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new(), spacing: 0.0, cross_align: Align::Start }
    }

    fn child_constraints(&self, constraints: Constraints) -> Constraints {
        let loose = Constraints::loose(constraints.max);
        match self.axis {
            Axis::Horizontal => loose.with_infinite_width(),
            Axis::Vertical => loose.with_infinite_height(),
        }
    }

    fn measure(&self, constraints: Constraints) -> Vec2 {
        let child_c = self.child_constraints(constraints);
        let mut main = 0.0_f32;
        let mut cross = 0.0_f32;
        for (i, child) in self.children.iter().enumerate() {
            let s = child.measure(child_c);
            main += self.axis.main(s);
            if i > 0 {
                main += self.spacing;
            }
            cross = cross.max(self.axis.cross(s));
        }
        constraints.constrain(self.axis.pack(main, cross))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Children are laid out against the space this container was given.
        let child_c = self.child_constraints(Constraints::loose(rect.size));
        let cross_extent = self.axis.cross(rect.size);

        let mut cursor = self.axis.main(rect.origin);
        for child in &self.children {
            let s = child.measure(child_c);
            let cross = self.axis.cross(rect.origin)
                + self.cross_align.offset((cross_extent - self.axis.cross(s)).max(0.0));
            child.paint(painter, Rect::from_origin_size(self.axis.pack(cursor, cross), s));
            cursor += self.axis.main(s) + self.spacing;
        }
    }
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical container. Children are stacked top to bottom.
pub struct Column(Flex);

impl Column {
    pub fn new() -> Self {
        Self(Flex::new(Axis::Vertical))
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.0.spacing = v;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.0.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.0.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.0.children.extend(iter.into_iter().map(Into::into));
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}

// ── Row ───────────────────────────────────────────────────────────────────

/// Horizontal container. Children are placed left to right.
pub struct Row(Flex);

impl Row {
    pub fn new() -> Self {
        Self(Flex::new(Axis::Horizontal))
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.0.spacing = v;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.0.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.0.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.0.children.extend(iter.into_iter().map(Into::into));
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}
