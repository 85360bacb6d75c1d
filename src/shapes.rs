//! Shape elements
//!
//! Each shape is geometry plus its own [`Fill`] and [`Stroke`], and
//! serializes to a single self-closed element followed by a newline.
//! Geometry is written as given; nothing is clamped or normalized.

use enum_dispatch::enum_dispatch;

use crate::markup::Markup;
use crate::path::PathData;
use crate::style::{Fill, Stroke};
use crate::types::{Num, Point};

/// Any of the supported shapes, for heterogeneous collections
#[enum_dispatch(Markup)]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rectangle,
    Circle,
    Polyline,
    Path,
}

/// Close an element whose geometry attributes are already in `out`.
fn finish_element(mut out: String, fill: &Fill, stroke: &Stroke) -> String {
    out.push_str(&fill.serialize());
    out.push_str(&stroke.serialize());
    out.push_str("/>\n");
    out
}

// ============================================================================
// Rectangle
// ============================================================================

/// An axis-aligned rectangle (`<rect>`)
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: Num,
    pub y: Num,
    pub width: Num,
    pub height: Num,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Rectangle {
    pub fn new(
        x: impl Into<Num>,
        y: impl Into<Num>,
        width: impl Into<Num>,
        height: impl Into<Num>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            fill: Fill::default(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Markup for Rectangle {
    fn serialize(&self) -> String {
        let out = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            self.x, self.y, self.width, self.height
        );
        finish_element(out, &self.fill, &self.stroke)
    }
}

// ============================================================================
// Circle
// ============================================================================

/// A circle (`<circle>`) given by center and radius
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: Num,
    pub cy: Num,
    pub r: Num,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Circle {
    pub fn new(cx: impl Into<Num>, cy: impl Into<Num>, r: impl Into<Num>) -> Self {
        Self {
            cx: cx.into(),
            cy: cy.into(),
            r: r.into(),
            fill: Fill::default(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Markup for Circle {
    fn serialize(&self) -> String {
        let out = format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            self.cx, self.cy, self.r
        );
        finish_element(out, &self.fill, &self.stroke)
    }
}

// ============================================================================
// Polyline
// ============================================================================

/// An open run of straight segments (`<polyline>`) through absolute points
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Polyline {
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            fill: Fill::default(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// The `points` attribute value: `x,y ` per point, trailing space kept.
    pub fn points_attr(&self) -> String {
        let mut out = String::new();
        for p in &self.points {
            out.push_str(&format!("{},{} ", p.x, p.y));
        }
        out
    }
}

impl Markup for Polyline {
    fn serialize(&self) -> String {
        let out = format!(r#"<polyline points="{}""#, self.points_attr());
        finish_element(out, &self.fill, &self.stroke)
    }
}

// ============================================================================
// Path
// ============================================================================

/// A free-form outline (`<path>`) described by path data
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub d: PathData,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Path {
    pub fn new(d: impl Into<PathData>) -> Self {
        Self {
            d: d.into(),
            fill: Fill::default(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Markup for Path {
    fn serialize(&self) -> String {
        let out = format!(r#"<path d="{}""#, self.d.serialize());
        finish_element(out, &self.fill, &self.stroke)
    }
}
