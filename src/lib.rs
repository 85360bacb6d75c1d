//! A small write-only SVG document writer.
//!
//! Callers build plain value objects ([`Fill`], [`Stroke`], [`Rectangle`],
//! [`Circle`], [`Polyline`], [`Path`]) and hand them to an open [`Document`]
//! or [`Group`]. Each value knows how to [`serialize`](Markup::serialize)
//! itself to an XML fragment; the scopes own the tag structure.
//!
//! ```no_run
//! use svgdoc::{Circle, Document, DocumentOptions, Fill, GroupTransform, Rectangle, Sink, Stroke};
//!
//! # fn main() -> Result<(), svgdoc::SvgError> {
//! let mut doc = Document::create("out.svg", DocumentOptions::default().size(600, 500))?;
//! doc.write(&Rectangle::new(0, 0, 20, 30).with_stroke(Stroke::with_width("black", 5)))?;
//!
//! let mut g = doc.group(GroupTransform::default().translate(250, 250).rotate(45))?;
//! g.write(&Circle::new(20, 40, 5).with_fill(Fill::with_opacity("red", 0.8)))?;
//! g.close()?;
//!
//! doc.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! Numbers keep the kind they were given in: `5` is written as `5` and
//! `5.0` as `5.0`.
//!
//! Scopes close themselves when dropped, so an early `?` return still
//! produces balanced `</g>` and `</svg>` tags. Call `close`/`finish`
//! explicitly to observe write errors on the way out.

// Must come before `shapes` so the dispatch trait is registered first.
mod markup;

pub mod defaults;
pub mod document;
pub mod errors;
pub mod escape;
pub mod group;
pub mod log;
pub mod path;
pub mod shapes;
pub mod sink;
pub mod style;
pub mod types;

pub use document::{Document, DocumentOptions};
pub use errors::SvgError;
pub use group::{Group, GroupTransform};
pub use markup::Markup;
pub use path::{PathCommand, PathData, PathToken};
pub use shapes::{Circle, Path, Polyline, Rectangle, Shape};
pub use sink::Sink;
pub use style::{Fill, Stroke};
pub use types::{Num, Point, Size};
