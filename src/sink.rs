//! The write capability shared by documents and groups.

use crate::errors::SvgError;
use crate::group::{Group, GroupTransform};
use crate::markup::Markup;

/// Something that accepts SVG text, in order.
///
/// Implemented by [`Document`](crate::Document), which appends to its
/// output stream, and by [`Group`], which forwards to its parent. Text is
/// written verbatim; no escaping or reordering happens on the way.
pub trait Sink {
    /// Append raw text.
    fn write_str(&mut self, text: &str) -> Result<(), SvgError>;

    /// Serialize a value and append the result.
    fn write(&mut self, item: &dyn Markup) -> Result<(), SvgError> {
        self.write_str(&item.serialize())
    }

    /// Open a `<g>` scope nested in this one.
    ///
    /// The returned group borrows `self` until it is closed or dropped, so
    /// inner scopes always close before outer ones.
    fn group(&mut self, transform: GroupTransform) -> Result<Group<'_>, SvgError>
    where
        Self: Sized,
    {
        Group::open(self, transform)
    }
}
