//! Explicit string production for everything that ends up in the document.

use enum_dispatch::enum_dispatch;

/// A value that renders itself to an SVG/XML fragment.
///
/// Styles produce attribute fragments (with a leading space, or nothing at
/// all), shapes produce complete self-closed elements terminated by a
/// newline. Implementations are pure: the same fields always produce the
/// same text, and nothing here touches an output stream.
#[enum_dispatch]
pub trait Markup {
    /// Render this value as SVG markup.
    fn serialize(&self) -> String;
}

