//! `<g>` scopes
//!
//! A group writes its opening tag as soon as it is created, forwards every
//! write to its parent, and writes `</g>` exactly once when it is closed or
//! dropped. Holding the parent by `&mut` means the parent is unusable while
//! the group is open.

use crate::defaults;
use crate::errors::SvgError;
use crate::log::{debug, warn};
use crate::sink::Sink;
use crate::types::{Num, Point};

/// Transform and opacity applied to everything inside a group
///
/// This is only a description of the `<g>` attributes. The tag itself is
/// written by [`Group::open`], which also guarantees the matching `</g>`,
/// so a transform cannot be written on its own:
///
/// ```compile_fail
/// use svgdoc::{Document, DocumentOptions, GroupTransform, Sink};
///
/// let mut doc = Document::new(Vec::new(), DocumentOptions::default()).unwrap();
/// doc.write(&GroupTransform::default()).unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupTransform {
    /// Rotation in degrees, applied after the translation
    pub rotate: Num,
    pub translate: Point,
    pub opacity: Num,
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self {
            rotate: defaults::GROUP_ROTATE,
            translate: defaults::GROUP_TRANSLATE,
            opacity: defaults::GROUP_OPACITY,
        }
    }
}

impl GroupTransform {
    pub fn rotate(mut self, degrees: impl Into<Num>) -> Self {
        self.rotate = degrees.into();
        self
    }

    pub fn translate(mut self, x: impl Into<Num>, y: impl Into<Num>) -> Self {
        self.translate = Point::new(x, y);
        self
    }

    pub fn opacity(mut self, opacity: impl Into<Num>) -> Self {
        self.opacity = opacity.into();
        self
    }

    fn open_tag(&self) -> String {
        format!(
            "<g opacity=\"{}\" transform=\"translate({},{}) rotate({})\">\n",
            self.opacity, self.translate.x, self.translate.y, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScopeState {
    Open,
    Closed,
}

/// An open `<g>` element
pub struct Group<'a> {
    parent: &'a mut dyn Sink,
    state: ScopeState,
}

impl<'a> Group<'a> {
    /// Write the opening tag to `parent` and start forwarding to it.
    ///
    /// If the opening tag cannot be written no group exists, and no
    /// closing tag will follow.
    pub fn open(parent: &'a mut dyn Sink, transform: GroupTransform) -> Result<Self, SvgError> {
        parent.write_str(&transform.open_tag())?;
        debug!(
            rotate = %transform.rotate,
            tx = %transform.translate.x,
            ty = %transform.translate.y,
            opacity = %transform.opacity,
            "opened group"
        );
        Ok(Self {
            parent,
            state: ScopeState::Open,
        })
    }

    /// Write the closing tag, reporting any write error.
    pub fn close(mut self) -> Result<(), SvgError> {
        self.close_tag()
    }

    fn close_tag(&mut self) -> Result<(), SvgError> {
        if self.state == ScopeState::Closed {
            return Ok(());
        }
        self.state = ScopeState::Closed;
        debug!("closing group");
        self.parent.write_str("</g>\n")
    }
}

impl Sink for Group<'_> {
    fn write_str(&mut self, text: &str) -> Result<(), SvgError> {
        debug_assert_eq!(self.state, ScopeState::Open, "write to a closed group");
        self.parent.write_str(text)
    }
}

impl Drop for Group<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.close_tag() {
            warn!(%err, "failed to close group");
        }
    }
}

impl std::fmt::Debug for Group<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group").field("state", &self.state).finish_non_exhaustive()
    }
}
