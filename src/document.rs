//! The root `<svg>` scope and owner of the output stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::defaults;
use crate::errors::SvgError;
use crate::escape::escape_text;
use crate::log::{debug, warn};
use crate::sink::Sink;
use crate::types::{Num, Size};

const FOOTER: &str = "</svg>\n";

/// Header settings for a new document
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentOptions {
    pub size: Size,
    pub title: String,
    pub description: String,
    /// Escape markup characters in the title and description.
    ///
    /// Off by default, in which case both are written verbatim and the
    /// caller is responsible for producing XML-safe text.
    pub escape_text: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            size: defaults::DOCUMENT_SIZE,
            title: defaults::TITLE.to_string(),
            description: defaults::DESCRIPTION.to_string(),
            escape_text: false,
        }
    }
}

impl DocumentOptions {
    pub fn size(mut self, width: impl Into<Num>, height: impl Into<Num>) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Everything written before the first caller write: prolog, comment,
    /// `<svg>` start tag, title and description.
    pub fn header(&self) -> String {
        let (title, description) = if self.escape_text {
            (escape_text(&self.title), escape_text(&self.description))
        } else {
            (self.title.clone(), self.description.clone())
        };

        let mut out = String::new();
        out.push_str(defaults::XML_PROLOG);
        out.push('\n');
        out.push_str(defaults::HEADER_COMMENT);
        out.push('\n');
        out.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"{}\">\n",
            self.size.width,
            self.size.height,
            defaults::SVG_NS
        ));
        out.push_str(&format!("<title>{title}</title>\n"));
        out.push_str(&format!("<desc>{description}</desc>\n"));
        out
    }
}

/// An open SVG document
///
/// Creating one writes the header; [`finish`](Document::finish) or drop
/// writes `</svg>` and flushes. Because `finish` takes the document by
/// value, nothing can be written after the footer.
pub struct Document<W: Write> {
    /// `None` once the footer has been written
    out: Option<W>,
}

impl Document<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the header to it.
    pub fn create(path: impl AsRef<Path>, options: DocumentOptions) -> Result<Self, SvgError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SvgError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "created SVG file");
        Self::new(BufWriter::new(file), options)
    }
}

impl<W: Write> Document<W> {
    /// Write the header to `out` and take ownership of it.
    pub fn new(mut out: W, options: DocumentOptions) -> Result<Self, SvgError> {
        out.write_all(options.header().as_bytes())?;
        debug!(
            width = %options.size.width,
            height = %options.size.height,
            title = %options.title,
            "opened SVG document"
        );
        Ok(Self { out: Some(out) })
    }

    /// Write the footer, flush, and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W, SvgError> {
        let Some(mut out) = self.out.take() else {
            unreachable!("finish consumes the document, so the footer is pending");
        };
        out.write_all(FOOTER.as_bytes())?;
        out.flush()?;
        debug!("finished SVG document");
        Ok(out)
    }
}

impl<W: Write> Sink for Document<W> {
    fn write_str(&mut self, text: &str) -> Result<(), SvgError> {
        debug_assert!(self.out.is_some(), "write to a finished document");
        if let Some(out) = self.out.as_mut() {
            out.write_all(text.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for Document<W> {
    fn drop(&mut self) {
        let Some(mut out) = self.out.take() else {
            return;
        };
        let result = out.write_all(FOOTER.as_bytes()).and_then(|()| out.flush());
        if let Err(err) = result {
            warn!(%err, "failed to write SVG footer");
        }
    }
}

impl<W: Write> std::fmt::Debug for Document<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("open", &self.out.is_some())
            .finish()
    }
}
