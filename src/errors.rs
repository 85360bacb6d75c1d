//! Error types with diagnostic codes using miette
//!
//! Only resource failures and unknown path letters are reported. Geometry,
//! colors and text content pass through unchecked.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by documents, groups and path parsing
#[derive(Error, Diagnostic, Debug)]
pub enum SvgError {
    #[error("cannot create SVG file {}", .path.display())]
    #[diagnostic(
        code(svgdoc::io::create),
        help("check that the parent directory exists and is writable")
    )]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write SVG output")]
    #[diagnostic(code(svgdoc::io::write))]
    Write(#[from] io::Error),

    #[error("unknown path command: {command:?}")]
    #[diagnostic(
        code(svgdoc::path::unknown_command),
        help("supported commands are M m L l C c S s Z z")
    )]
    UnknownPathCommand { command: String },
}
