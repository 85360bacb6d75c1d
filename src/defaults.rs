//! Default document and group settings

use crate::types::{Num, Point, Size};

pub const DOCUMENT_SIZE: Size = Size {
    width: Num::Int(500),
    height: Num::Int(500),
};
pub const TITLE: &str = "SVG";
pub const DESCRIPTION: &str = "My SVG";

pub const GROUP_ROTATE: Num = Num::Int(0);
pub const GROUP_TRANSLATE: Point = Point::ORIGIN;
pub const GROUP_OPACITY: Num = Num::Float(1.0);

pub const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
pub const HEADER_COMMENT: &str = "<!-- basic SVG header -->";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
