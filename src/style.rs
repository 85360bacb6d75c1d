//! Fill and stroke presentation attributes.
//!
//! Color strings are written verbatim: `red`, `#0af`, `rgb(1,2,3)` and
//! anything else the caller hands over. SVG viewers are the judge of what
//! is a valid color.

use crate::markup::Markup;
use crate::types::Num;

/// Interior paint of a shape.
///
/// Without a color the shape is explicitly unfilled (`fill="none"`), since
/// SVG would otherwise paint it black. The opacity only matters once a
/// color is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fill {
    pub color: Option<String>,
    pub opacity: Option<Num>,
}

impl Fill {
    /// No fill at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Solid fill with the given color.
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            opacity: None,
        }
    }

    /// Fill with a color and an opacity in `[0, 1]`.
    pub fn with_opacity(color: impl Into<String>, opacity: impl Into<Num>) -> Self {
        Self {
            color: Some(color.into()),
            opacity: Some(opacity.into()),
        }
    }
}

impl Markup for Fill {
    fn serialize(&self) -> String {
        match &self.color {
            None => r#" fill="none""#.to_string(),
            Some(color) => {
                let mut out = format!(r#" fill="{color}""#);
                if let Some(opacity) = self.opacity {
                    out.push_str(&format!(r#" fill-opacity="{opacity}""#));
                }
                out
            }
        }
    }
}

/// Outline paint of a shape.
///
/// Unlike [`Fill`], a stroke without a color produces no attribute at all
/// and leaves the SVG default (no stroke) in effect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    pub color: Option<String>,
    pub width: Option<Num>,
}

impl Stroke {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            width: None,
        }
    }

    pub fn with_width(color: impl Into<String>, width: impl Into<Num>) -> Self {
        Self {
            color: Some(color.into()),
            width: Some(width.into()),
        }
    }
}

impl Markup for Stroke {
    fn serialize(&self) -> String {
        let Some(color) = &self.color else {
            return String::new();
        };
        let mut out = format!(r#" stroke="{color}""#);
        if let Some(width) = self.width {
            out.push_str(&format!(r#" stroke-width="{width}""#));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_without_color_is_none() {
        assert_eq!(Fill::none().serialize(), r#" fill="none""#);
    }

    #[test]
    fn fill_without_color_ignores_opacity() {
        let fill = Fill {
            color: None,
            opacity: Some(Num::Float(0.5)),
        };
        assert_eq!(fill.serialize(), r#" fill="none""#);
    }

    #[test]
    fn fill_color_only() {
        assert_eq!(Fill::color("red").serialize(), r#" fill="red""#);
    }

    #[test]
    fn fill_color_and_opacity() {
        assert_eq!(
            Fill::with_opacity("red", 0.8).serialize(),
            r#" fill="red" fill-opacity="0.8""#
        );
    }

    #[test]
    fn fill_color_passes_through_verbatim() {
        assert_eq!(Fill::color("not a color").serialize(), r#" fill="not a color""#);
    }

    #[test]
    fn stroke_without_color_is_empty() {
        assert_eq!(Stroke::none().serialize(), "");
        let stroke = Stroke {
            color: None,
            width: Some(Num::Int(3)),
        };
        assert_eq!(stroke.serialize(), "");
    }

    #[test]
    fn stroke_color_only() {
        assert_eq!(Stroke::color("#00f").serialize(), r##" stroke="#00f""##);
    }

    #[test]
    fn stroke_color_and_width() {
        assert_eq!(
            Stroke::with_width("black", 5).serialize(),
            r#" stroke="black" stroke-width="5""#
        );
    }

    #[test]
    fn stroke_float_width_keeps_fraction() {
        assert_eq!(
            Stroke::with_width("black", 5.0).serialize(),
            r#" stroke="black" stroke-width="5.0""#
        );
    }

    #[test]
    fn stroke_fractional_width() {
        assert_eq!(
            Stroke::with_width("black", 0.5).serialize(),
            r#" stroke="black" stroke-width="0.5""#
        );
    }
}
