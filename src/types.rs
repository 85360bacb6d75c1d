//! Numeric and geometric primitives shared by shapes and scopes.
//!
//! Numbers remember whether they were given as integers or floats, so that
//! `5` prints as `5` and `1.0` prints as `1.0`. Nothing here validates
//! geometry; negative sizes and degenerate radii pass straight through to
//! the output.

use std::fmt;

use glam::DVec2;

/// A number as written into an attribute.
///
/// Integers print as plain digits. Floats print in their shortest
/// round-trip form and always keep a fractional part or an exponent
/// (`1.0`, `0.8`, `1e+16`, `1.5e-05`), so whole floats stay distinguishable
/// from integers in the output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub const ZERO: Num = Num::Int(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Num::Int(n) => n as f64,
            Num::Float(x) => x,
        }
    }
}

impl From<i32> for Num {
    fn from(n: i32) -> Self {
        Num::Int(i64::from(n))
    }
}

impl From<i64> for Num {
    fn from(n: i64) -> Self {
        Num::Int(n)
    }
}

impl From<u32> for Num {
    fn from(n: u32) -> Self {
        Num::Int(i64::from(n))
    }
}

impl From<f64> for Num {
    fn from(x: f64) -> Self {
        Num::Float(x)
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Num::Int(n) => write!(f, "{n}"),
            Num::Float(x) => write_float(f, x),
        }
    }
}

/// Decimal notation between 1e-4 and 1e16, exponent notation outside it.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    let abs = x.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&s),
        };
    }

    let s = x.to_string();
    if s.contains('.') {
        f.write_str(&s)
    } else {
        write!(f, "{s}.0")
    }
}

/// A point in SVG user space, used by polylines and translations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Num,
    pub y: Num,
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: Num::ZERO,
        y: Num::ZERO,
    };

    pub fn new(x: impl Into<Num>, y: impl Into<Num>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X: Into<Num>, Y: Into<Num>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Document dimensions, written to the `width`/`height` attributes of `<svg>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: Num,
    pub height: Num,
}

impl Size {
    pub fn new(width: impl Into<Num>, height: impl Into<Num>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl<W: Into<Num>, H: Into<Num>> From<(W, H)> for Size {
    fn from((width, height): (W, H)) -> Self {
        Self::new(width, height)
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
