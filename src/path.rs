//! Path data (`d` attribute) tokens and a small builder.
//!
//! Path data is a flat run of command letters and numbers. Upper-case
//! letters take absolute coordinates, lower-case letters are relative to
//! the current point:
//!
//! - `M`/`m` `x y`: move without drawing
//! - `L`/`l` `x y`: straight line
//! - `C`/`c` `x1 y1 x2 y2 x y`: cubic bezier with two control points
//! - `S`/`s` `x2 y2 x y`: smooth cubic, first control point reflected
//! - `Z`/`z`: close the current subpath
//!
//! Operand counts are never checked. The builder methods append tokens in
//! call order and nothing else.

use std::fmt;
use std::str::FromStr;

use crate::errors::SvgError;
use crate::markup::Markup;
use crate::types::{Num, Point};

/// The supported path command letters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathCommand {
    MoveTo,
    MoveBy,
    LineTo,
    LineBy,
    CurveTo,
    CurveBy,
    SmoothTo,
    SmoothBy,
    Close,
    CloseRel,
}

impl PathCommand {
    pub fn letter(self) -> char {
        match self {
            PathCommand::MoveTo => 'M',
            PathCommand::MoveBy => 'm',
            PathCommand::LineTo => 'L',
            PathCommand::LineBy => 'l',
            PathCommand::CurveTo => 'C',
            PathCommand::CurveBy => 'c',
            PathCommand::SmoothTo => 'S',
            PathCommand::SmoothBy => 's',
            PathCommand::Close => 'Z',
            PathCommand::CloseRel => 'z',
        }
    }

    /// Whether the operands are relative to the current point.
    pub fn is_relative(self) -> bool {
        self.letter().is_ascii_lowercase()
    }
}

impl TryFrom<char> for PathCommand {
    type Error = SvgError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'M' => PathCommand::MoveTo,
            'm' => PathCommand::MoveBy,
            'L' => PathCommand::LineTo,
            'l' => PathCommand::LineBy,
            'C' => PathCommand::CurveTo,
            'c' => PathCommand::CurveBy,
            'S' => PathCommand::SmoothTo,
            's' => PathCommand::SmoothBy,
            'Z' => PathCommand::Close,
            'z' => PathCommand::CloseRel,
            other => {
                return Err(SvgError::UnknownPathCommand {
                    command: other.to_string(),
                });
            }
        })
    }
}

impl FromStr for PathCommand {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PathCommand::try_from(c),
            _ => Err(SvgError::UnknownPathCommand {
                command: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One entry of path data: a command letter or a numeric operand
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathToken {
    Command(PathCommand),
    Number(Num),
}

impl From<PathCommand> for PathToken {
    fn from(cmd: PathCommand) -> Self {
        PathToken::Command(cmd)
    }
}

impl From<Num> for PathToken {
    fn from(n: Num) -> Self {
        PathToken::Number(n)
    }
}

impl From<f64> for PathToken {
    fn from(n: f64) -> Self {
        PathToken::Number(n.into())
    }
}

impl From<i32> for PathToken {
    fn from(n: i32) -> Self {
        PathToken::Number(n.into())
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathToken::Command(cmd) => write!(f, "{cmd}"),
            PathToken::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Markup for PathToken {
    fn serialize(&self) -> String {
        self.to_string()
    }
}

/// Ordered path tokens, rendered as the value of a `d` attribute
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    tokens: Vec<PathToken>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a raw token.
    pub fn push(&mut self, token: impl Into<PathToken>) {
        self.tokens.push(token.into());
    }

    fn command<const N: usize>(mut self, cmd: PathCommand, operands: [Num; N]) -> Self {
        self.tokens.push(PathToken::Command(cmd));
        self.tokens.extend(operands.map(PathToken::Number));
        self
    }

    pub fn move_to(self, x: impl Into<Num>, y: impl Into<Num>) -> Self {
        self.command(PathCommand::MoveTo, [x.into(), y.into()])
    }

    pub fn move_by(self, dx: impl Into<Num>, dy: impl Into<Num>) -> Self {
        self.command(PathCommand::MoveBy, [dx.into(), dy.into()])
    }

    pub fn line_to(self, x: impl Into<Num>, y: impl Into<Num>) -> Self {
        self.command(PathCommand::LineTo, [x.into(), y.into()])
    }

    pub fn line_by(self, dx: impl Into<Num>, dy: impl Into<Num>) -> Self {
        self.command(PathCommand::LineBy, [dx.into(), dy.into()])
    }

    /// Cubic bezier to `end` with control points `c1` and `c2`.
    pub fn curve_to(self, c1: impl Into<Point>, c2: impl Into<Point>, end: impl Into<Point>) -> Self {
        let (c1, c2, end) = (c1.into(), c2.into(), end.into());
        self.command(PathCommand::CurveTo, [c1.x, c1.y, c2.x, c2.y, end.x, end.y])
    }

    pub fn curve_by(self, c1: impl Into<Point>, c2: impl Into<Point>, end: impl Into<Point>) -> Self {
        let (c1, c2, end) = (c1.into(), c2.into(), end.into());
        self.command(PathCommand::CurveBy, [c1.x, c1.y, c2.x, c2.y, end.x, end.y])
    }

    /// Smooth cubic to `end`; the first control point is reflected.
    pub fn smooth_to(self, c2: impl Into<Point>, end: impl Into<Point>) -> Self {
        let (c2, end) = (c2.into(), end.into());
        self.command(PathCommand::SmoothTo, [c2.x, c2.y, end.x, end.y])
    }

    pub fn smooth_by(self, c2: impl Into<Point>, end: impl Into<Point>) -> Self {
        let (c2, end) = (c2.into(), end.into());
        self.command(PathCommand::SmoothBy, [c2.x, c2.y, end.x, end.y])
    }

    /// Close the subpath with the lower-case `z` letter.
    pub fn close(self) -> Self {
        self.command(PathCommand::CloseRel, [])
    }
}

impl From<Vec<PathToken>> for PathData {
    fn from(tokens: Vec<PathToken>) -> Self {
        Self { tokens }
    }
}

impl<T: Into<PathToken>> FromIterator<T> for PathData {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<PathToken>> Extend<T> for PathData {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}

impl Markup for PathData {
    /// Every token followed by a single space, including the last one.
    fn serialize(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.to_string());
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_char() {
        for c in "MmLlCcSsZz".chars() {
            let cmd = PathCommand::try_from(c).unwrap();
            assert_eq!(cmd.letter(), c);
        }
    }

    #[test]
    fn unknown_letter_is_rejected() {
        let err = PathCommand::try_from('Q').unwrap_err();
        assert!(matches!(err, SvgError::UnknownPathCommand { ref command } if command == "Q"));
        assert!("LL".parse::<PathCommand>().is_err());
        assert!("".parse::<PathCommand>().is_err());
    }

    #[test]
    fn relative_commands_are_lower_case() {
        assert!(PathCommand::LineBy.is_relative());
        assert!(!PathCommand::LineTo.is_relative());
        assert!(PathCommand::CloseRel.is_relative());
    }

    #[test]
    fn every_token_gets_a_trailing_space() {
        let d = PathData::new().move_to(0, 50).line_by(20, 30).close();
        assert_eq!(d.serialize(), "M 0 50 l 20 30 z ");
    }

    #[test]
    fn collect_from_mixed_tokens() {
        let d: PathData = [
            PathToken::from(PathCommand::MoveTo),
            PathToken::from(60),
            PathToken::from(50.5),
            PathToken::from(PathCommand::Close),
        ]
        .into_iter()
        .collect();
        assert_eq!(d.serialize(), "M 60 50.5 Z ");
    }

    #[test]
    fn operand_arity_is_not_checked() {
        let mut d = PathData::new();
        d.push(PathCommand::CurveTo);
        d.push(1);
        assert_eq!(d.serialize(), "C 1 ");
    }

    #[test]
    fn empty_path_serializes_to_nothing() {
        assert!(PathData::new().is_empty());
        assert_eq!(PathData::new().serialize(), "");
    }

    #[test]
    fn curves_append_all_operands() {
        let d = PathData::new()
            .curve_to((1, 2), (3, 4), (5, 6))
            .smooth_by((-1, -2), (-3.5, -4));
        assert_eq!(d.serialize(), "C 1 2 3 4 5 6 s -1 -2 -3.5 -4 ");
    }

    #[test]
    fn float_operands_keep_their_fraction() {
        let d = PathData::new().move_to(1.0, 0.25).line_by(-2.0, 3);
        assert_eq!(d.serialize(), "M 1.0 0.25 l -2.0 3 ");
    }
}
