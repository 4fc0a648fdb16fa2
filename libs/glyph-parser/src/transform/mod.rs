//! # Transform Lists
//!
//! SVG transform lists to a [`DAffine2`]:
//!
//! ```text
//! list     := (function (comma-wsp function)*)?
//! function := name wsp* "(" wsp* number (comma-wsp number)* wsp* ")"
//! name     := matrix | translate | scale | rotate | skewX | skewY
//! ```
//!
//! Functions compose left to right, so the rightmost one is applied to a
//! point first.

use crate::error::{ParseError, Result};
use extrude_mesh::ops::transform::from_coefficients;
use glam::{DAffine2, DVec2};

// =============================================================================
// CURSOR
// =============================================================================

/// Byte cursor over a transform list.
struct Cursor<'a> {
    source: &'a str,
    byte: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    fn position(&self) -> usize {
        self.byte
    }

    fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.byte;
        while self.peek().is_some_and(&mut predicate) {
            self.advance();
        }
        &self.source[start..self.byte]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Skips whitespace with at most one comma in it.
    fn skip_comma_wsp(&mut self) {
        self.skip_whitespace();
        if self.eat(',') {
            self.skip_whitespace();
        }
    }

    fn identifier(&mut self) -> &'a str {
        self.eat_while(|c| c.is_ascii_alphabetic())
    }

    /// Scans `[sign] digits [. digits] [(e|E) [sign] digits]`.
    fn number(&mut self) -> Result<f64> {
        let start = self.byte;
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        let int = self.eat_while(|c| c.is_ascii_digit()).len();
        let mut frac = 0;
        if self.eat('.') {
            frac = self.eat_while(|c| c.is_ascii_digit()).len();
        }
        if int + frac == 0 {
            return Err(ParseError::syntax(start, "expected a number"));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let mark = self.byte;
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if self.eat_while(|c| c.is_ascii_digit()).is_empty() {
                self.byte = mark;
            }
        }

        self.source[start..self.byte]
            .parse()
            .map_err(|_| ParseError::syntax(start, "malformed number"))
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Parses a transform list; an empty list is the identity.
///
/// ## Parameters
///
/// - `text`: e.g. `"translate(10, 20) rotate(45) scale(2 -2)"`
///
/// ## Example
///
/// ```rust
/// use glyph_parser::parse_transform;
/// use glam::DVec2;
///
/// let t = parse_transform("translate(10 20) scale(2)").unwrap();
/// assert_eq!(t.transform_point2(DVec2::new(1.0, 1.0)), DVec2::new(12.0, 22.0));
/// ```
pub fn parse_transform(text: &str) -> Result<DAffine2> {
    let mut cursor = Cursor::new(text);
    let mut transform = DAffine2::IDENTITY;

    cursor.skip_whitespace();
    while !cursor.is_eof() {
        let start = cursor.position();
        let name = cursor.identifier();
        if name.is_empty() {
            return Err(ParseError::syntax(start, "expected a transform function"));
        }

        cursor.skip_whitespace();
        if !cursor.eat('(') {
            return Err(ParseError::syntax(
                cursor.position(),
                format!("expected `(` after {name}"),
            ));
        }
        let args = arguments(&mut cursor)?;
        transform = transform * function(name, &args, start)?;

        cursor.skip_comma_wsp();
    }

    Ok(transform)
}

/// Reads numbers up to and including the closing parenthesis.
fn arguments(cursor: &mut Cursor<'_>) -> Result<Vec<f64>> {
    let mut args = Vec::new();
    cursor.skip_whitespace();
    while !cursor.eat(')') {
        if cursor.is_eof() {
            return Err(ParseError::syntax(cursor.position(), "missing `)`"));
        }
        args.push(cursor.number()?);
        cursor.skip_comma_wsp();
    }
    Ok(args)
}

fn function(name: &str, args: &[f64], offset: usize) -> Result<DAffine2> {
    let arity = |expected: &'static str| ParseError::TransformArity {
        name: name.to_string(),
        expected,
        found: args.len(),
    };

    let transform = match (name, args) {
        ("matrix", &[a, b, c, d, e, f]) => from_coefficients([a, b, c, d, e, f]),
        ("matrix", _) => return Err(arity("6")),

        ("translate", &[tx]) => DAffine2::from_translation(DVec2::new(tx, 0.0)),
        ("translate", &[tx, ty]) => DAffine2::from_translation(DVec2::new(tx, ty)),
        ("translate", _) => return Err(arity("1 or 2")),

        ("scale", &[s]) => DAffine2::from_scale(DVec2::splat(s)),
        ("scale", &[sx, sy]) => DAffine2::from_scale(DVec2::new(sx, sy)),
        ("scale", _) => return Err(arity("1 or 2")),

        ("rotate", &[angle]) => DAffine2::from_angle(angle.to_radians()),
        ("rotate", &[angle, cx, cy]) => {
            let centre = DVec2::new(cx, cy);
            DAffine2::from_translation(centre)
                * DAffine2::from_angle(angle.to_radians())
                * DAffine2::from_translation(-centre)
        }
        ("rotate", _) => return Err(arity("1 or 3")),

        ("skewX", &[angle]) => {
            DAffine2::from_cols_array(&[1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0])
        }
        ("skewY", &[angle]) => {
            DAffine2::from_cols_array(&[1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0])
        }
        ("skewX" | "skewY", _) => return Err(arity("1")),

        _ => {
            return Err(ParseError::syntax(
                offset,
                format!("unknown transform function `{name}`"),
            ))
        }
    };
    Ok(transform)
}
