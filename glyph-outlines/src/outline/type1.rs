//! Type 1 charstring interpretation.

use alloc::{string::String, vec::Vec};
use core::fmt;

use raw::{
    tables::postscript::{standard_encoding_name, Operator, Stack, Token},
    types::Point,
};

use super::{DrawError, Path, PathSegment, COMPOSITE_NESTING_LIMIT};

/// Source of charstrings for the components of `seac` composites.
///
/// Components are requested by their glyph name in the Standard Encoding.
pub trait CharstringLookup {
    /// Returns the tokens of the named glyph, if present.
    fn charstring(&self, name: &str) -> Option<&[Token]>;
}

impl<T: CharstringLookup + ?Sized> CharstringLookup for &T {
    fn charstring(&self, name: &str) -> Option<&[Token]> {
        (*self).charstring(name)
    }
}

impl CharstringLookup for alloc::collections::BTreeMap<String, Vec<Token>> {
    fn charstring(&self, name: &str) -> Option<&[Token]> {
        self.get(name).map(Vec::as_slice)
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> CharstringLookup for std::collections::HashMap<String, Vec<Token>, S> {
    fn charstring(&self, name: &str) -> Option<&[Token]> {
        self.get(name).map(Vec::as_slice)
    }
}

/// Lookup for glyphs evaluated without access to a font.
///
/// Every `seac` component is reported as missing.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoComposites;

impl CharstringLookup for NoComposites {
    fn charstring(&self, _name: &str) -> Option<&[Token]> {
        None
    }
}

/// Problems that were skipped over while evaluating a charstring.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DecodeWarning {
    /// The `seac` base character code has no Standard Encoding name.
    UnknownBaseCode(i32),
    /// The `seac` accent character code has no Standard Encoding name.
    UnknownAccentCode(i32),
    /// The named `seac` base glyph was not found.
    MissingBase(&'static str),
    /// The named `seac` accent glyph was not found.
    MissingAccent(&'static str),
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownBaseCode(code) => {
                write!(f, "seac base code {code} is not in the standard encoding")
            }
            Self::UnknownAccentCode(code) => {
                write!(f, "seac accent code {code} is not in the standard encoding")
            }
            Self::MissingBase(name) => write!(f, "seac base glyph '{name}' was not found"),
            Self::MissingAccent(name) => write!(f, "seac accent glyph '{name}' was not found"),
        }
    }
}

/// The result of evaluating a Type 1 charstring.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Type1Outline {
    pub path: Path,
    /// Advance width in font design units.
    pub width: i32,
    pub left_side_bearing: Point<i32>,
    /// Composite components that were omitted from the path.
    pub warnings: Vec<DecodeWarning>,
}

/// Evaluates a tokenized charstring.
///
/// Subroutine calls are expected to have been expanded in `tokens`; the
/// subroutine and hint operators are accepted but have no effect, as do
/// unknown opcodes. Components of `seac` composites are resolved by name
/// through `glyphs`. A missing component is recorded as a warning and left
/// out of the path.
///
/// Fails if an operator has fewer operands than it requires, if more
/// operands are pushed than the stack holds, or if composite components
/// nest too deeply or refer back to themselves.
pub fn evaluate(
    tokens: &[Token],
    glyphs: &impl CharstringLookup,
) -> Result<Type1Outline, DrawError> {
    let mut chain = Vec::new();
    Evaluator::new(glyphs).evaluate(tokens, &mut chain)
}

/// Transient state for evaluating a single charstring.
///
/// Composite components are evaluated with a fresh evaluator.
struct Evaluator<'a, L: ?Sized> {
    glyphs: &'a L,
    stack: Stack,
    path: Path,
    lsb: Point<i32>,
    width: i32,
    /// Origin for the next relative moveto, set by closepath.
    reference_point: Option<Point<i32>>,
    is_open: bool,
    warnings: Vec<DecodeWarning>,
}

impl<'a, L> Evaluator<'a, L>
where
    L: CharstringLookup + ?Sized,
{
    fn new(glyphs: &'a L) -> Self {
        Self {
            glyphs,
            stack: Stack::new(),
            path: Path::new(),
            lsb: Point::default(),
            width: 0,
            reference_point: None,
            is_open: false,
            warnings: Vec::new(),
        }
    }

    /// `chain` holds the names of the composite components currently being
    /// evaluated, outermost first.
    fn evaluate(
        mut self,
        tokens: &[Token],
        chain: &mut Vec<&'static str>,
    ) -> Result<Type1Outline, DrawError> {
        log::trace!("evaluating charstring with {} tokens", tokens.len());
        for token in tokens {
            match *token {
                Token::Operand(value) => self.stack.push(value)?,
                Token::Operator(operator) => {
                    self.evaluate_operator(operator, chain)?;
                    self.stack.clear();
                }
                Token::Unknown(opcode) => {
                    log::debug!("skipping unknown charstring opcode {opcode:#x}");
                    self.stack.clear();
                }
            }
        }
        Ok(Type1Outline {
            path: self.path,
            width: self.width,
            left_side_bearing: self.lsb,
            warnings: self.warnings,
        })
    }

    fn evaluate_operator(
        &mut self,
        operator: Operator,
        chain: &mut Vec<&'static str>,
    ) -> Result<(), DrawError> {
        use Operator::*;
        match operator {
            RMoveTo => {
                let [dx, dy] = self.stack.get_array()?;
                self.move_by(dx, dy);
            }
            HMoveTo => {
                let [dx] = self.stack.get_array()?;
                self.move_by(dx, 0);
            }
            VMoveTo => {
                let [dy] = self.stack.get_array()?;
                self.move_by(0, dy);
            }
            RLineTo => {
                let [dx, dy] = self.stack.get_array()?;
                self.line_by(dx, dy);
            }
            HLineTo => {
                let [dx] = self.stack.get_array()?;
                self.line_by(dx, 0);
            }
            VLineTo => {
                let [dy] = self.stack.get_array()?;
                self.line_by(0, dy);
            }
            RrCurveTo => {
                let [dx1, dy1, dx2, dy2, dx3, dy3] = self.stack.get_array()?;
                self.curve_by([dx1, dy1, dx2, dy2, dx3, dy3]);
            }
            HvCurveTo => {
                let [dx1, dx2, dy2, dy3] = self.stack.get_array()?;
                self.curve_by([dx1, 0, dx2, dy2, 0, dy3]);
            }
            VhCurveTo => {
                let [dy1, dx2, dy2, dx3] = self.stack.get_array()?;
                self.curve_by([0, dy1, dx2, dy2, dx3, 0]);
            }
            ClosePath => {
                self.reference_point = self.path.current_point();
                if self.is_open {
                    self.path.close();
                    self.is_open = false;
                }
            }
            Hsbw => {
                let [sbx, wx] = self.stack.get_array()?;
                self.lsb = Point::new(sbx, 0);
                self.width = wx;
            }
            Sbw => {
                // The vertical advance is not used.
                let [sbx, sby, wx, _wy] = self.stack.get_array()?;
                self.lsb = Point::new(sbx, sby);
                self.width = wx;
            }
            Seac => {
                let [_asb, adx, ady, bchar, achar] = self.stack.get_array()?;
                self.seac(adx, ady, bchar, achar, chain)?;
            }
            HStem | VStem | HStem3 | VStem3 | DotSection | EndChar => {}
            CallSubr | Return | CallOtherSubr | Pop | Div | SetCurrentPoint => {
                log::debug!(
                    "ignoring charstring operator {operator} with {} operands",
                    self.stack.len()
                );
            }
        }
        Ok(())
    }

    /// Current pen position, falling back to the side bearing before
    /// anything has been drawn.
    fn current_point(&self) -> Point<i32> {
        self.path.current_point().unwrap_or(self.lsb)
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        let origin = self
            .reference_point
            .take()
            .unwrap_or_else(|| self.current_point());
        let point = offset(origin, dx, dy);
        // A moveto directly following another replaces it.
        if let Some(PathSegment::MoveTo(_)) = self.path.segments().last() {
            self.path.pop();
        }
        self.path.move_to(point);
        self.is_open = true;
    }

    /// Starts a contour at the current point if a drawing operator arrives
    /// without a preceding moveto.
    fn ensure_open(&mut self) -> Point<i32> {
        let current = self.current_point();
        if !self.is_open {
            self.path.move_to(current);
            self.is_open = true;
        }
        current
    }

    fn line_by(&mut self, dx: i32, dy: i32) {
        let current = self.ensure_open();
        self.path.line_to(offset(current, dx, dy));
    }

    fn curve_by(&mut self, [dx1, dy1, dx2, dy2, dx3, dy3]: [i32; 6]) {
        let current = self.ensure_open();
        let control0 = offset(current, dx1, dy1);
        let control1 = offset(control0, dx2, dy2);
        let end = offset(control1, dx3, dy3);
        self.path.curve_to(control0, control1, end);
    }

    /// Appends the base glyph and the accent, moved by the side bearing
    /// plus `(adx, ady)`.
    fn seac(
        &mut self,
        adx: i32,
        ady: i32,
        bchar: i32,
        achar: i32,
        chain: &mut Vec<&'static str>,
    ) -> Result<(), DrawError> {
        match standard_encoding_name(bchar) {
            Some(name) => match self.evaluate_component(name, chain)? {
                Some(base) => self.path.append(&base),
                None => self.warn(DecodeWarning::MissingBase(name)),
            },
            None => self.warn(DecodeWarning::UnknownBaseCode(bchar)),
        }
        match standard_encoding_name(achar) {
            Some(name) => match self.evaluate_component(name, chain)? {
                Some(accent) => {
                    let offset = offset(self.lsb, adx, ady);
                    self.path.append(&accent.translated(offset));
                }
                None => self.warn(DecodeWarning::MissingAccent(name)),
            },
            None => self.warn(DecodeWarning::UnknownAccentCode(achar)),
        }
        self.is_open = false;
        Ok(())
    }

    /// Evaluates a composite component, returning `None` if the lookup
    /// does not contain it.
    fn evaluate_component(
        &mut self,
        name: &'static str,
        chain: &mut Vec<&'static str>,
    ) -> Result<Option<Path>, DrawError> {
        if chain.contains(&name) {
            return Err(DrawError::CompositeCycle(name.into()));
        }
        if chain.len() >= COMPOSITE_NESTING_LIMIT {
            return Err(DrawError::RecursionLimitExceeded);
        }
        let Some(tokens) = self.glyphs.charstring(name) else {
            return Ok(None);
        };
        chain.push(name);
        let result = Evaluator::new(self.glyphs).evaluate(tokens, chain);
        chain.pop();
        let mut component = result?;
        self.warnings.append(&mut component.warnings);
        Ok(Some(component.path))
    }

    fn warn(&mut self, warning: DecodeWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}

fn offset(point: Point<i32>, dx: i32, dy: i32) -> Point<i32> {
    Point::new(point.x.wrapping_add(dx), point.y.wrapping_add(dy))
}
