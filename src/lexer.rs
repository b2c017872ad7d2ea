//! Lexical analysis of polynomial text.
//!
//! ```text
//! term
//!   = coefficient "x^" exponent
//!   | coefficient "x"
//!   | coefficient
//!   | "x^" exponent
//!   | "x"
//! coefficient
//!   = digit+ ("." digit+)?
//! exponent
//!   = "-"? digit+
//! ```

use std::iter::FusedIterator;

use log::trace;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{map, map_opt, map_res, opt, recognize, verify};
use nom::error::VerboseError;
use nom::sequence::{pair, preceded, terminated};

use crate::error::{PolyError, Result};
use crate::term::{Sign, Term, Token};

/// Lazily splits polynomial text into tokens.
///
/// Stops after the first malformed position; a failed scan is never resumed.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        let (rest, skipped) = match spaces(rest) {
            Ok((rest, skipped)) => (rest, skipped.len()),
            Err(_) => (rest, 0),
        };
        self.pos += skipped;

        match token(rest) {
            Ok((remaining, tok)) => {
                trace!("token {tok:?} at {}", self.pos);
                self.pos += rest.len() - remaining.len();
                Some(Ok(tok))
            }
            Err(_) => {
                self.failed = true;
                trace!("no lexical form matches at {}", self.pos);
                Some(Err(PolyError::Malformed { at: self.pos }))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

fn spaces(input: &str) -> ParseResult<'_, &str> {
    take_while(|c: char| c == ' ')(input)
}

// Order matters: the longest form sharing a prefix must be tried first.
fn token(input: &str) -> ParseResult<'_, Token> {
    alt((
        map(
            pair(coefficient, preceded(tag("x^"), exponent)),
            |(c, e)| Token::Term(Term::new(c, e)),
        ),
        map(terminated(coefficient, char('x')), |c| {
            Token::Term(Term::new(c, 1))
        }),
        map(coefficient, |c| Token::Term(Term::constant(c))),
        map(preceded(tag("x^"), exponent), |e| {
            Token::Term(Term::new(1.0, e))
        }),
        map(char('x'), |_| Token::Term(Term::new(1.0, 1))),
        map_opt(one_of("+-"), |c| Sign::from_char(c).map(Token::Operator)),
    ))(input)
}

// Literals beyond f64 range would parse to infinity.
fn coefficient(input: &str) -> ParseResult<'_, f64> {
    verify(
        map_res(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            |s: &str| s.parse::<f64>(),
        ),
        |c: &f64| c.is_finite(),
    )(input)
}

fn exponent(input: &str) -> ParseResult<'_, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}
