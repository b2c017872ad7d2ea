//! Builds the signed term list from a token sequence.
//!
//! ```text
//! poly = sign? term (sign term)*
//! ```

use std::iter::Peekable;

use log::debug;

use crate::error::{PolyError, Result};
use crate::lexer::tokenize;
use crate::term::{Sign, Term, Token};

pub fn parse(input: &str) -> Result<Vec<Term>> {
    let tokens = tokenize(input).collect::<Result<Vec<_>>>()?;
    parse_tokens(tokens)
}

pub fn parse_tokens<I>(tokens: I) -> Result<Vec<Term>>
where
    I: IntoIterator<Item = Token>,
{
    let terms = Parser::new(tokens.into_iter()).poly()?;
    debug!("parsed {} terms", terms.len());
    Ok(terms)
}

struct Parser<I: Iterator<Item = Token>> {
    tokens: Peekable<I>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    fn new(tokens: I) -> Self {
        Parser {
            tokens: tokens.peekable(),
        }
    }

    fn poly(&mut self) -> Result<Vec<Term>> {
        let sign = self.operator().unwrap_or(Sign::Plus);
        let mut terms = vec![self.term()?.signed(sign)];
        while let Some(sign) = self.operator() {
            terms.push(self.term()?.signed(sign));
        }
        // Anything left over is a term that no operator introduced.
        if let Some(token) = self.tokens.next() {
            debug!("unexpected {} after last term", token.kind());
            return Err(PolyError::Syntax { expected: "Term" });
        }
        Ok(terms)
    }

    /// Consumes the next token if it is an operator.
    fn operator(&mut self) -> Option<Sign> {
        match self.tokens.peek() {
            Some(Token::Operator(sign)) => {
                let sign = *sign;
                self.tokens.next();
                Some(sign)
            }
            _ => None,
        }
    }

    fn term(&mut self) -> Result<Term> {
        match self.tokens.next() {
            Some(Token::Term(term)) => Ok(term),
            other => {
                debug!(
                    "expected Term, found {}",
                    other.map_or("end of input", |t| t.kind())
                );
                Err(PolyError::Syntax { expected: "Term" })
            }
        }
    }
}
