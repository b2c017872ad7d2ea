//! Symbolic differentiation of single-variable polynomials.
//!
//! Text is tokenized, parsed into signed terms, differentiated term by term
//! with the power rule and rendered back to canonical text:
//!
//! ```
//! assert_eq!(polydiff::derivative("2x^3+4x-5").unwrap(), "6x^2+4");
//! ```

pub mod calculus;
pub mod error;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod prelude;
pub mod term;

pub use calculus::{differentiate, differentiate_n};
pub use error::{PolyError, Result};
pub use format::pretty;
pub use lexer::{Tokenizer, tokenize};
pub use parser::{parse, parse_tokens};
pub use term::{Sign, Term, Token};

/// Differentiates polynomial text with respect to `x`.
pub fn derivative(input: &str) -> Result<String> {
    derivative_nth(input, 1)
}

/// Differentiates polynomial text `order` times; order zero reformats the input.
pub fn derivative_nth(input: &str, order: usize) -> Result<String> {
    let terms = parse(input)?;
    Ok(pretty(&differentiate_n(&terms, order)))
}
