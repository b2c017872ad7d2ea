//! String-based convenience API for quick experimentation.

use crate::error::Result;
use crate::term::Term;

pub use crate::derivative as diff;
pub use crate::derivative_nth as diff_n;

pub fn parse(input: &str) -> Result<Vec<Term>> {
    crate::parser::parse(input)
}

/// Parses and re-renders `input` in canonical form.
pub fn pretty(input: &str) -> Result<String> {
    Ok(crate::format::pretty(&parse(input)?))
}
