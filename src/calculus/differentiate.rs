use log::debug;

use crate::term::Term;

/// Applies the power rule to every term, keeping order and length.
///
/// Zero-coefficient results are kept; the formatter drops them.
pub fn differentiate(terms: &[Term]) -> Vec<Term> {
    let derived: Vec<Term> = terms.iter().map(power_rule).collect();
    debug!("differentiated {} terms", derived.len());
    derived
}

pub fn differentiate_n(terms: &[Term], order: usize) -> Vec<Term> {
    (0..order).fold(terms.to_vec(), |acc, _| differentiate(&acc))
}

fn power_rule(term: &Term) -> Term {
    Term::new(
        term.coefficient * term.exponent as f64,
        term.exponent.saturating_sub(1),
    )
}
