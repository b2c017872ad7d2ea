use crate::term::Term;

/// Renders terms as canonical polynomial text, skipping zero coefficients.
///
/// An empty result is rendered as `"0"`.
pub fn pretty(terms: &[Term]) -> String {
    let mut out = String::new();
    for term in terms.iter().filter(|t| !t.is_zero()) {
        if term.coefficient > 0.0 {
            out.push('+');
        }
        out.push_str(&term.to_string());
    }

    match out.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None if out.is_empty() => "0".to_string(),
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_all_zero_render_zero() {
        assert_eq!(pretty(&[]), "0");
        assert_eq!(pretty(&[Term::new(0.0, -1), Term::new(-0.0, 3)]), "0");
    }

    #[test]
    fn signs_between_terms() {
        let terms = [Term::new(6.0, 2), Term::new(-4.0, 0), Term::new(1.5, 1)];
        assert_eq!(pretty(&terms), "6x^2-4+1.5x");
    }

    #[test]
    fn plus_only_before_positive_coefficients() {
        let terms = [Term::new(2.0, 1), Term::new(f64::NAN, 0)];
        assert_eq!(pretty(&terms), "2xNaN");
    }

    #[test]
    fn leading_negative_is_kept() {
        assert_eq!(pretty(&[Term::new(-2.0, 1), Term::new(3.0, 0)]), "-2x+3");
    }

    #[test]
    fn unit_coefficient_is_printed() {
        assert_eq!(pretty(&[Term::new(1.0, 1)]), "1x");
        assert_eq!(pretty(&[Term::new(1.0, 0)]), "1");
    }

    #[test]
    fn deterministic() {
        let terms = [Term::new(3.0, -2), Term::new(-0.5, 4)];
        assert_eq!(pretty(&terms), pretty(&terms));
        assert_eq!(pretty(&terms), "3x^-2-0.5x^4");
    }
}
