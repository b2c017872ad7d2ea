//! Token and term definitions shared by every stage of the pipeline.

use std::fmt;

use num_traits::Zero;

/// A monomial `coefficient * x^exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: i64,
}

impl Term {
    pub fn new(coefficient: f64, exponent: i64) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }

    pub fn constant(coefficient: f64) -> Self {
        Term::new(coefficient, 0)
    }

    /// Returns this term with `sign` applied to its coefficient.
    pub fn signed(self, sign: Sign) -> Self {
        match sign {
            Sign::Plus => self,
            Sign::Minus => Term::new(-self.coefficient, self.exponent),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 + 0.0 == +0.0
        write!(f, "{}", self.coefficient + 0.0)?;
        if self.exponent != 0 {
            f.write_str("x")?;
            if self.exponent != 1 {
                write!(f, "^{}", self.exponent)?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            _ => None,
        }
    }

    pub fn lexeme(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Term(Term),
    Operator(Sign),
}

impl Token {
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Term(_) => "Term",
            Token::Operator(_) => "Operator",
        }
    }
}
