//! Vectors written as `(x; y; z; ...)`.

use base::vector::Vector;
use std::fmt::{Display, Formatter};

/// Largest number of components accepted by the calculator.
pub const MAX_COMPONENTS: usize = 25;

/// Vector type every computation of the calculator runs on.
pub type CalcVector = Vector<f64, MAX_COMPONENTS>;

/// Error raised when reading a vector literal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The literal does not start with `(` and end with `)`.
    #[error("The vector must be enclosed in parentheses, e.g. (1; 2; 3)")]
    MissingParentheses,

    /// A component is not a number.
    #[error("Invalid component '{0}'")]
    InvalidNumber(String),

    /// More than [`MAX_COMPONENTS`] components.
    #[error("{0} components given, at most {MAX_COMPONENTS} are supported")]
    TooManyComponents(usize),
}

/// Components of a vector as entered by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components(pub Vec<f64>);

impl Components {
    /// Number of entered components.
    pub fn len(&self) -> usize { self.0.len() }

    /// The components as a calculator vector, padded with zeros.
    pub fn to_vector(&self) -> CalcVector { Vector::from_slice(&self.0) }

    /// Components of `v` without its trailing zeros, padded back with zeros
    /// up to `min_len` components.
    pub fn from_vector(v: &CalcVector, min_len: usize) -> Self {
        let mut values = v.as_slice().to_vec();
        while values.last() == Some(&0.0) {
            values.pop();
        }
        values.resize(values.len().max(min_len), 0.0);
        Self(values)
    }
}

impl Display for Components {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/// Parses `(x; y; z; ...)`. Spaces are ignored and commas are accepted as
/// decimal separators.
pub fn parse_components(s: &str) -> Result<Components, ParseError> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(ParseError::MissingParentheses)?;
    let inner: String = inner
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if inner.is_empty() {
        return Ok(Components::default());
    }
    let values = inner
        .strip_suffix(';')
        .unwrap_or(&inner)
        .split(';')
        .map(|n| n.parse::<f64>().map_err(|_| ParseError::InvalidNumber(n.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() > MAX_COMPONENTS {
        return Err(ParseError::TooManyComponents(values.len()));
    }
    Ok(Components(values))
}

impl std::str::FromStr for Components {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_components(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing() {
        assert_eq!(parse_components("( 1,5; 2 ; 3)"), Ok(Components(vec![1.5, 2.0, 3.0])));
        assert_eq!(parse_components("\t(-1e2;0.25)  "), Ok(Components(vec![-100.0, 0.25])));
        assert_eq!(parse_components("(4;)"), Ok(Components(vec![4.0])));
        assert_eq!(parse_components("()"), Ok(Components(vec![])));
    }

    #[test]
    fn parsing_errors() {
        assert_eq!(parse_components("1; 2"), Err(ParseError::MissingParentheses));
        assert_eq!(parse_components("(1; 2"), Err(ParseError::MissingParentheses));
        assert_eq!(parse_components("(1; x)"), Err(ParseError::InvalidNumber("x".to_string())));
        assert_eq!(parse_components("(1;;2)"), Err(ParseError::InvalidNumber(String::new())));
        let too_long = format!("({})", vec!["1"; 26].join(";"));
        assert_eq!(parse_components(&too_long), Err(ParseError::TooManyComponents(26)));
        let longest = format!("({})", vec!["1"; 25].join(";"));
        assert_eq!(parse_components(&longest).map(|c| c.len()), Ok(25));
    }

    #[test]
    fn trailing_zeros() {
        let v = parse_components("(1; 0; 2; 0; 0)").unwrap().to_vector();
        assert_eq!(Components::from_vector(&v, 0), Components(vec![1.0, 0.0, 2.0]));
        assert_eq!(Components::from_vector(&v, 4), Components(vec![1.0, 0.0, 2.0, 0.0]));
        assert_eq!(Components::from_vector(&CalcVector::zero(), 2).to_string(), "(0; 0)");
    }

    #[test]
    fn display() {
        assert_eq!(Components(vec![1.5, -2.0, 3.0]).to_string(), "(1.5; -2; 3)");
        assert_eq!(Components::default().to_string(), "()");
    }
}
