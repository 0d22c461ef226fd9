// src/calc/operator.rs
// Operator symbols: input synonyms and canonical display symbols

use crate::error::{CalcError, Result};
use std::fmt;

/// One of the four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in menu order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used to render the operator and to store it in the log.
    pub fn display_symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '/',
        }
    }

    /// Symbols accepted as input for this operator.
    ///
    /// The sets are pairwise disjoint, so `parse` is unambiguous.
    pub fn accepted_symbols(self) -> &'static [char] {
        match self {
            Operator::Add => &['+'],
            Operator::Subtract => &['-'],
            Operator::Multiply => &['*', 'x'],
            Operator::Divide => &[':', '/'],
        }
    }

    /// Look up the operator accepting `symbol`. Matching is exact: `X` is not `x`.
    pub fn parse(symbol: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.accepted_symbols().contains(&symbol))
            .ok_or_else(|| CalcError::UnrecognizedOperator(symbol.to_string()))
    }

    /// Parse the operator from the first character of a user token.
    pub fn parse_token(token: &str) -> Result<Self> {
        match token.trim().chars().next() {
            Some(symbol) => Self::parse(symbol),
            None => Err(CalcError::UnrecognizedOperator(String::new())),
        }
    }

    /// Human-readable name, used in prompts
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
            Operator::Divide => "division",
        }
    }

    /// Prompt fragment listing every operator with its accepted symbols,
    /// e.g. `addition (+), ..., multiplication (* x), ...`
    pub fn help_text() -> String {
        Self::ALL
            .iter()
            .map(|op| {
                let symbols: Vec<String> =
                    op.accepted_symbols().iter().map(char::to_string).collect();
                format!("{} ({})", op.name(), symbols.join(" "))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_symbol_round_trips() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.display_symbol()).unwrap(), op);
        }
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(Operator::parse('*').unwrap(), Operator::Multiply);
        assert_eq!(Operator::parse('x').unwrap(), Operator::Multiply);
        assert_eq!(Operator::parse('/').unwrap(), Operator::Divide);
        assert_eq!(Operator::parse(':').unwrap(), Operator::Divide);
        assert_eq!(Operator::parse('+').unwrap(), Operator::Add);
        assert_eq!(Operator::parse('-').unwrap(), Operator::Subtract);
    }

    #[test]
    fn test_unrecognized_symbol() {
        let err = Operator::parse('%').unwrap_err();
        assert!(matches!(err, CalcError::UnrecognizedOperator(s) if s == "%"));
    }

    #[test]
    fn test_uppercase_x_is_not_multiply() {
        assert!(Operator::parse('X').is_err());
    }

    #[test]
    fn test_accepted_symbols_are_disjoint() {
        for (i, a) in Operator::ALL.iter().enumerate() {
            for b in &Operator::ALL[i + 1..] {
                for sym in a.accepted_symbols() {
                    assert!(!b.accepted_symbols().contains(sym), "{sym} shared by {a:?} and {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_display_symbol_is_accepted() {
        for op in Operator::ALL {
            assert!(op.accepted_symbols().contains(&op.display_symbol()));
        }
    }

    #[test]
    fn test_parse_token_uses_first_char() {
        assert_eq!(Operator::parse_token(" x ").unwrap(), Operator::Multiply);
        assert_eq!(Operator::parse_token("+plus").unwrap(), Operator::Add);
        assert!(Operator::parse_token("").is_err());
        assert!(Operator::parse_token("   ").is_err());
        assert!(Operator::parse_token("?").is_err());
    }

    #[test]
    fn test_help_text_lists_synonyms() {
        let help = Operator::help_text();
        assert!(help.contains("multiplication (* x)"));
        assert!(help.contains("division (: /)"));
    }
}
