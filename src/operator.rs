//! Арифметические операторы калькулятора.
//!
//! Поддерживаются ровно четыре символа: `+`, `-`, `*`, `/`.
//!
//! # Примеры
//!
//! ```
//! use prompt_calc::operator::{EvalError, Operator};
//!
//! let op: Operator = "*".parse().unwrap();
//! assert_eq!(op.apply(6.0, 7.0), Ok(42.0));
//!
//! assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
//! assert!(Operator::from_symbol("%").is_none());
//! ```

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Ошибки при применении оператора.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Символ не является известным оператором.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Деление.
    Div,
}

impl Operator {
    /// Распознаёт оператор по тексту.
    ///
    /// Сравнение точное: `" +"` или `"++"` оператором не являются.
    #[must_use]
    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить оператор к операндам.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivisionByZero`], если делитель равен нулю (в том числе `-0.0`).
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownOperator(s.to_owned()))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbol_known() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Sub));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Div));
    }

    #[test]
    fn from_symbol_is_exact() {
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol(""), None);
        assert_eq!(Operator::from_symbol(" +"), None);
        assert_eq!(Operator::from_symbol("++"), None);
        assert_eq!(Operator::from_symbol("x"), None);
    }

    #[test]
    fn from_str_reports_text() {
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Div));
        assert_eq!(
            "^".parse::<Operator>(),
            Err(UnknownOperator("^".to_owned()))
        );
    }

    #[test]
    fn symbol_round_trips() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(&op.to_string()), Some(op));
        }
    }

    #[test]
    fn ops_apply_match() {
        assert_eq!(Operator::Add.apply(10.0, 5.0), Ok(15.0));
        assert_eq!(Operator::Sub.apply(5.0, 7.5), Ok(-2.5));
        assert_eq!(Operator::Mul.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operator::Div.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn div_by_zero_returns_error() {
        assert_eq!(Operator::Div.apply(7.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, 0.0), Err(EvalError::DivisionByZero));
        // -0.0 == 0.0
        assert_eq!(Operator::Div.apply(1.0, -0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn non_finite_operands() {
        assert_eq!(Operator::Add.apply(f64::INFINITY, 1.0), Ok(f64::INFINITY));
        assert_eq!(Operator::Div.apply(1.0, f64::INFINITY), Ok(0.0));
        assert!(Operator::Mul.apply(f64::NAN, 2.0).unwrap().is_nan());
    }
}
