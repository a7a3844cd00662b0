//! # prompt_calc
//!
//! Консольный калькулятор на одну операцию: два числа и оператор.
//!
//! Поддерживает:
//! - Числа с плавающей точкой (f64)
//! - Бинарные операции: `+`, `-`, `*`, `/`
//! - Сообщения о делении на ноль и неизвестном операторе
//!
//! # Пример использования
//!
//! ```
//! use prompt_calc::{Outcome, calculate};
//!
//! assert_eq!(calculate(10.0, "+", 5.0), Outcome::Value(15.0));
//! assert_eq!(calculate(7.0, "/", 0.0).to_string(), "Error: Division by zero");
//! assert_eq!(calculate(4.0, "%", 2.0).to_string(), "Invalid operator");
//! ```

pub mod format;
pub mod logging;
pub mod operand;
pub mod operator;
pub mod session;

use std::fmt::Display;
use std::io;

use tracing::debug;

use crate::operator::{EvalError, Operator, UnknownOperator};
use crate::session::Session;

/// Общий тип ошибки калькулятора.
///
/// Сюда попадают только фатальные ситуации. Деление на ноль и неизвестный
/// оператор являются обычными исходами, см. [`Outcome`].
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Введённый текст не является числом.
    #[error("{0}")]
    Operand(#[from] operand::OperandError),

    /// Ввод закончился раньше, чем было прочитано значение.
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEof {
        /// Что именно ожидалось.
        what: &'static str,
    },

    /// Ошибка чтения или записи.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Итог одного вычисления.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Вычисленное значение.
    Value(f64),
    /// Деление на ноль.
    DivisionByZero,
    /// Оператор не распознан.
    InvalidOperator,
}

impl Outcome {
    /// Значение, если оно было вычислено.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::DivisionByZero | Self::InvalidOperator => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "Result: {}", format::format_number(*v)),
            Self::DivisionByZero => write!(f, "Error: {}", EvalError::DivisionByZero),
            Self::InvalidOperator => f.write_str("Invalid operator"),
        }
    }
}

/// Выполняет одну операцию над уже разобранными операндами.
///
/// Оператор передаётся как есть, без обрезки пробелов.
///
/// # Примеры
///
/// ```
/// use prompt_calc::{Outcome, calculate};
///
/// assert_eq!(calculate(6.0, "*", 7.0), Outcome::Value(42.0));
/// assert_eq!(calculate(7.0, "/", 0.0), Outcome::DivisionByZero);
/// assert_eq!(calculate(4.0, " +", 2.0), Outcome::InvalidOperator);
/// ```
#[must_use]
pub fn calculate(first: f64, operator: &str, second: f64) -> Outcome {
    let op = match operator.parse::<Operator>() {
        Ok(op) => op,
        Err(UnknownOperator(text)) => {
            debug!(operator = %text, "unknown operator");
            return Outcome::InvalidOperator;
        }
    };

    match op.apply(first, second) {
        Ok(value) => {
            debug!(first, %op, second, value, "computed");
            Outcome::Value(value)
        }
        Err(EvalError::DivisionByZero) => {
            debug!(first, "division by zero");
            Outcome::DivisionByZero
        }
    }
}

/// Запускает калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при некорректном числе, преждевременном конце
/// ввода или ошибке ввода-вывода.
pub fn run() -> Result<Outcome, CalcError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run()
}
