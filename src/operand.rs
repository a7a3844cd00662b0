//! Разбор операндов.
//!
//! Операнд читается как строка и разбирается в `f64`. Пробельные символы
//! по краям игнорируются, всё остальное должно быть корректной записью
//! числа с плавающей точкой (включая `inf`, `NaN` и экспоненту).
//!
//! # Пример
//!
//! ```
//! use prompt_calc::operand::parse_operand;
//!
//! assert_eq!(parse_operand(" 2.5\n").unwrap(), 2.5);
//! assert!(parse_operand("два").is_err());
//! ```

use std::num::ParseFloatError;

use thiserror::Error;

/// Ошибка разбора операнда.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not convert '{text}' to a number")]
pub struct OperandError {
    /// Исходный текст без пробелов по краям.
    pub text: String,
    /// Причина от стандартного разборщика.
    #[source]
    pub source: ParseFloatError,
}

/// Разбирает текст операнда в число.
///
/// # Ошибки
///
/// Возвращает [`OperandError`], если текст не является числом.
pub fn parse_operand(text: &str) -> Result<f64, OperandError> {
    let trimmed = text.trim();

    trimmed.parse::<f64>().map_err(|source| OperandError {
        text: trimmed.to_owned(),
        source,
    })
}
