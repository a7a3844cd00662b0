//! Интерактивный сеанс: заголовок, три запроса и одна строка результата.
//!
//! Сеанс работает с любыми [`BufRead`] и [`Write`], поэтому его можно
//! прогнать целиком в памяти.
//!
//! ```
//! use std::io::Cursor;
//!
//! use prompt_calc::Outcome;
//! use prompt_calc::session::Session;
//!
//! let mut out = Vec::new();
//! let outcome = Session::new(Cursor::new("6\n*\n7\n"), &mut out).run().unwrap();
//!
//! assert_eq!(outcome, Outcome::Value(42.0));
//! assert!(String::from_utf8(out).unwrap().ends_with("Result: 42.0\n"));
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::operand::parse_operand;
use crate::{CalcError, Outcome, calculate};

/// Заголовок, печатаемый в начале сеанса.
pub const BANNER: &str = "Calculator";
/// Запрос первого числа.
pub const FIRST_PROMPT: &str = "Enter first number: ";
/// Запрос оператора.
pub const OPERATOR_PROMPT: &str = "Enter operator (+, -, *, /): ";
/// Запрос второго числа.
pub const SECOND_PROMPT: &str = "Enter second number: ";

/// Один сеанс вычисления.
pub struct Session<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Создаёт сеанс поверх заданных потоков.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Проводит сеанс до конца и возвращает итог.
    ///
    /// Оператор проверяется только после чтения обоих чисел.
    ///
    /// # Ошибки
    ///
    /// - [`CalcError::Operand`], если число не разобрано.
    /// - [`CalcError::UnexpectedEof`], если ввод закончился.
    /// - [`CalcError::Io`] при ошибке потоков.
    pub fn run(&mut self) -> Result<Outcome, CalcError> {
        writeln!(self.output, "{BANNER}")?;

        let first = self.read_operand(FIRST_PROMPT, "first number")?;
        let operator = self.prompt(OPERATOR_PROMPT, "operator")?.to_owned();
        let second = self.read_operand(SECOND_PROMPT, "second number")?;

        let outcome = calculate(first, &operator, second);
        writeln!(self.output, "{outcome}")?;
        self.output.flush()?;

        Ok(outcome)
    }

    fn read_operand(&mut self, prompt: &str, what: &'static str) -> Result<f64, CalcError> {
        let text = self.prompt(prompt, what)?;
        let value = parse_operand(text)?;
        debug!(what, value, "operand parsed");
        Ok(value)
    }

    /// Печатает запрос и читает одну строку без завершающего перевода строки.
    fn prompt(&mut self, prompt: &str, what: &'static str) -> Result<&str, CalcError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(CalcError::UnexpectedEof { what });
        }
        trace!(what, line = ?self.line, "line read");

        Ok(strip_line_ending(&self.line))
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}
