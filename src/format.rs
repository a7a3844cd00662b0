//! Вывод результата.
//!
//! Число печатается в кратчайшей точной записи, целые значения сохраняют
//! `.0`, а очень большие и очень маленькие значения переходят в
//! экспоненциальную запись со знаком и минимум двумя цифрами порядка.
//!
//! ```
//! use prompt_calc::format::format_number;
//!
//! assert_eq!(format_number(15.0), "15.0");
//! assert_eq!(format_number(1e16), "1e+16");
//! assert_eq!(format_number(0.000015), "1.5e-05");
//! ```

/// Форматирует число для строки `Result: ...`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        let s = if value.is_sign_positive() { "inf" } else { "-inf" };
        return s.to_owned();
    }

    // Debug уже выбирает между десятичной и экспоненциальной записью
    // по порогам 1e-4 и 1e16, остаётся дописать порядок.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! format_tests {
        ($($name:ident: $value:expr => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(format_number($value), $expected, "значение: {:?}", $value);
                }
            )*
        };
    }

    format_tests! {
        // Целые значения
        integral_positive: 15.0 => "15.0",
        integral_product: 42.0 => "42.0",
        integral_negative: -2.0 => "-2.0",
        zero: 0.0 => "0.0",
        negative_zero: -0.0 => "-0.0",

        // Дроби
        fraction_half: 3.5 => "3.5",
        fraction_shortest: 0.1 + 0.2 => "0.30000000000000004",
        fraction_third: 10.0 / 3.0 => "3.3333333333333335",
        small_decimal_boundary: 0.0001 => "0.0001",

        // Большие значения
        large_below_boundary: 9_999_999_999_999_998.0 => "9999999999999998.0",
        large_boundary: 1e16 => "1e+16",
        large_mantissa: 1.2345678901234568e17 => "1.2345678901234568e+17",
        large_three_digit_exponent: 1.5e300 => "1.5e+300",

        // Маленькие значения
        small_boundary: 0.00001 => "1e-05",
        small_mantissa: 0.000015 => "1.5e-05",
        small_negative: -2.5e-10 => "-2.5e-10",

        // Особые значения
        infinity: f64::INFINITY => "inf",
        negative_infinity: f64::NEG_INFINITY => "-inf",
        not_a_number: f64::NAN => "nan",
    }
}
