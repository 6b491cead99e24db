//! Culture-aware numeric formatting and parsing
//!
//! [`NumberFormat`] is the generic numeric formatter the amount grammar
//! delegates to. It owns decimal/group separators and a small `#,##0.00`
//! pattern language; unit placement stays in the amount layer.
//!
//! Pattern language:
//! - `0` — digit, padded; `#` — digit, optional
//! - `,` anywhere in the integer section enables grouping
//! - `.` separates the decimal section; trailing `0`s are kept, `#`s trimmed
//! - `;` splits positive and negative sub-patterns (the negative sub-pattern
//!   formats the absolute value and supplies its own sign text)
//! - `"..."` passes literal text through untouched; other non-pattern
//!   characters are literal as well

use serde::{Deserialize, Serialize};

use crate::AmountError;

/// Decimal and group separators for one numeric culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    decimal_separator: char,
    group_separator: char,
}

impl NumberFormat {
    /// A culture with the given separators.
    pub const fn new(decimal_separator: char, group_separator: char) -> NumberFormat {
        NumberFormat {
            decimal_separator,
            group_separator,
        }
    }

    /// The invariant culture: `.` decimal point, `,` group separator.
    pub const fn invariant() -> NumberFormat {
        NumberFormat::new('.', ',')
    }

    /// A `1.234,56`-style culture: `,` decimal point, `.` group separator.
    pub const fn comma_decimal() -> NumberFormat {
        NumberFormat::new(',', '.')
    }

    /// The decimal separator.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The group separator.
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Shortest round-trip rendering, localized.
    pub fn format_general(&self, value: f64) -> String {
        let rendered = value.to_string();
        rendered
            .chars()
            .map(|c| if c == '.' { self.decimal_separator } else { c })
            .collect()
    }

    /// Fixed-decimal rendering with digit grouping, the `N`-style default.
    pub fn format_numeric(&self, value: f64, decimals: usize) -> String {
        let spec = NumericSpec {
            grouped: true,
            min_decimals: decimals,
            max_decimals: decimals,
            min_int_digits: 1,
        };
        let mut out = String::new();
        if value.is_sign_negative() && value != 0.0 {
            out.push('-');
        }
        out.push_str(&spec.render(value.abs(), self));
        out
    }

    /// Renders a value through a `#,##0.00`-style pattern.
    pub fn format_pattern(&self, value: f64, pattern: &str) -> String {
        let sections = split_sections(pattern);
        if value < 0.0 && sections.len() > 1 {
            render_section(&sections[1], value.abs(), self)
        } else if value < 0.0 {
            format!("-{}", render_section(&sections[0], value.abs(), self))
        } else {
            render_section(&sections[0], value, self)
        }
    }

    /// Parses a number written in this culture.
    pub fn parse(&self, s: &str) -> Result<f64, AmountError> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|&c| c != self.group_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        normalized
            .parse()
            .map_err(|_| AmountError::InvalidNumber(s.to_string()))
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::invariant()
    }
}

/// The digit portion of one pattern section.
struct NumericSpec {
    grouped: bool,
    min_decimals: usize,
    max_decimals: usize,
    min_int_digits: usize,
}

impl NumericSpec {
    fn from_run(run: &str) -> NumericSpec {
        let (int_part, frac_part) = match run.find('.') {
            Some(pos) => (&run[..pos], &run[pos + 1..]),
            None => (run, ""),
        };
        NumericSpec {
            grouped: int_part.contains(','),
            min_decimals: frac_part.matches('0').count(),
            max_decimals: frac_part.chars().filter(|c| *c == '0' || *c == '#').count(),
            min_int_digits: int_part.matches('0').count().max(1),
        }
    }

    /// Renders a non-negative value; the caller owns the sign.
    fn render(&self, value: f64, culture: &NumberFormat) -> String {
        let fixed = format!("{:.*}", self.max_decimals, value);
        let (int_digits, frac_digits) = match fixed.find('.') {
            Some(pos) => (&fixed[..pos], &fixed[pos + 1..]),
            None => (fixed.as_str(), ""),
        };

        let mut int_digits = int_digits.to_string();
        while int_digits.len() < self.min_int_digits {
            int_digits.insert(0, '0');
        }
        if self.grouped {
            int_digits = group_digits(&int_digits, culture.group_separator);
        }

        let mut frac_digits = frac_digits.to_string();
        while frac_digits.len() > self.min_decimals && frac_digits.ends_with('0') {
            frac_digits.pop();
        }

        if frac_digits.is_empty() {
            int_digits
        } else {
            format!("{}{}{}", int_digits, culture.decimal_separator, frac_digits)
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Splits a pattern on `;` separators outside quoted literals.
fn split_sections(pattern: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    for c in pattern.chars() {
        match c {
            '"' => {
                in_quote = !in_quote;
                current.push(c);
            }
            ';' if !in_quote => sections.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    sections.push(current);
    sections
}

/// Renders one section: literal text around the first digit run, the digit
/// run itself through [`NumericSpec`].
fn render_section(section: &str, value: f64, culture: &NumberFormat) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_done = false;
    let mut in_quote = false;

    for c in section.chars() {
        if c == '"' {
            in_quote = !in_quote;
            continue;
        }
        if in_quote {
            if !run.is_empty() && !run_done {
                out.push_str(&NumericSpec::from_run(&run).render(value, culture));
                run_done = true;
            }
            out.push(c);
            continue;
        }
        if matches!(c, '#' | '0' | ',' | '.') && !run_done {
            run.push(c);
        } else {
            if !run.is_empty() && !run_done {
                out.push_str(&NumericSpec::from_run(&run).render(value, culture));
                run_done = true;
            }
            out.push(c);
        }
    }
    if !run.is_empty() && !run_done {
        out.push_str(&NumericSpec::from_run(&run).render(value, culture));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general() {
        let inv = NumberFormat::invariant();
        assert_eq!(inv.format_general(15.3), "15.3");
        assert_eq!(inv.format_general(-0.45), "-0.45");
        assert_eq!(NumberFormat::comma_decimal().format_general(12.3456789), "12,3456789");
    }

    #[test]
    fn test_numeric_default_style() {
        let inv = NumberFormat::invariant();
        assert_eq!(inv.format_numeric(12.3456789, 2), "12.35");
        assert_eq!(inv.format_numeric(12345.6789, 2), "12,345.68");
        assert_eq!(NumberFormat::comma_decimal().format_numeric(12345.6789, 2), "12.345,68");
        assert_eq!(inv.format_numeric(-0.45, 2), "-0.45");
    }

    #[test]
    fn test_pattern_fixed_decimals() {
        let inv = NumberFormat::invariant();
        assert_eq!(inv.format_pattern(12.3456789, "0.000"), "12.346");
        assert_eq!(inv.format_pattern(15.0, "0"), "15");
        assert_eq!(inv.format_pattern(1234.5678, "#,##0.00"), "1,234.57");
    }

    #[test]
    fn test_pattern_optional_decimals_trimmed() {
        let inv = NumberFormat::invariant();
        assert_eq!(inv.format_pattern(1.5, "0.0###"), "1.5");
        assert_eq!(inv.format_pattern(1.56789, "0.0###"), "1.5679");
    }

    #[test]
    fn test_pattern_literals_pass_through() {
        let inv = NumberFormat::invariant();
        assert_eq!(inv.format_pattern(12.346, "#,##0.000 \"km\""), "12.346 km");
        assert_eq!(inv.format_pattern(12.346, "+#,##0.000 \"km\""), "+12.346 km");
    }

    #[test]
    fn test_pattern_negative_section() {
        let culture = NumberFormat::comma_decimal();
        assert_eq!(culture.format_pattern(-0.45, "0.000"), "-0,450");
        assert_eq!(
            culture.format_pattern(-0.45, "0.000 \"km/h\";[0.000] \"km/h\""),
            "[0,450] km/h"
        );
        assert_eq!(
            NumberFormat::invariant().format_pattern(-12.346, "#,##0.000 \"km\" pos;#,##0.000 \"km\" neg"),
            "12.346 km neg"
        );
    }

    #[test]
    fn test_parse_localized_numbers() {
        let us = NumberFormat::invariant();
        assert_eq!(us.parse("12,345.6789").unwrap(), 12345.6789);
        let eu = NumberFormat::comma_decimal();
        assert_eq!(eu.parse("12.345,6789").unwrap(), 12345.6789);
        assert_eq!(eu.parse("12,3456789").unwrap(), 12.3456789);
        assert!(us.parse("not-a-number").is_err());
    }
}
