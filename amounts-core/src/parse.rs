//! Unit-expression parsing
//!
//! Grammar: an optional layer of parentheses around `*`- and `/`-separated
//! terms, where each term is either a plain number or a unit name/symbol
//! known to the registry. Evaluation is a left-to-right fold; a leading
//! numeric term is held back and applied as a final scale, so `"1000*Kg"`
//! equals a tonne even though the number comes first.

use crate::unit::sanitize_unit_string;
use crate::{AmountError, Unit, UnitManager};

/// Parses a unit expression against the registry.
///
/// Empty input yields [`Unit::none`]. Repeated `**`/`//` runs (artifacts of
/// formatted unit algebra) are collapsed before tokenizing.
pub fn parse_unit(s: &str, manager: &UnitManager) -> Result<Unit, AmountError> {
    if s.is_empty() {
        return Ok(Unit::none());
    }

    let s = s.strip_prefix('(').unwrap_or(s);
    let s = s.strip_suffix(')').unwrap_or(s);
    let s = sanitize_unit_string(s.to_string());

    let tokens = tokenize(&s);

    if tokens.len() == 1 {
        return tokens[0].as_unit(manager);
    }

    let mut result = Unit::none();
    let mut leading_scale = 1.0;
    let mut i = 0;
    while i < tokens.len() {
        match (&tokens[i], i) {
            (Token::Term(_), 0) => result = tokens[0].as_unit(manager)?,
            (Token::Numeric(value), 0) => leading_scale = *value,
            (Token::Multiplier | Token::Divider, 0) => {}
            (Token::Multiplier, _) => {
                i += 1;
                result = match tokens.get(i) {
                    Some(Token::Numeric(value)) => &result * *value,
                    Some(token) => &result * &token.as_unit(manager)?,
                    None => result,
                };
            }
            (Token::Divider, _) => {
                i += 1;
                result = match tokens.get(i) {
                    Some(Token::Numeric(value)) => &result / *value,
                    Some(token) => &result / &token.as_unit(manager)?,
                    None => result,
                };
            }
            // A bare term or number after position 0 only occurs in
            // malformed input; the preceding operator arm consumes the
            // well-formed ones.
            (Token::Term(_) | Token::Numeric(_), _) => {}
        }
        i += 1;
    }

    Ok(leading_scale * result)
}

/// One `*`/`/`-delimited segment of a unit expression.
enum Token {
    /// A plain number, e.g. the `1000` of `"1000*Kg"`.
    Numeric(f64),
    Multiplier,
    Divider,
    /// A unit name or symbol, resolved lazily against the registry.
    Term(String),
}

impl Token {
    fn classify(s: String) -> Token {
        match s.parse::<f64>() {
            Ok(value) => Token::Numeric(value),
            Err(_) => Token::Term(s),
        }
    }

    fn as_unit(&self, manager: &UnitManager) -> Result<Unit, AmountError> {
        match self {
            Token::Term(s) => match manager.try_get_unit_by_name(s) {
                Some(unit) => Ok(unit),
                None => manager.get_unit_by_symbol(s),
            },
            Token::Numeric(value) => Err(AmountError::UnknownUnit(value.to_string())),
            Token::Multiplier => Err(AmountError::UnknownUnit("*".to_string())),
            Token::Divider => Err(AmountError::UnknownUnit("/".to_string())),
        }
    }
}

fn tokenize(s: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for character in s.chars() {
        if character == '*' || character == '/' {
            tokens.push(Token::classify(std::mem::take(&mut current)));
            tokens.push(if character == '*' {
                Token::Multiplier
            } else {
                Token::Divider
            });
        } else {
            current.push(character);
        }
    }
    tokens.push(Token::classify(current));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitType;

    fn test_manager() -> UnitManager {
        let manager = UnitManager::new();
        let meter = Unit::new("meter", "m", UnitType::base("test-parse-length").unwrap());
        let second = Unit::new("second", "s", UnitType::base("test-parse-time").unwrap());
        let kilogram = Unit::new("kilogram", "Kg", UnitType::base("test-parse-mass").unwrap());
        let hour = Unit::from_base("hour", "h", &(3600.0 * &second));
        let cubic_meter = Unit::from_base("meter\u{b3}", "m\u{b3}", &meter.power(3));
        for unit in [&meter, &second, &kilogram, &hour, &cubic_meter] {
            manager.register_unit(unit.clone());
        }
        manager
    }

    #[test]
    fn test_empty_input_is_none() {
        let manager = test_manager();
        assert_eq!(parse_unit("", &manager).unwrap(), Unit::none());
    }

    #[test]
    fn test_single_symbol() {
        let manager = test_manager();
        let unit = parse_unit("m", &manager).unwrap();
        assert_eq!(unit.symbol(), "m");
        assert!(unit.is_named());
    }

    #[test]
    fn test_single_name() {
        let manager = test_manager();
        let unit = parse_unit("kilogram", &manager).unwrap();
        assert_eq!(unit.symbol(), "Kg");
    }

    #[test]
    fn test_parenthesized_unit_parses_like_unwrapped() {
        let manager = test_manager();
        assert_eq!(
            parse_unit("(m/s)", &manager).unwrap(),
            parse_unit("m/s", &manager).unwrap()
        );
    }

    #[test]
    fn test_quotient() {
        let manager = test_manager();
        let meter = manager.get_unit_by_symbol("m").unwrap();
        let second = manager.get_unit_by_symbol("s").unwrap();
        assert_eq!(parse_unit("m/s", &manager).unwrap(), meter / second);
    }

    #[test]
    fn test_left_to_right_chain() {
        let manager = test_manager();
        let m3 = manager.get_unit_by_symbol("m\u{b3}").unwrap();
        let hour = manager.get_unit_by_symbol("h").unwrap();
        let meter = manager.get_unit_by_symbol("m").unwrap();
        let kilogram = manager.get_unit_by_symbol("Kg").unwrap();

        assert_eq!(
            parse_unit("m\u{b3}/h/m", &manager).unwrap(),
            &(&m3 / &hour) / &meter
        );
        assert_eq!(
            parse_unit("m\u{b3}/h/m*Kg", &manager).unwrap(),
            &(&(&m3 / &hour) / &meter) * &kilogram
        );
    }

    #[test]
    fn test_leading_number_scales_result() {
        let manager = test_manager();
        let kilogram = manager.get_unit_by_symbol("Kg").unwrap();
        let parsed = parse_unit("1000*Kg", &manager).unwrap();
        assert_eq!(parsed, 1000.0 * &kilogram);
        assert_eq!(parsed.factor(), 1000.0);
    }

    #[test]
    fn test_division_by_number() {
        let manager = test_manager();
        let parsed = parse_unit("m/100", &manager).unwrap();
        assert_eq!(parsed.factor(), 0.01);
    }

    #[test]
    fn test_collapsed_operator_runs_are_tolerated() {
        let manager = test_manager();
        let expected = parse_unit("1*m/s", &manager).unwrap();
        assert_eq!(parse_unit("1**m/s", &manager).unwrap(), expected);
        assert_eq!(parse_unit("1***m/s", &manager).unwrap(), expected);
        assert_eq!(parse_unit("m//s", &manager).unwrap(), expected);
    }

    #[test]
    fn test_unknown_unit_errors() {
        let manager = test_manager();
        let result = parse_unit("bogus", &manager);
        assert!(matches!(result, Err(AmountError::UnknownUnit(_))));
    }
}
