//! Unit normalization for catalog weight and volume values.
//!
//! Ship weights arrive as text such as `"500 kg"`, `"3 t"` or `"1,250"`.
//! Everything is converted to tons once, when the catalog is loaded; values
//! that are already `f64` are tons and never pass through here.

use crate::CoreError;

const KG_PER_TON: f64 = 1000.0;
const TON_SUFFIXES: [&str; 3] = ["tons", "ton", "t"];

fn clean(text: &str) -> String {
    text.trim().to_lowercase().replace(',', "")
}

fn parse_number(text: &str, original: &str) -> Result<f64, CoreError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoreError::InvalidUnit {
            value: original.to_string(),
        })
}

/// Parses `"<n> kg"`, `"<n> t"` or `"<n>"` into tons.
pub fn parse_tons(text: &str) -> Result<f64, CoreError> {
    let cleaned = clean(text);
    if let Some(kg) = cleaned.strip_suffix("kg") {
        Ok(parse_number(kg, text)? / KG_PER_TON)
    } else if let Some(tons) = TON_SUFFIXES
        .iter()
        .find_map(|suffix| cleaned.strip_suffix(suffix))
    {
        parse_number(tons, text)
    } else {
        parse_number(&cleaned, text)
    }
}

/// Parses a plain numeric volume, allowing thousands separators.
pub fn parse_volume(text: &str) -> Result<f64, CoreError> {
    parse_number(&clean(text), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn kilograms_are_divided_by_a_thousand() {
        assert!(approx(parse_tons("500 kg").unwrap(), 0.5));
        assert!(approx(parse_tons("500kg").unwrap(), 0.5));
        assert!(approx(parse_tons("1,500 KG").unwrap(), 1.5));
    }

    #[test]
    fn tons_are_unchanged() {
        assert!(approx(parse_tons("3 t").unwrap(), 3.0));
        assert!(approx(parse_tons("3T").unwrap(), 3.0));
        assert!(approx(parse_tons("12,000 t").unwrap(), 12_000.0));
        assert!(approx(parse_tons("40 tons").unwrap(), 40.0));
    }

    #[test]
    fn bare_text_is_implicit_tons() {
        assert!(approx(parse_tons("42.5").unwrap(), 42.5));
        assert!(approx(parse_tons("  7 ").unwrap(), 7.0));
    }

    #[test]
    fn plain_numbers_are_already_tons() {
        assert!(approx(parse_tons("2.0").unwrap(), 2.0));
        assert!(approx(parse_tons("2").unwrap(), 2.0));
    }

    #[test]
    fn malformed_weights_are_rejected() {
        for bad in ["", "kg", "heavy", "5 lbs", "t5", "NaN", "1 2 kg"] {
            let err = parse_tons(bad).unwrap_err();
            assert_eq!(
                err,
                CoreError::InvalidUnit {
                    value: bad.to_string()
                },
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn volumes_reject_units() {
        assert!(approx(parse_volume("2,400").unwrap(), 2400.0));
        assert!(parse_volume("500 kg").is_err());
        assert!(parse_volume("lots").is_err());
    }
}
