//! Portuguese cardinal numbers and amounts written out in words.
//!
//! Receipts carry the amount both in figures and in words ("a importância de
//! quatrocentos e cinquenta reais"). Segments are joined with `" e "` throughout,
//! which matches how the office has always written its receipts.

use crate::{
    core::format::amount_in_cents,
    errors::{Error, Result},
};

/// Largest value [`number_to_words`] accepts.
pub const MAX_WORDS_VALUE: u32 = 999_999;

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];
const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];
const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];
const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Writes `n` out as a Portuguese cardinal number.
///
/// `0` is `"zero"`, a lone hundred is `"cem"`, and exactly one thousand is the
/// bare `"mil"` rather than `"um mil"`.
///
/// # Errors
/// Returns [`Error::NumberOutOfRange`] when `n` exceeds [`MAX_WORDS_VALUE`].
pub fn number_to_words(n: u32) -> Result<String> {
    if n > MAX_WORDS_VALUE {
        return Err(Error::NumberOutOfRange {
            value: u64::from(n),
        });
    }
    if n == 0 {
        return Ok("zero".to_string());
    }

    let thousands = n / 1000;
    let rest = n % 1000;

    let mut segments = Vec::with_capacity(2);
    match thousands {
        0 => {}
        1 => segments.push("mil".to_string()),
        _ => segments.push(format!("{} mil", below_thousand(thousands))),
    }
    if rest > 0 {
        segments.push(below_thousand(rest));
    }

    Ok(segments.join(" e "))
}

/// Words for `1..=999`.
fn below_thousand(n: u32) -> String {
    if n == 100 {
        return "cem".to_string();
    }

    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(UNITS[rest % 10]);
        }
    } else if rest >= 10 {
        parts.push(TEENS[rest - 10]);
    } else if rest > 0 {
        parts.push(UNITS[rest]);
    }

    parts.join(" e ")
}

/// Splits an amount into whole reais and rounded centavos.
///
/// The amount is rounded to whole centavos first, so `1.999` becomes two reais
/// and the split always matches the figure printed by
/// [`format_currency`](crate::core::format::format_currency).
fn split_amount(amount: f64) -> Result<(u32, u32)> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    let total = amount_in_cents(amount);
    let reais = total / 100;
    if reais > u64::from(MAX_WORDS_VALUE) {
        return Err(Error::NumberOutOfRange { value: reais });
    }

    #[allow(clippy::cast_possible_truncation)]
    let split = (reais as u32, (total % 100) as u32);
    Ok(split)
}

/// Writes a monetary amount out in words: `"<reais> reais[ e <centavos> centavos]"`.
///
/// The centavos clause is left out when the rounded cents are zero. The
/// currency word is always the plural `"reais"`, even for one real.
///
/// # Errors
/// Returns [`Error::InvalidAmount`] for negative or non-finite amounts and
/// [`Error::NumberOutOfRange`] when the whole part exceeds [`MAX_WORDS_VALUE`].
pub fn amount_to_words(amount: f64) -> Result<String> {
    let (reais, cents) = split_amount(amount)?;

    let mut words = format!("{} reais", number_to_words(reais)?);
    if cents > 0 {
        words.push_str(" e ");
        words.push_str(&number_to_words(cents)?);
        words.push_str(" centavos");
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn words(n: u32) -> String {
        number_to_words(n).unwrap()
    }

    #[test]
    fn test_reference_values() {
        let table = [
            (0, "zero"),
            (1, "um"),
            (9, "nove"),
            (10, "dez"),
            (14, "quatorze"),
            (19, "dezenove"),
            (20, "vinte"),
            (21, "vinte e um"),
            (55, "cinquenta e cinco"),
            (99, "noventa e nove"),
            (100, "cem"),
            (101, "cento e um"),
            (115, "cento e quinze"),
            (121, "cento e vinte e um"),
            (200, "duzentos"),
            (450, "quatrocentos e cinquenta"),
            (999, "novecentos e noventa e nove"),
            (1000, "mil"),
            (1001, "mil e um"),
            (1100, "mil e cem"),
            (1234, "mil e duzentos e trinta e quatro"),
            (2000, "dois mil"),
            (2500, "dois mil e quinhentos"),
            (9999, "nove mil e novecentos e noventa e nove"),
            (20_000, "vinte mil"),
            (100_000, "cem mil"),
            (999_999, "novecentos e noventa e nove mil e novecentos e noventa e nove"),
        ];

        for (n, expected) in table {
            assert_eq!(words(n), expected, "wrong words for {n}");
        }
    }

    #[test]
    fn test_no_malformed_output_up_to_ten_thousand() {
        for n in 0..=9999 {
            let w = words(n);
            assert!(!w.is_empty(), "{n} produced empty words");
            assert!(!w.starts_with(' ') && !w.ends_with(' '), "{n}: '{w}'");
            assert!(!w.contains("  "), "{n}: '{w}'");
            assert!(!w.starts_with("e ") && !w.ends_with(" e"), "{n}: '{w}'");
            assert!(!w.contains("um mil"), "{n}: '{w}'");
            if n > 0 {
                assert!(!w.contains("zero"), "{n}: '{w}'");
            }
        }
    }

    #[test]
    fn test_rejects_values_above_range() {
        assert!(matches!(
            number_to_words(1_000_000),
            Err(Error::NumberOutOfRange { value: 1_000_000 })
        ));
    }

    #[test]
    fn test_amount_without_cents() {
        assert_eq!(
            amount_to_words(450.0).unwrap(),
            "quatrocentos e cinquenta reais"
        );
        assert_eq!(amount_to_words(1.0).unwrap(), "um reais");
        assert_eq!(amount_to_words(0.0).unwrap(), "zero reais");
    }

    #[test]
    fn test_amount_with_cents() {
        assert_eq!(
            amount_to_words(125.05).unwrap(),
            "cento e vinte e cinco reais e cinco centavos"
        );
        assert_eq!(
            amount_to_words(0.99).unwrap(),
            "zero reais e noventa e nove centavos"
        );
        assert_eq!(
            amount_to_words(1000.10).unwrap(),
            "mil reais e dez centavos"
        );
    }

    #[test]
    fn test_cents_clause_present_iff_rounded_cents_nonzero() {
        for cents in 0..100_u32 {
            let amount = 37.0 + f64::from(cents) / 100.0;
            let text = amount_to_words(amount).unwrap();
            assert_eq!(
                text.contains("centavos"),
                amount_in_cents(amount) % 100 > 0,
                "amount {amount} -> '{text}'"
            );
        }
    }

    #[test]
    fn test_rounding_carries_into_reais() {
        assert_eq!(amount_to_words(1.999).unwrap(), "dois reais");
        assert_eq!(amount_to_words(2.005).unwrap(), "dois reais e um centavos");
    }

    #[test]
    fn test_amount_rejects_invalid_input() {
        assert!(matches!(
            amount_to_words(-1.0),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            amount_to_words(f64::NAN),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            amount_to_words(f64::INFINITY),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            amount_to_words(1_000_000.0),
            Err(Error::NumberOutOfRange { .. })
        ));
    }
}
