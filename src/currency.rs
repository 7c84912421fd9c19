//! Indian Rupee formatting with lakh/crore digit grouping

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use once_cell::sync::Lazy;
use regex::Regex;

/// Rupee sign prefixed to every formatted amount
pub const RUPEE_SIGN: char = '₹';

/// Compact display units, largest first
const COMPACT_UNITS: [(i64, &str); 3] = [(10_000_000, "Cr"), (100_000, "L"), (1_000, "K")];

/// Longest leading decimal number, optionally signed and with an exponent
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d+)?|\.\d+)([eE][+-]?\d+)?").expect("number pattern is valid")
});

/// An amount rounded to paise and split into its printable parts
struct Paise {
    negative: bool,
    rupees: String,
    paise: String,
}

impl Paise {
    fn round(amount: &BigDecimal) -> Self {
        let (digits, _scale) = amount
            .with_scale_round(2, RoundingMode::HalfUp)
            .as_bigint_and_exponent();
        let text = digits.to_string();
        let negative = text.starts_with('-');
        let magnitude = format!("{:0>3}", text.trim_start_matches('-'));
        let (rupees, paise) = magnitude.split_at(magnitude.len() - 2);

        Self {
            negative,
            rupees: rupees.to_string(),
            paise: paise.to_string(),
        }
    }

    fn is_whole(&self) -> bool {
        self.paise == "00"
    }
}

/// Group integer digits the Indian way: the last three together, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    groups.join(",")
}

/// Format an amount as Indian Rupees, e.g. `₹10,00,000` or `-₹1,000.50`.
///
/// The amount is rounded half away from zero to two decimals. Whole amounts
/// print without a fraction; anything else prints exactly two fraction digits.
pub fn format_inr(amount: &BigDecimal) -> String {
    let paise = Paise::round(amount);
    let sign = if paise.negative { "-" } else { "" };
    let rupees = group_indian(&paise.rupees);

    if paise.is_whole() {
        format!("{sign}{RUPEE_SIGN}{rupees}")
    } else {
        format!("{sign}{RUPEE_SIGN}{rupees}.{}", paise.paise)
    }
}

/// Format an amount with Indian compact units: `Cr`, `L` or `K`.
///
/// The scaled value keeps at most two fraction digits with trailing zeros
/// dropped (`₹1.25Cr`, `₹15L`). Amounts below one thousand, including all
/// negative amounts, fall back to [`format_inr`].
pub fn format_inr_compact(amount: &BigDecimal) -> String {
    for (index, (unit, suffix)) in COMPACT_UNITS.iter().enumerate() {
        let unit_value = BigDecimal::from(*unit);
        if *amount < unit_value {
            continue;
        }

        let scaled = Paise::round(&(amount / &unit_value));

        // 99,999.999 rounds to 100K; show it in the next unit instead
        if index > 0 {
            let (larger, larger_suffix) = COMPACT_UNITS[index - 1];
            if scaled.rupees.parse::<i64>().unwrap_or(0) >= larger / unit {
                let rescaled = Paise::round(&(amount / BigDecimal::from(larger)));
                return compact_text(&rescaled, larger_suffix);
            }
        }

        return compact_text(&scaled, suffix);
    }

    format_inr(amount)
}

fn compact_text(scaled: &Paise, suffix: &str) -> String {
    let fraction = scaled.paise.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{RUPEE_SIGN}{}{suffix}", scaled.rupees)
    } else {
        format!("{RUPEE_SIGN}{}.{fraction}{suffix}", scaled.rupees)
    }
}

/// Parse a displayed rupee amount back into a number.
///
/// Rupee signs, commas and whitespace are ignored and the longest leading
/// number is read. Input without a leading number yields zero.
pub fn parse_inr(value: &str) -> BigDecimal {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != RUPEE_SIGN && *c != ',' && !c.is_whitespace())
        .collect();

    let Some(found) = NUMBER_PREFIX.find(&cleaned) else {
        tracing::debug!(input = value, "no amount found, parsing as zero");
        return BigDecimal::from(0);
    };

    let (sign, number) = match found.as_str().strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", found.as_str().trim_start_matches('+')),
    };
    let leading_zero = if number.starts_with('.') { "0" } else { "" };

    BigDecimal::from_str(&format!("{sign}{leading_zero}{number}")).unwrap_or_else(|err| {
        tracing::debug!(input = value, error = %err, "amount out of range, parsing as zero");
        BigDecimal::from(0)
    })
}
