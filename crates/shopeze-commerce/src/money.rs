//! Money type for representing monetary values.
//!
//! Uses an integer representation in the smallest unit the store prices
//! in, avoiding the floating-point precision issues that plague monetary
//! calculations. Shopeze prices everything in whole rupees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Decimal places shown for this currency.
    ///
    /// The store prices INR in whole rupees.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::INR => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest priced unit of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest priced unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create an INR amount (whole rupees).
    pub fn inr(rupees: i64) -> Self {
        Self::new(rupees, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Try to add another Money value, returning None if currencies
    /// don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(sum, self.currency))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let product = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(product, self.currency))
    }

    /// Sum an iterator of Money values with checked arithmetic.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Some(acc)
    }

    /// Format as a display string (e.g., "₹1,499").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the amount without symbol, grouping thousands.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return group_thousands(self.amount_minor);
        }
        let divisor = 10_i64.pow(places);
        let whole = self.amount_minor / divisor;
        let frac = (self.amount_minor % divisor).abs();
        format!(
            "{}.{:0places$}",
            group_thousands(whole),
            frac,
            places = places as usize
        )
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match or the sum overflows. Use
    /// `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .expect("Currency mismatch or overflow in addition")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group an integer with comma separators (e.g., 1234 -> "1,234").
fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_inr() {
        let m = Money::inr(299);
        assert_eq!(m.amount_minor, 299);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_display_inr() {
        assert_eq!(Money::inr(598).display(), "\u{20b9}598");
        assert_eq!(Money::inr(1499).display(), "\u{20b9}1,499");
        assert_eq!(Money::inr(1234567).display(), "\u{20b9}1,234,567");
    }

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::inr(1000);
        let b = Money::inr(500);
        assert_eq!((a + b).amount_minor, 1500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::inr(299);
        assert_eq!(m.try_multiply(2).unwrap().amount_minor, 598);
        assert!(m.try_multiply(i64::MAX).is_none());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let inr = Money::inr(100);
        let usd = Money::new(100, Currency::USD);
        assert!(inr.try_add(&usd).is_none());
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::inr(100), Money::inr(200), Money::inr(300)];
        let total = Money::try_sum(values.iter(), Currency::INR).unwrap();
        assert_eq!(total.amount_minor, 600);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
