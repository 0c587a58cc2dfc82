//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so cart totals never drift,
//! however many items are added and removed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Number of minor units in one major unit.
    fn minor_units(&self) -> i64 {
        100
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use crockery_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(24.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 2499);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Shorthand for a USD amount in cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let units = self.currency.minor_units();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!(
            "{}{}.{:02}",
            sign,
            abs / units as u64,
            abs % units as u64
        )
    }

    /// Add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Apply a percentage rate, rounding half away from zero to the nearest cent.
    ///
    /// The rate is resolved to basis points so the result is exact integer
    /// arithmetic: 10% of $40.00 is exactly $4.00.
    pub fn percentage(&self, percent: f64) -> Option<Money> {
        let basis_points = (percent * 100.0).round() as i64;
        let scaled = self.amount_cents.checked_mul(basis_points)?;
        let rounded = if scaled >= 0 {
            scaled.checked_add(5_000)? / 10_000
        } else {
            scaled.checked_sub(5_000)? / 10_000
        };
        Some(Money::new(rounded, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None if any value is in a different currency or the sum overflows.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match or the sum overflows. Use `try_add` for
    /// fallible addition.
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

/// Serde adapter that writes a [`Money`] as a bare decimal number (`24.99`).
///
/// This is the price format of the persisted cart. The wire value carries no
/// currency, so it reads back as USD. Negative and non-finite values are
/// rejected, and so are amounts with a fraction of a cent (`0.125`).
pub mod decimal {
    use super::{Currency, Money};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Relative slack for binary float error, e.g. `24.99 * 100.0 == 2498.9999999999995`.
    const SUB_CENT_TOLERANCE: f64 = 1e-9;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(de::Error::custom(format!(
                "price must be a non-negative number, got {}",
                amount
            )));
        }
        let cents = amount * 100.0;
        if cents > i64::MAX as f64 {
            return Err(de::Error::custom("price out of range"));
        }
        // Amounts are whole cents; anything finer would be lost on rounding.
        if (cents - cents.round()).abs() > cents.max(1.0) * SUB_CENT_TOLERANCE {
            return Err(de::Error::custom(format!(
                "price must be a whole number of cents, got {}",
                amount
            )));
        }
        Ok(Money::from_decimal(amount, Currency::USD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "decimal")]
        price: Money,
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        assert_eq!(Money::from_decimal(12.99, Currency::USD).amount_cents, 1299);
        assert_eq!(Money::from_decimal(10.0, Currency::USD).amount_cents, 1000);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::usd(500).display(), "$5.00");
        assert_eq!(Money::usd(7).display(), "$0.07");
        assert_eq!(Money::usd(-250).display(), "$-2.50");
        assert_eq!(Money::new(1000, Currency::INR).display(), "\u{20b9}10.00");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::usd(1000) + Money::usd(500);
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_try_add_rejects_mismatch_and_overflow() {
        let usd = Money::usd(1000);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
        assert!(Money::usd(i64::MAX).try_add(&Money::usd(1)).is_none());
    }

    #[test]
    fn test_percentage_is_exact() {
        assert_eq!(Money::usd(4000).percentage(10.0), Some(Money::usd(400)));
        assert_eq!(Money::usd(6000).percentage(10.0), Some(Money::usd(600)));
        // 10% of $24.99 is 249.9 cents
        assert_eq!(Money::usd(2499).percentage(10.0), Some(Money::usd(250)));
        // 10% of $0.05 is half a cent, rounded away from zero
        assert_eq!(Money::usd(5).percentage(10.0), Some(Money::usd(1)));
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::usd(1000), Money::usd(500)];
        assert_eq!(Money::try_sum(values.iter(), Currency::USD), Some(Money::usd(1500)));
        assert_eq!(Money::try_sum([].iter(), Currency::USD), Some(Money::usd(0)));
    }

    #[test]
    fn test_decimal_serde() {
        let priced = Priced { price: Money::usd(2499) };
        assert_eq!(serde_json::to_string(&priced).unwrap(), r#"{"price":24.99}"#);

        let back: Priced = serde_json::from_str(r#"{"price":24.99}"#).unwrap();
        assert_eq!(back, priced);

        let whole: Priced = serde_json::from_str(r#"{"price":10}"#).unwrap();
        assert_eq!(whole.price, Money::usd(1000));
    }

    #[test]
    fn test_decimal_rejects_sub_cent_amounts() {
        let result: Result<Priced, _> = serde_json::from_str(r#"{"price":0.125}"#);
        assert!(result.is_err());

        let cents: Priced = serde_json::from_str(r#"{"price":0.13}"#).unwrap();
        assert_eq!(cents.price, Money::usd(13));
        let float_noise: Priced = serde_json::from_str(r#"{"price":24.99}"#).unwrap();
        assert_eq!(float_noise.price, Money::usd(2499));
    }

    #[test]
    fn test_try_sum_over_iterator() {
        let prices = vec![Money::usd(2499), Money::usd(1299), Money::usd(4999)];
        assert_eq!(Money::try_sum(prices.iter(), Currency::USD), Some(Money::usd(8797)));
        assert_eq!(Money::try_sum([Money::usd(1)].iter(), Currency::EUR), None);
    }

    #[test]
    fn test_decimal_rejects_negative() {
        let result: Result<Priced, _> = serde_json::from_str(r#"{"price":-1.5}"#);
        assert!(result.is_err());
    }
}
