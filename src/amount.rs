use std::fmt;
use thiserror::Error;

/// Rejected conversion into an [`Amount`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmountError {
    #[error("amount {0} is not a finite number")]
    NotFinite(f64),
    #[error("amount {0} is out of range")]
    OutOfRange(String),
}

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
///
/// Arithmetic is checked; callers decide what an overflow means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 10_000;

    pub const ZERO: Amount = Amount(0);

    pub fn from_float(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }
        let scaled = (value * Self::SCALE as f64).round();
        // i64::MAX as f64 rounds up to 2^63, hence the exclusive bound
        if !(i64::MIN as f64..i64::MAX as f64).contains(&scaled) {
            return Err(AmountError::OutOfRange(value.to_string()));
        }
        Ok(Amount(scaled as i64))
    }

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    /// Whole currency units, e.g. `Amount::from_units(500)` is `500`.
    pub fn from_units(value: i64) -> Result<Self, AmountError> {
        value
            .checked_mul(Self::SCALE)
            .map(Amount)
            .ok_or_else(|| AmountError::OutOfRange(value.to_string()))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }
}

/// Renders the shortest form: `500`, `10.5`, `-0.25`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let whole = abs / scale;
        let frac = abs % scale;
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{frac:04}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}
