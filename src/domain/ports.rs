use super::money::Amount;

/// Renders an amount in minor units as a display currency string.
pub trait CurrencyFormatter {
    fn format(&self, amount: Amount) -> String;
}
