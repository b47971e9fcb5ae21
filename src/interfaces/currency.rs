use crate::domain::money::Amount;
use crate::domain::ports::CurrencyFormatter;
use crate::error::BillingError;
use rusty_money::{Formatter, Money, Params, Position, iso};
use std::fmt;
use std::str::FromStr;

/// Locales a statement can be rendered for. Only the currency display
/// changes; the statement text stays English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
}

impl FromStr for Locale {
    type Err = BillingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" => Ok(Locale::DeDe),
            "fr-fr" => Ok(Locale::FrFr),
            _ => Err(BillingError::UnsupportedLocale(value.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        };
        f.write_str(tag)
    }
}

/// Currency display for a locale, backed by `rusty_money`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    locale: Locale,
    currency: &'static iso::Currency,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl CurrencyFormat {
    pub fn for_locale(locale: Locale) -> Self {
        let currency = match locale {
            Locale::EnUs => iso::USD,
            Locale::EnGb => iso::GBP,
            Locale::DeDe | Locale::FrFr => iso::EUR,
        };
        Self { locale, currency }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> &'static iso::Currency {
        self.currency
    }

    fn params(&self) -> Params {
        let base = Params {
            rounding: Some(self.currency.exponent),
            symbol: Some(self.currency.symbol),
            code: Some(self.currency.iso_alpha_code),
            ..Default::default()
        };
        // Euro locales put the symbol after the amount
        let suffixed = vec![
            Position::Sign,
            Position::Amount,
            Position::Space,
            Position::Symbol,
        ];

        match self.locale {
            Locale::EnUs | Locale::EnGb => base,
            Locale::DeDe => Params {
                digit_separator: '.',
                exponent_separator: ',',
                positions: suffixed,
                ..base
            },
            Locale::FrFr => Params {
                digit_separator: ' ',
                exponent_separator: ',',
                positions: suffixed,
                ..base
            },
        }
    }
}

impl CurrencyFormatter for CurrencyFormat {
    /// Formats minor units, e.g. `123000` as `$1,230.00`.
    fn format(&self, amount: Amount) -> String {
        let money = Money::from_minor(amount.minor(), self.currency);
        Formatter::money(&money, self.params())
    }
}
