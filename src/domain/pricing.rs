use super::invoice::Audience;
use super::money::{Amount, Credits};
use super::play::{Genre, Play};
use crate::error::{BillingError, Result};
use policy::*;
use std::collections::HashMap;

/// Fixed pricing policy. All monetary values are in minor units.
pub mod policy {
    pub const TRAGEDY_BASE: i64 = 40_000;
    pub const TRAGEDY_THRESHOLD: u32 = 30;
    pub const PER_PERSON_OVER: i64 = 1_000;

    pub const COMEDY_BASE: i64 = 30_000;
    pub const COMEDY_THRESHOLD: u32 = 20;
    pub const COMEDY_OVER_FLAT: i64 = 10_000;
    pub const COMEDY_OVER_PER_PERSON: i64 = 500;
    pub const COMEDY_PER_AUDIENCE: i64 = 300;

    pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
    pub const COMEDY_EXTRA_VOLUME_DIVISOR: u32 = 5;

    pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
}

fn tragedy_amount(audience: Audience) -> Amount {
    let mut minor = TRAGEDY_BASE;
    if audience > TRAGEDY_THRESHOLD {
        minor += PER_PERSON_OVER * i64::from(audience - TRAGEDY_THRESHOLD);
    }
    Amount::from_minor(minor)
}

fn comedy_amount(audience: Audience) -> Amount {
    let mut minor = COMEDY_BASE;
    if audience > COMEDY_THRESHOLD {
        minor += COMEDY_OVER_FLAT + COMEDY_OVER_PER_PERSON * i64::from(audience - COMEDY_THRESHOLD);
    }
    // applied whether or not the threshold was crossed
    minor += COMEDY_PER_AUDIENCE * i64::from(audience);
    Amount::from_minor(minor)
}

fn no_bonus(_audience: Audience) -> Credits {
    Credits::ZERO
}

fn comedy_bonus(audience: Audience) -> Credits {
    Credits::new(u64::from(audience / COMEDY_EXTRA_VOLUME_DIVISOR))
}

/// Credits every performance earns regardless of genre.
pub fn base_credits(audience: Audience) -> Credits {
    Credits::new(u64::from(
        audience.saturating_sub(BASE_VOLUME_CREDIT_THRESHOLD),
    ))
}

/// One row of the pricing table: how a genre turns an audience into money
/// and bonus credits.
#[derive(Debug, Clone)]
pub struct GenreRule {
    pub genre: Genre,
    pub amount: fn(Audience) -> Amount,
    pub bonus_credits: fn(Audience) -> Credits,
}

impl GenreRule {
    pub fn new(
        genre: Genre,
        amount: fn(Audience) -> Amount,
        bonus_credits: fn(Audience) -> Credits,
    ) -> Self {
        Self {
            genre,
            amount,
            bonus_credits,
        }
    }

    pub fn tragedy() -> Self {
        Self::new(Genre::Tragedy, tragedy_amount, no_bonus)
    }

    pub fn comedy() -> Self {
        Self::new(Genre::Comedy, comedy_amount, comedy_bonus)
    }
}

/// Amount and credits for a single performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    pub amount: Amount,
    pub credits: Credits,
}

/// Prices performances by looking their genre up in a rule table.
///
/// A genre with no row is an error, never a zero charge.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rules: HashMap<Genre, GenreRule>,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl PricingEngine {
    /// The house rules: tragedy and comedy.
    pub fn standard() -> Self {
        Self::with_rules([GenreRule::tragedy(), GenreRule::comedy()])
    }

    pub fn with_rules(rules: impl IntoIterator<Item = GenreRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.genre.clone(), rule))
                .collect(),
        }
    }

    pub fn supports(&self, genre: &Genre) -> bool {
        self.rules.contains_key(genre)
    }

    fn rule_for(&self, genre: &Genre) -> Result<&GenreRule> {
        self.rules
            .get(genre)
            .ok_or_else(|| BillingError::UnsupportedGenre {
                genre: genre.to_string(),
            })
    }

    pub fn amount_for(&self, play: &Play, audience: Audience) -> Result<Amount> {
        let rule = self.rule_for(&play.genre)?;
        Ok((rule.amount)(audience))
    }

    pub fn credits_for(&self, play: &Play, audience: Audience) -> Result<Credits> {
        let rule = self.rule_for(&play.genre)?;
        Ok(base_credits(audience) + (rule.bonus_credits)(audience))
    }

    pub fn price(&self, play: &Play, audience: Audience) -> Result<Charge> {
        let rule = self.rule_for(&play.genre)?;
        Ok(Charge {
            amount: (rule.amount)(audience),
            credits: base_credits(audience) + (rule.bonus_credits)(audience),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hamlet() -> Play {
        Play::new("Hamlet", Genre::Tragedy)
    }

    fn as_you_like_it() -> Play {
        Play::new("As You Like It", Genre::Comedy)
    }

    #[test]
    fn test_tragedy_amount() {
        let engine = PricingEngine::standard();
        assert_eq!(engine.amount_for(&hamlet(), 0).unwrap(), Amount::from_minor(40_000));
        assert_eq!(engine.amount_for(&hamlet(), 30).unwrap(), Amount::from_minor(40_000));
        assert_eq!(engine.amount_for(&hamlet(), 31).unwrap(), Amount::from_minor(41_000));
        assert_eq!(engine.amount_for(&hamlet(), 55).unwrap(), Amount::from_minor(65_000));
    }

    #[test]
    fn test_comedy_amount() {
        let engine = PricingEngine::standard();
        // linear term alone below the threshold
        assert_eq!(engine.amount_for(&as_you_like_it(), 0).unwrap(), Amount::from_minor(30_000));
        assert_eq!(engine.amount_for(&as_you_like_it(), 20).unwrap(), Amount::from_minor(36_000));
        assert_eq!(engine.amount_for(&as_you_like_it(), 21).unwrap(), Amount::from_minor(46_800));
        assert_eq!(engine.amount_for(&as_you_like_it(), 35).unwrap(), Amount::from_minor(58_000));
    }

    #[test]
    fn test_volume_credits() {
        let engine = PricingEngine::standard();
        assert_eq!(engine.credits_for(&hamlet(), 10).unwrap(), Credits::ZERO);
        assert_eq!(engine.credits_for(&hamlet(), 55).unwrap(), Credits::new(25));
        assert_eq!(engine.credits_for(&as_you_like_it(), 10).unwrap(), Credits::new(2));
        assert_eq!(engine.credits_for(&as_you_like_it(), 35).unwrap(), Credits::new(12));
    }

    #[test]
    fn test_price_combines_amount_and_credits() {
        let charge = PricingEngine::standard().price(&as_you_like_it(), 35).unwrap();
        assert_eq!(
            charge,
            Charge {
                amount: Amount::from_minor(58_000),
                credits: Credits::new(12),
            }
        );
    }

    #[test]
    fn test_unsupported_genre_is_an_error() {
        let engine = PricingEngine::standard();
        let henry_v = Play::new("Henry V", Genre::Other("history".to_string()));

        assert!(matches!(
            engine.amount_for(&henry_v, 53),
            Err(BillingError::UnsupportedGenre { ref genre }) if genre == "history"
        ));
        assert!(matches!(
            engine.credits_for(&henry_v, 53),
            Err(BillingError::UnsupportedGenre { .. })
        ));
        assert!(!engine.supports(&henry_v.genre));
    }

    #[test]
    fn test_genre_built_from_name_uses_its_rule() {
        let engine = PricingEngine::standard();
        let play = Play::new("As You Like It", Genre::Other("comedy".to_string()));

        assert!(engine.supports(&play.genre));
        assert_eq!(
            engine.price(&play, 35).unwrap(),
            engine.price(&as_you_like_it(), 35).unwrap()
        );
    }

    #[test]
    fn test_new_genre_is_a_table_row() {
        fn history_amount(audience: Audience) -> Amount {
            Amount::from_minor(20_000 + 100 * i64::from(audience))
        }

        let history = Genre::Other("history".to_string());
        let engine = PricingEngine::with_rules([
            GenreRule::tragedy(),
            GenreRule::new(history.clone(), history_amount, no_bonus),
        ]);
        let henry_v = Play::new("Henry V", history);

        assert_eq!(engine.amount_for(&henry_v, 53).unwrap(), Amount::from_minor(25_300));
        assert_eq!(engine.credits_for(&henry_v, 53).unwrap(), Credits::new(23));
        assert!(engine.amount_for(&as_you_like_it(), 10).is_err());
    }
}
