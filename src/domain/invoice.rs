use super::play::PlayId;
use serde::{Deserialize, Serialize};

/// Number of seats sold for a performance.
pub type Audience = u32;

/// One billed showing of a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID", alias = "playId", alias = "play_id")]
    pub play_id: PlayId,
    pub audience: Audience,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: Audience) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's bill for an ordered list of performances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}
