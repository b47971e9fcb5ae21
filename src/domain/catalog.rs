use super::play::{Play, PlayId};
use crate::error::{BillingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only lookup from play id to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    pub fn from_plays<I, K>(plays: I) -> Self
    where
        I: IntoIterator<Item = (K, Play)>,
        K: Into<PlayId>,
    {
        Self {
            plays: plays.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }

    /// Resolves a play id, failing with `UnknownPlay` when it is absent.
    pub fn lookup(&self, play_id: &str) -> Result<&Play> {
        self.plays
            .get(play_id)
            .ok_or_else(|| BillingError::UnknownPlay {
                play_id: play_id.to_string(),
            })
    }

    pub fn contains(&self, play_id: &str) -> bool {
        self.plays.contains_key(play_id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}
