use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// One play-through, from the start action to the post-completion reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub mode: Mode,
    pub player_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    pub(crate) fn new(mode: Mode, player_name: String, started_at: DateTime<Utc>) -> Self {
        Self {
            mode,
            player_name,
            started_at,
            ended_at: None,
        }
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        (self.ended_at.unwrap_or(now) - self.started_at)
            .num_seconds()
            .max(0) as u32
    }

    pub(crate) fn finish(&mut self, now: DateTime<Utc>) {
        // clock skew must not produce an end before the start
        self.ended_at = Some(now.max(self.started_at));
    }
}
