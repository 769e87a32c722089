//! Scored records stored on a board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Anything a [`Scoreboard`](super::Scoreboard) can rank.
///
/// The board only ever looks at the score; everything else an entry carries
/// is passed through untouched.
pub trait Scored {
    fn score(&self) -> i64;
}

impl Scored for i64 {
    fn score(&self) -> i64 {
        *self
    }
}

/// A named score, as recorded at the end of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEntry {
    name: String,
    score: i64,
}

impl GameEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

impl Scored for GameEntry {
    fn score(&self) -> i64 {
        self.score
    }
}

impl fmt::Display for GameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// Parses `NAME:SCORE`. The split happens at the last colon, so names may
/// themselves contain colons.
impl FromStr for GameEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, score) = s
            .rsplit_once(':')
            .ok_or_else(|| Error::InvalidEntry(format!("expected NAME:SCORE, got '{s}'")))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidEntry(format!("missing name in '{s}'")));
        }

        let score = score
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::InvalidEntry(format!("bad score in '{s}': {e}")))?;

        Ok(Self::new(name, score))
    }
}
