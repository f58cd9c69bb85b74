use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Medium,
    Difficult,
}

impl Level {
    /// Maps the numeric level selector (1, 2, 3) to a level.
    pub fn from_selector(level: i32) -> Result<Self, Error> {
        match level {
            1 => Ok(Level::Easy),
            2 => Ok(Level::Medium),
            3 => Ok(Level::Difficult),
            _ => Err(Error::Level { level }),
        }
    }

    pub fn selector(self) -> i32 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Difficult => 3,
        }
    }

    fn index(self) -> usize { self.selector() as usize - 1 }
}

/// Acceptable possibility range for one level. Easy carries only a floor,
/// Difficult only a ceiling, Medium both. Thresholds are `u32` so tests can
/// force values no score can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl Band {
    pub const fn at_least(min: u32) -> Self { Self { min: Some(min), max: None } }
    pub const fn at_most(max: u32) -> Self { Self { min: None, max: Some(max) } }
    pub const fn between(min: u32, max: u32) -> Self { Self { min: Some(min), max: Some(max) } }

    pub fn contains(self, score: u32) -> bool {
        self.min.map_or(true, |m| score >= m) && self.max.map_or(true, |m| score <= m)
    }

    /// How far `score` sits outside the band; 0 when inside. Used to pick
    /// the fallback candidate once the retry budget runs out.
    pub fn distance(self, score: u32) -> u32 {
        if let Some(m) = self.min {
            if score < m { return m - score; }
        }
        if let Some(m) = self.max {
            if score > m { return score - m; }
        }
        0
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Full regeneration attempts before falling back to the best candidate.
    pub max_attempts: usize,
    /// Wall-clock cap on the retry loop, checked between attempts.
    pub time_budget: Duration,
    /// Calibration band per level, indexed Easy/Medium/Difficult.
    pub bands: [Band; 3],
    /// How many cells the carve pass tries to clear per level.
    pub carve_targets: [usize; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 64,
            time_budget: Duration::from_millis(750),
            bands: [Band::at_least(80), Band::between(45, 90), Band::at_most(65)],
            carve_targets: [36, 50, 58],
        }
    }
}

impl GeneratorConfig {
    pub fn band(&self, level: Level) -> Band {
        self.bands[level.index()]
    }

    pub fn carve_target(&self, level: Level) -> usize {
        self.carve_targets[level.index()]
    }
}
