//! Validated sliding-window sizes.

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult};

/// Accepted range for the all-words window.
pub const WIN_ALL_RANGE: RangeInclusive<usize> = 5..=500;

/// Accepted range for the part-of-speech window.
pub const WIN_POS_RANGE: RangeInclusive<usize> = 5..=200;

/// Default all-words window.
pub const DEFAULT_WIN_ALL: usize = 50;

/// Default part-of-speech window.
pub const DEFAULT_WIN_POS: usize = 11;

/// The two window sizes used for a whole batch.
///
/// Only [`WindowSizes::new`] constructs this type, so a value in hand is
/// always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WindowSizes {
    win_all: usize,
    win_pos: usize,
}

impl Default for WindowSizes {
    fn default() -> Self {
        Self {
            win_all: DEFAULT_WIN_ALL,
            win_pos: DEFAULT_WIN_POS,
        }
    }
}

impl WindowSizes {
    /// Validate and pair the two window sizes.
    pub fn new(win_all: usize, win_pos: usize) -> ConfigResult<Self> {
        check("win_all", win_all, &WIN_ALL_RANGE)?;
        check("win_pos", win_pos, &WIN_POS_RANGE)?;
        Ok(Self { win_all, win_pos })
    }

    /// Window for all-words MATTR.
    pub const fn all(&self) -> usize {
        self.win_all
    }

    /// Window for category MATTR.
    pub const fn pos(&self) -> usize {
        self.win_pos
    }
}

fn check(name: &'static str, value: usize, range: &RangeInclusive<usize>) -> ConfigResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidWindow {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
