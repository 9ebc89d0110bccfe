//! Configuration of [`SlidingWindow`](super::SlidingWindow).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`SlidingWindow`](super::SlidingWindow).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct SlidingWindowConfig {
    /// The number of observations kept in the window.
    ///
    /// Signed so that configuration files with zero or negative values are
    /// rejected when the window is built, not when the file is parsed.
    pub window_size: i64,
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self { window_size: 4 }
    }
}

impl SlidingWindowConfig {
    /// Sets the number of observations kept in the window.
    pub fn window_size(mut self, v: i64) -> Self {
        self.window_size = v;
        self
    }

    /// Constructs [`SlidingWindowConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SlidingWindowConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
