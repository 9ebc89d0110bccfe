//! Sliding window of observation tensors.
mod base;
mod config;
pub use base::SlidingWindow;
pub use config::SlidingWindowConfig;
