//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a scrollwatch.toml, and if present we load
//! settings from there. Every watcher option has a counterpart here so the
//! demo can be tuned without recompiling; the menu width is the one purely
//! cosmetic extra.

use crate::error::Result;
use crate::resolve::DEFAULT_FOCUS_RATIO;
use crate::watcher::Options;
use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from scrollwatch.toml or falling back to defaults.
pub struct Config {
    #[facet(default = true)]
    /// Suppress notifications whose focused index did not change.
    pub throttle: bool,
    #[facet(default = "height".to_string())]
    /// Resolution mode: "height", "focus-line" or "none".
    pub resolution: String,
    #[facet(default = 0)]
    /// Bias toward earlier sections in height resolution.
    pub top_down_weight: i64,
    #[facet(default = 0)]
    /// Inset applied to the top of the view.
    pub view_margin_top: i64,
    #[facet(default = 0)]
    /// Inset applied to the bottom of the view.
    pub view_margin_bottom: i64,
    #[facet(default = 5)]
    /// Rows from the start of scroll travel that force the first section.
    pub sticky_offset_top: i64,
    #[facet(default = 5)]
    /// Rows from the end of scroll travel that force the last section.
    pub sticky_offset_bottom: i64,
    #[facet(default = false)]
    /// Force each section boundary to end where the next begins.
    pub clamp: bool,
    #[facet(default = DEFAULT_FOCUS_RATIO)]
    /// Position of the focus line within the view, as a fraction.
    pub focus_ratio: f64,
    #[facet(default = 0.0)]
    /// Fixed offset added to the focus line.
    pub focus_offset: f64,
    #[facet(default = 32)]
    /// Width of the navigation menu pane, in columns.
    pub menu_width: u16,
}

impl Config {
    #[must_use]
    /// Load configuration from scrollwatch.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("scrollwatch.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// Convert into watcher options.
    ///
    /// # Errors
    ///
    /// [`crate::error::WatchError::UnknownResolution`] when the resolution
    /// string names no known mode.
    pub fn options<E>(&self) -> Result<Options<E>> {
        Ok(Options {
            throttle: self.throttle,
            resolution: self.resolution.parse()?,
            top_down_weight: self.top_down_weight,
            view_margin_top: self.view_margin_top,
            view_margin_bottom: self.view_margin_bottom,
            sticky_offset_top: self.sticky_offset_top,
            sticky_offset_bottom: self.sticky_offset_bottom,
            clamp: self.clamp,
            focus_ratio: self.focus_ratio,
            focus_offset: self.focus_offset,
            ..Options::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
