//! Deck Configuration Module
//! Deck title, window settings and page content, loaded from JSON.

use crate::charts::ChartKind;
use crate::deck::TOTAL_PAGES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Deck shipped with the binary
const DEFAULT_DECK: &str = include_str!("../assets/deck.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid deck config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Deck has {found} pages, at most {max} are supported")]
    TooManyPages { found: usize, max: usize },
    #[error("Window size must be positive")]
    InvalidWindow,
    #[error("Page {page} declares chart {found:?}, expected {expected:?}")]
    ChartPageMismatch {
        page: usize,
        found: Option<ChartKind>,
        expected: Option<ChartKind>,
    },
}

/// Content of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Chart drawn on this page
    #[serde(default)]
    pub chart: Option<ChartKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

fn default_delay_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub title: String,
    #[serde(default)]
    pub window: WindowSettings,
    /// Delay before a chart is built after its page is entered
    #[serde(default = "default_delay_ms")]
    pub provision_delay_ms: u64,
    /// Open the exported file with the system viewer
    #[serde(default = "default_true")]
    pub open_after_export: bool,
    pub pages: Vec<PageContent>,
}

impl DeckConfig {
    /// Parse and validate a JSON deck.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The deck embedded in the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_DECK)
    }

    /// Load from `path`, or fall back to the embedded deck.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                let config = Self::from_json(&json)?;
                info!(path = %path.display(), pages = config.pages.len(), "loaded deck config");
                Ok(config)
            }
            None => Self::embedded(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.len() > TOTAL_PAGES {
            return Err(ConfigError::TooManyPages {
                found: self.pages.len(),
                max: TOTAL_PAGES,
            });
        }
        if self.pages.len() < TOTAL_PAGES {
            warn!(
                found = self.pages.len(),
                expected = TOTAL_PAGES,
                "deck has fewer pages than navigation expects"
            );
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::InvalidWindow);
        }
        // Chart placement must match CHART_PAGES
        for (page, content) in self.pages.iter().enumerate() {
            let expected = ChartKind::for_page(page);
            if content.chart != expected {
                return Err(ConfigError::ChartPageMismatch {
                    page,
                    found: content.chart,
                    expected,
                });
            }
        }
        Ok(())
    }

    pub fn provision_delay(&self) -> Duration {
        Duration::from_millis(self.provision_delay_ms)
    }

    /// Surfaces declared by the pages, i.e. the charts that can be drawn.
    pub fn chart_surfaces(&self) -> Vec<&'static str> {
        self.pages
            .iter()
            .filter_map(|page| page.chart)
            .map(|kind| kind.surface())
            .collect()
    }

    pub fn page(&self, index: usize) -> Option<&PageContent> {
        self.pages.get(index)
    }
}
