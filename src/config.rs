//! Editor configuration
//!
//! Settings come from an optional JSON file; command-line flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{EditorError, Result};
use crate::polygon::{OrderingPolicy, MAX_VERTICES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub max_vertices: usize,
    pub ordering: OrderingPolicy,
    pub fill_color: Color,
    pub outline_color: Color,
    /// Fixed seed for vertex colors; wall clock when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            max_vertices: MAX_VERTICES,
            ordering: OrderingPolicy::default(),
            fill_color: Color::DARKGRAY,
            outline_color: Color::DARKGRAY,
            seed: None,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "scanfill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Click points, then fill the polygon they outline", long_about = None)]
pub struct Args {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Window height
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Resolution as WxH (e.g. 1024x768), overrides width and height
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// Disable VSync for uncapped framerate
    #[arg(long)]
    pub no_vsync: bool,

    /// Vertex ordering used when filling
    #[arg(short, long, value_enum)]
    pub ordering: Option<OrderingPolicy>,

    /// Seed for vertex marker colors
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Merge the config file (if any) with flag overrides
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(res) = &self.resolution {
            let (w, h) = parse_resolution(res)?;
            config.width = w;
            config.height = h;
        }
        if self.no_vsync {
            config.vsync = false;
        }
        if let Some(ordering) = self.ordering {
            config.ordering = ordering;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

/// Parse `WxH` (e.g. `1920x1080`)
pub fn parse_resolution(s: &str) -> Result<(u32, u32)> {
    let invalid = || EditorError::InvalidResolution(s.to_string());
    let (w, h) = s.split_once('x').ok_or_else(invalid)?;
    let w = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let h = h.trim().parse::<u32>().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}
