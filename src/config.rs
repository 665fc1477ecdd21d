// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Conversion configuration

use crate::floor::{BuildOptions, DEFAULT_AREA_KIND, DEFAULT_WALL_KIND};
use crate::geometry::EndCapPolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up by [`ConvertConfig::load`]
pub const CONFIG_FILE: &str = "floormesh.toml";

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Wall end treatment
    pub end_caps: EndCapPolicy,
    /// Line kind extruded into walls
    pub wall_kind: String,
    /// Area kind traced into polygons
    pub area_kind: String,
    /// Directory receiving the OBJ files
    pub output_dir: PathBuf,
    /// Output file name prefix, followed by the floor name
    pub file_prefix: String,
    /// Convert floors in parallel
    pub parallel: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            end_caps: EndCapPolicy::default(),
            wall_kind: DEFAULT_WALL_KIND.to_string(),
            area_kind: DEFAULT_AREA_KIND.to_string(),
            output_dir: PathBuf::from("."),
            file_prefix: "floor_".to_string(),
            parallel: false,
        }
    }
}

impl ConvertConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: ConvertConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `floormesh.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `FLOORMESH_*` overrides from a variable lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(output_dir) = lookup("FLOORMESH_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(end_caps) = lookup("FLOORMESH_END_CAPS") {
            self.end_caps = end_caps
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("Invalid FLOORMESH_END_CAPS")?;
        }

        if let Some(parallel) = lookup("FLOORMESH_PARALLEL") {
            self.parallel = parallel
                .trim()
                .parse::<bool>()
                .with_context(|| format!("Invalid FLOORMESH_PARALLEL: {:?}", parallel))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Options handed to the floor builder
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            end_caps: self.end_caps,
            wall_kind: self.wall_kind.clone(),
            area_kind: self.area_kind.clone(),
        }
    }
}
