use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for report rendering and metric rating bands.
///
/// Every field has a default, so a partial (or absent) TOML file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub ratings: RatingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many nodes the centrality ranking lists.
    #[serde(default = "default_top_central")]
    pub top_central: usize,
    /// How many nodes each clustering ranking (most / least) lists.
    #[serde(default = "default_top_clustered")]
    pub top_clustered: usize,
    /// Labels longer than this are truncated with `...` in the centrality list.
    #[serde(default = "default_centrality_label_width")]
    pub centrality_label_width: usize,
    /// Labels longer than this are truncated with `...` in the clustering lists.
    #[serde(default = "default_clustering_label_width")]
    pub clustering_label_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_central: default_top_central(),
            top_clustered: default_top_clustered(),
            centrality_label_width: default_centrality_label_width(),
            clustering_label_width: default_clustering_label_width(),
        }
    }
}

/// Thresholds that map raw metric values onto rating bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Average path length below this is "excellent".
    #[serde(default = "default_path_excellent")]
    pub path_excellent_below: f64,
    /// Average path length below this is "good".
    #[serde(default = "default_path_good")]
    pub path_good_below: f64,
    /// Average path length below this is "fair"; anything longer is "poor".
    #[serde(default = "default_path_fair")]
    pub path_fair_below: f64,
    /// Average clustering above this is "high".
    #[serde(default = "default_clustering_high")]
    pub clustering_high_above: f64,
    /// Average clustering above this is "moderate"; anything lower is "low".
    #[serde(default = "default_clustering_moderate")]
    pub clustering_moderate_above: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            path_excellent_below: default_path_excellent(),
            path_good_below: default_path_good(),
            path_fair_below: default_path_fair(),
            clustering_high_above: default_clustering_high(),
            clustering_moderate_above: default_clustering_moderate(),
        }
    }
}

/// Load an [`AnalysisConfig`] from a TOML file.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    if !path.exists() {
        return Ok(AnalysisConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse an [`AnalysisConfig`] from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML for this schema.
pub fn parse_config(content: &str) -> Result<AnalysisConfig> {
    let config = toml::from_str::<AnalysisConfig>(content)?;
    Ok(config)
}

const fn default_top_central() -> usize {
    10
}

const fn default_top_clustered() -> usize {
    5
}

const fn default_centrality_label_width() -> usize {
    50
}

const fn default_clustering_label_width() -> usize {
    45
}

const fn default_path_excellent() -> f64 {
    2.5
}

const fn default_path_good() -> f64 {
    4.0
}

const fn default_path_fair() -> f64 {
    6.0
}

const fn default_clustering_high() -> f64 {
    0.85
}

const fn default_clustering_moderate() -> f64 {
    0.6
}
