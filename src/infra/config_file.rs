// ============================================================
// Layer 6 — Config File Store
// ============================================================
// Reads and writes a SplitConfig as JSON, so a run can be
// described in a file instead of on the command line:
//
//   {
//     "src_root": "/data/COVID_IEEE",
//     "dst_root": "/out/COVID_IEEE",
//     "classes": ["covid", "normal", "virus"],
//     "split_ratios": { "train": 0.7, "val": 0.1, "test": 0.2 },
//     "seed": 42,
//     "reseed_per_class": false
//   }
//
// "seed" and "reseed_per_class" may be left out and fall back
// to 42 and false.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::split_use_case::SplitConfig;

/// Load a SplitConfig from a JSON file.
pub fn load_config(path: &Path) -> Result<SplitConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid split config in '{}'", path.display()))?;

    tracing::debug!("Loaded split config from '{}'", path.display());
    Ok(cfg)
}

/// Render a SplitConfig as pretty-printed JSON
pub fn to_json(cfg: &SplitConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(cfg)?)
}
