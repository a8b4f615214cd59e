// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands share one set of flags:
//
//   split  — copy files into dst_root/<split>/<class>/
//   plan   — print the per-class counts, write nothing
//   config — print the resolved config as JSON
//
// Every flag defaults to the values of the original COVID
// chest X-ray run, so `dataset-splitter split` with no flags
// reproduces it. `--config FILE` replaces all flag values with
// the contents of a JSON file.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive documentation

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::{SplitConfig, DEFAULT_SEED};
use crate::domain::ratios::SplitRatios;
use crate::infra::config_file::load_config;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the dataset and copy files into the destination tree
    Split(SplitArgs),

    /// Dry run: show how each class would be split, copy nothing
    Plan(SplitArgs),

    /// Print the resolved configuration as JSON
    Config(SplitArgs),
}

/// Flags describing one split run.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Source dataset root containing one subdirectory per class
    #[arg(long, default_value = "/kaggle/input/covid-cxr-image-dataset-research/COVID_IEEE")]
    pub src_root: PathBuf,

    /// Output root; train/, val/ and test/ are created inside it
    #[arg(long, default_value = "/kaggle/working/COVID_IEEE")]
    pub dst_root: PathBuf,

    /// Class names (subdirectory names), processed in this order
    #[arg(long, value_delimiter = ',', default_values = ["covid", "normal", "virus"])]
    pub classes: Vec<String>,

    /// Fraction of each class copied to train/
    #[arg(long, default_value_t = 0.7)]
    pub train_ratio: f64,

    /// Fraction of each class copied to val/
    #[arg(long, default_value_t = 0.1)]
    pub val_ratio: f64,

    /// Fraction of each class copied to test/
    /// (test always receives whatever train and val leave over)
    #[arg(long, default_value_t = 0.2)]
    pub test_ratio: f64,

    /// Seed for the shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Give every class its own freshly seeded shuffle
    #[arg(long)]
    pub reseed_per_class: bool,

    /// JSON file with a full split config; overrides all other flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SplitArgs {
    /// Build the SplitConfig for this run, from --config if given.
    pub fn resolve(self) -> Result<SplitConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("Using split config from '{}'", path.display());
                load_config(path)
            }
            None => Ok(self.into()),
        }
    }
}

/// CLI flags → application config. The application layer
/// never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            src_root:         a.src_root,
            dst_root:         a.dst_root,
            classes:          a.classes,
            split_ratios:     SplitRatios::new(a.train_ratio, a.val_ratio, a.test_ratio),
            seed:             a.seed,
            reseed_per_class: a.reseed_per_class,
        }
    }
}
