// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates a dataset split in order:
//
//   Step 1: Validate the config             (Layer 3 - domain)
//   Step 2: Create dst_root/<split>/<class> (Layer 6 - infra)
//   Step 3: For each class, in config order:
//             a. List eligible files        (Layer 4 - data)
//             b. Shuffle + partition        (Layer 4 - data)
//             c. Report the summary line    (Layer 1 via SplitReporter)
//             d. Copy train, then val, then test (Layer 6 - infra)
//
// `plan` runs steps 1, 3a, 3b and 3c only: the same
// assignment is computed but nothing is written.
//
// Random source:
//   By default one StdRng is seeded once per run and handed
//   to each class in turn, so the assignment of a class also
//   depends on the classes processed before it. With
//   `reseed_per_class` every class gets a fresh generator
//   seeded with the same seed.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            rand crate documentation (SeedableRng)

use anyhow::{bail, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{lister::ClassDirLister, splitter::partition_class};
use crate::domain::{
    partition::ClassPartition,
    ratios::SplitRatios,
    split::Split,
    traits::{ItemSource, SplitReporter},
};
use crate::infra::{copier::copy_files, layout::prepare_destination};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything a run needs. Serialisable so it can be kept in a
// JSON file and passed with --config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub src_root:     PathBuf,
    pub dst_root:     PathBuf,
    pub classes:      Vec<String>,
    pub split_ratios: SplitRatios,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub reseed_per_class: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            src_root:         PathBuf::from("/kaggle/input/covid-cxr-image-dataset-research/COVID_IEEE"),
            dst_root:         PathBuf::from("/kaggle/working/COVID_IEEE"),
            classes:          vec!["covid".to_string(), "normal".to_string(), "virus".to_string()],
            split_ratios:     SplitRatios::default(),
            seed:             DEFAULT_SEED,
            reseed_per_class: false,
        }
    }
}

impl SplitConfig {
    /// Check the config before anything touches the filesystem.
    pub fn validate(&self) -> Result<()> {
        self.split_ratios.validate()?;

        for class in &self.classes {
            if class.trim().is_empty() {
                bail!("Class names must not be empty");
            }
        }

        if self.classes.is_empty() {
            tracing::warn!("No classes configured, nothing will be split");
        }

        if !self.split_ratios.sums_to_one() {
            tracing::warn!(
                "Split ratios sum to {:.6}, not 1.0; test still receives the remainder",
                self.split_ratios.sum()
            );
        }

        Ok(())
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Run the full split, reading classes from `src_root`.
    pub fn execute(&self, reporter: &mut dyn SplitReporter) -> Result<Vec<ClassPartition>> {
        let source = ClassDirLister::new(&self.config.src_root);
        self.execute_with(&source, reporter)
    }

    /// Run the full split against any ItemSource.
    fn execute_with(
        &self,
        source:   &dyn ItemSource,
        reporter: &mut dyn SplitReporter,
    ) -> Result<Vec<ClassPartition>> {
        let cfg = &self.config;
        cfg.validate()?;

        tracing::info!(
            "Splitting {} classes from '{}' into '{}' (seed {})",
            cfg.classes.len(),
            cfg.src_root.display(),
            cfg.dst_root.display(),
            cfg.seed,
        );

        prepare_destination(&cfg.dst_root, &cfg.classes)?;

        let partitions = self.partition_each(source, |partition| {
            reporter.class_partitioned(partition);

            for split in Split::ALL {
                copy_files(partition.files(split), &cfg.dst_root, split, &partition.class)?;
            }

            tracing::info!("Copied {} files for class '{}'", partition.total(), partition.class);
            Ok(())
        })?;

        reporter.finished();
        Ok(partitions)
    }

    /// Compute and report the split assignment without writing anything.
    pub fn plan(&self, reporter: &mut dyn SplitReporter) -> Result<Vec<ClassPartition>> {
        let source = ClassDirLister::new(&self.config.src_root);
        self.plan_with(&source, reporter)
    }

    pub fn plan_with(
        &self,
        source:   &dyn ItemSource,
        reporter: &mut dyn SplitReporter,
    ) -> Result<Vec<ClassPartition>> {
        self.config.validate()?;

        let partitions = self.partition_each(source, |partition| {
            reporter.class_partitioned(partition);
            Ok(())
        })?;

        reporter.finished();
        Ok(partitions)
    }

    /// List and partition every class in config order, calling
    /// `on_class` right after each class is partitioned.
    fn partition_each<F>(&self, source: &dyn ItemSource, mut on_class: F) -> Result<Vec<ClassPartition>>
    where
        F: FnMut(&ClassPartition) -> Result<()>,
    {
        let cfg        = &self.config;
        let mut shared = StdRng::seed_from_u64(cfg.seed);
        let mut out    = Vec::with_capacity(cfg.classes.len());

        for class in &cfg.classes {
            let items = source.list_items(class)?;

            let partition = if cfg.reseed_per_class {
                let mut fresh = StdRng::seed_from_u64(cfg.seed);
                partition_class(class, items, &cfg.split_ratios, &mut fresh)
            } else {
                partition_class(class, items, &cfg.split_ratios, &mut shared)
            };

            on_class(&partition)?;
            out.push(partition);
        }

        Ok(out)
    }
}
