// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands the resulting
// SplitConfig to the application layer. This is the only
// layer that prints to stdout: ConsoleReporter writes one
// summary line per class and a completion message.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SplitArgs};

use crate::application::split_use_case::SplitUseCase;
use crate::domain::{partition::ClassPartition, traits::SplitReporter};
use crate::infra::config_file::to_json;

#[derive(Parser, Debug)]
#[command(
    name = "dataset-splitter",
    version,
    about = "Split a class-per-directory image dataset into train/val/test folders."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)  => run_split(args),
            Commands::Plan(args)   => run_plan(args),
            Commands::Config(args) => run_config(args),
        }
    }
}

/// Prints progress of a split run to stdout.
pub struct ConsoleReporter {
    completion_message: &'static str,
}

impl ConsoleReporter {
    pub fn new(completion_message: &'static str) -> Self {
        Self { completion_message }
    }
}

impl SplitReporter for ConsoleReporter {
    fn class_partitioned(&mut self, partition: &ClassPartition) {
        println!("{}", partition.summary_line());
    }

    fn finished(&mut self) {
        println!("{}", self.completion_message);
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    let use_case = SplitUseCase::new(args.resolve()?);

    let mut reporter = ConsoleReporter::new("Dataset split completed successfully!");
    let partitions   = use_case.execute(&mut reporter)?;

    tracing::info!(
        "Copied {} files into '{}'",
        partitions.iter().map(|p| p.total()).sum::<usize>(),
        use_case.config().dst_root.display(),
    );
    Ok(())
}

fn run_plan(args: SplitArgs) -> Result<()> {
    let use_case = SplitUseCase::new(args.resolve()?);

    let mut reporter = ConsoleReporter::new("Dry run complete, no files were copied.");
    use_case.plan(&mut reporter)?;
    Ok(())
}

fn run_config(args: SplitArgs) -> Result<()> {
    let cfg = args.resolve()?;
    println!("{}", to_json(&cfg)?);
    Ok(())
}
