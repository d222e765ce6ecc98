//! Block generation loop.
//!
//! For each block the driver picks a kind, builds a schema under the kind's
//! policy, generates candidate tuples, collapses duplicates and hands the
//! block to the emitter. All randomness comes from one seeded `StdRng`, so a
//! seed fully determines the output.

use crate::catalog::TypeCatalog;
use crate::dedup::Deduplicator;
use crate::emitter::{ScriptEmitter, TestBlock};
use crate::error::{GenError, Result};
use crate::kind::TestKind;
use crate::schema::SchemaBuilder;
use crate::tuple::generate_tuple;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tracing::{debug, info};

pub const DEFAULT_TUPLES_PER_BLOCK: usize = 10;
pub const DEFAULT_GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Blocks to emit; `None` runs until the process is killed
    pub blocks: Option<u64>,
    /// Candidate tuples per block, before deduplication
    pub tuples_per_block: usize,
    /// Kinds each block is drawn from
    pub kinds: Vec<TestKind>,
    /// Name written into the leading comment
    pub generator_name: String,
    /// Show progress on stderr
    pub progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            blocks: None,
            tuples_per_block: DEFAULT_TUPLES_PER_BLOCK,
            kinds: vec![TestKind::UniqueIntsHash],
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
            progress: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tuples_per_block == 0 {
            return Err(GenError::InvalidConfig(
                "tuples per block must be greater than 0".to_string(),
            ));
        }
        if self.kinds.is_empty() {
            return Err(GenError::InvalidConfig(
                "at least one test kind is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Counters for a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Blocks emitted
    pub blocks: u64,
    /// Candidate tuples generated
    pub candidates: u64,
    /// Distinct tuples emitted
    pub tuples: u64,
    /// Candidates dropped as duplicates
    pub duplicates: u64,
    /// Script lines written, preamble and trailer included
    pub lines: u64,
}

pub struct Driver {
    config: GeneratorConfig,
    catalog: TypeCatalog,
    rng: StdRng,
    next_id: u64,
    stats: GenerateStats,
}

impl Driver {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let catalog = TypeCatalog::standard()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            catalog,
            rng,
            next_id: 0,
            stats: GenerateStats::default(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn stats(&self) -> &GenerateStats {
        &self.stats
    }

    /// Generate the next block without writing it.
    pub fn next_block(&mut self) -> Result<TestBlock> {
        let kind = self.pick_kind();
        let schema = SchemaBuilder::new(&self.catalog).build(kind.schema_policy(), &mut self.rng)?;

        let mut dedup = Deduplicator::new();
        for _ in 0..self.config.tuples_per_block {
            let tuple = generate_tuple(&schema, &mut self.rng);
            dedup.insert(&schema, tuple)?;
        }

        let name = kind.test_name(self.next_id);
        self.next_id += 1;

        debug!(
            block = %name,
            columns = schema.len(),
            candidates = dedup.seen(),
            distinct = dedup.len(),
            "generated block"
        );

        self.stats.blocks += 1;
        self.stats.candidates += dedup.seen() as u64;
        self.stats.tuples += dedup.len() as u64;
        self.stats.duplicates += dedup.duplicates() as u64;

        Ok(TestBlock {
            name,
            kind,
            schema,
            tuples: dedup.into_sorted(),
        })
    }

    /// Write the whole script to `out`.
    ///
    /// A bounded run ends with the `done` trailer and returns its stats; an
    /// unbounded run only returns on error.
    pub fn run<W: Write>(&mut self, out: W) -> Result<GenerateStats> {
        info!(
            seed = self.config.seed,
            blocks = ?self.config.blocks,
            kinds = ?self.config.kinds,
            "starting generation"
        );

        let mut emitter = ScriptEmitter::new(out);
        emitter.write_preamble(&self.config.generator_name)?;

        let progress_bar = self.config.progress.then(|| progress_bar(self.config.blocks));

        let mut emitted = 0u64;
        while self.config.blocks.map_or(true, |limit| emitted < limit) {
            let block = self.next_block()?;
            emitter.emit_block(&block)?;
            emitted += 1;
            if let Some(ref pb) = progress_bar {
                pb.inc(1);
            }
        }

        emitter.write_trailer()?;
        self.stats.lines = emitter.lines_written();
        emitter.into_inner()?;

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("Generated {} blocks", self.stats.blocks));
        }

        info!(
            blocks = self.stats.blocks,
            tuples = self.stats.tuples,
            duplicates = self.stats.duplicates,
            lines = self.stats.lines,
            "generation complete"
        );

        Ok(self.stats.clone())
    }

    fn pick_kind(&mut self) -> TestKind {
        let kinds = &self.config.kinds;
        if kinds.len() == 1 {
            kinds[0]
        } else {
            kinds[self.rng.random_range(0..kinds.len())]
        }
    }
}

fn progress_bar(blocks: Option<u64>) -> ProgressBar {
    match blocks {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} blocks {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} blocks")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        }
    }
}
