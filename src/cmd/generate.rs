//! Generate command CLI handler.

use index_script_gen::{
    Driver, GenError, GenerateStats, GeneratorConfig, GeneratorYamlConfig, TestKind,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[allow(clippy::too_many_arguments)]
pub fn run(
    seed: Option<u64>,
    blocks: Option<u64>,
    tuples: Option<usize>,
    kind: Vec<TestKind>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    progress: bool,
) -> anyhow::Result<()> {
    let mut gen_config = match config {
        Some(ref path) => GeneratorYamlConfig::load(path)?.apply(GeneratorConfig::default()),
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = seed {
        gen_config.seed = seed;
    }
    if blocks.is_some() {
        gen_config.blocks = blocks;
    }
    if let Some(tuples) = tuples {
        gen_config.tuples_per_block = tuples;
    }
    if !kind.is_empty() {
        gen_config.kinds = kind;
    }
    gen_config.progress = progress;

    let mut driver = Driver::new(gen_config)?;

    if let Some(ref path) = output {
        let file = File::create(path)?;
        let stats = driver.run(file)?;
        eprintln!(
            "Generated {} blocks ({} tuples) to {}",
            stats.blocks,
            stats.tuples,
            path.display()
        );
    } else {
        let stdout = io::stdout();
        stdout_finished(driver.run(stdout.lock()))?;
    }

    Ok(())
}

/// A reader closing the pipe is how an unbounded run is normally stopped.
fn stdout_finished(result: Result<GenerateStats, GenError>) -> Result<(), GenError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed by reader");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
