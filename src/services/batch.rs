//! Fixed-size worker pool draining a list of input images.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ConvertError;
use crate::services::conversion::ConversionPipeline;

/// Outcome of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output)` for every image written
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// `(input, error)` for every image skipped
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn succeeded(&self) -> usize {
        self.converted.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs conversions on a dedicated pool of `workers` threads.
pub struct BatchRunner {
    pool: ThreadPool,
    workers: usize,
}

impl BatchRunner {
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("pixmosaic-worker-{i}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Convert every input and wait for all of them.
    ///
    /// A failed item is logged and recorded; it never stops its siblings.
    /// Inputs whose output path is already claimed by an earlier input fail
    /// with [`ConvertError::DuplicateOutput`] without being converted.
    pub fn run(&self, pipeline: &ConversionPipeline, inputs: &[PathBuf]) -> BatchReport {
        tracing::info!(
            images = inputs.len(),
            workers = self.workers,
            mode = %pipeline.mode(),
            "Starting batch"
        );

        let planned = claim_outputs(pipeline, inputs);

        let outcomes: Vec<(PathBuf, Result<PathBuf, ConvertError>)> = self.pool.install(|| {
            planned
                .into_par_iter()
                .map(|(input, claim)| {
                    let outcome = claim.and_then(|()| {
                        let worker = rayon::current_thread_index().unwrap_or_default();
                        tracing::debug!(worker, input = %input.display(), "Processing");
                        pipeline.convert_one(input)
                    });
                    (input.clone(), outcome)
                })
                .collect()
        });

        let mut report = BatchReport::default();
        for (input, outcome) in outcomes {
            match outcome {
                Ok(output) => report.converted.push((input, output)),
                Err(e) => {
                    tracing::warn!(input = %input.display(), error = %e, "Conversion failed");
                    report.failed.push((input, e));
                }
            }
        }

        tracing::info!(
            converted = report.succeeded(),
            failed = report.failed.len(),
            "Batch finished"
        );
        report
    }
}

/// Pair each input with whether it owns its output path; the first input
/// mapping to a path wins.
fn claim_outputs<'a>(
    pipeline: &ConversionPipeline,
    inputs: &'a [PathBuf],
) -> Vec<(&'a PathBuf, Result<(), ConvertError>)> {
    let mut owners: HashMap<PathBuf, &PathBuf> = HashMap::with_capacity(inputs.len());
    inputs
        .iter()
        .map(|input| {
            let claim = match owners.entry(pipeline.output_path(input)) {
                Entry::Occupied(entry) => Err(ConvertError::DuplicateOutput {
                    output: entry.key().clone(),
                    first: entry.get().to_path_buf(),
                }),
                Entry::Vacant(entry) => {
                    entry.insert(input);
                    Ok(())
                }
            };
            (input, claim)
        })
        .collect()
}
