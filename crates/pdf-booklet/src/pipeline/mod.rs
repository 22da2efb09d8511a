//! Per-file booklet pipeline
//!
//! Each input goes through the same steps, one external process at a time:
//! 1. Probe content bounds and crop (or copy the input when cropping is off)
//! 2. Impose the cropped intermediate with pdfjam
//! 3. Move the result next to the input as `<stem>-book.pdf`
//! 4. Remove the intermediate

pub(crate) mod io;
mod task;

pub use io::count_pages;
pub use task::{FileTask, booklet_path};

use crate::constants::EVERYSHI_PACKAGE;
use crate::geometry::compute_crop_geometry;
use crate::options::BookletOptions;
use crate::tool::{
    BoundsProbe, CommandRunner, CropExecution, FontProbe, Imposition, ProcessRunner, execute,
};
use crate::types::*;
use io::{ensure_non_empty, is_regular_file, move_file};
use std::path::{Path, PathBuf};

/// Booklet maker bound to one set of options
#[derive(Debug)]
pub struct Booklet<R = ProcessRunner> {
    options: BookletOptions,
    runner: R,
    workdir: PathBuf,
}

impl Booklet<ProcessRunner> {
    /// Run real processes, keeping intermediates in the current directory
    pub fn new(options: BookletOptions) -> Result<Self> {
        let workdir = std::env::current_dir()?;
        Self::with_runner(options, ProcessRunner, workdir)
    }
}

impl<R: CommandRunner> Booklet<R> {
    /// A relative `workdir` is resolved against the current directory; pdfjam
    /// runs inside it and is handed paths that already include it.
    pub fn with_runner(
        options: BookletOptions,
        runner: R,
        workdir: impl Into<PathBuf>,
    ) -> Result<Self> {
        options.validate()?;
        let workdir = std::path::absolute(workdir.into())?;
        Ok(Self {
            options,
            runner,
            workdir,
        })
    }

    pub fn options(&self) -> &BookletOptions {
        &self.options
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Check run-wide prerequisites; short-edge output needs everyshi.sty.
    pub async fn preflight(&self) -> Result<()> {
        if !self.options.short_edge {
            return Ok(());
        }

        let probe = FontProbe {
            package: EVERYSHI_PACKAGE,
        };
        if execute(&probe, &self.runner).await? {
            Ok(())
        } else {
            Err(BookletError::MissingDependency {
                package: EVERYSHI_PACKAGE,
            })
        }
    }

    /// Preflight, then every input in order.
    ///
    /// Per-file errors are logged and counted; a fatal error ends the run.
    pub async fn run(&self, inputs: &[PathBuf]) -> Result<RunSummary> {
        self.run_with(inputs, |_| {}).await
    }

    /// Like [`Booklet::run`], reporting each outcome as soon as it is known
    pub async fn run_with(
        &self,
        inputs: &[PathBuf],
        mut on_outcome: impl FnMut(&FileOutcome),
    ) -> Result<RunSummary> {
        self.preflight().await?;

        let mut summary = RunSummary::default();
        for input in inputs {
            match self.process_file(input).await {
                Ok(outcome) => {
                    on_outcome(&outcome);
                    summary.record(outcome);
                }
                Err(e) if e.is_fatal() => {
                    log::error!("ABORT: {}", input.display());
                    return Err(e);
                }
                Err(e) => {
                    log::error!("{}: {}", input.display(), e);
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Turn one input into a booklet. Call [`Booklet::preflight`] first.
    pub async fn process_file(&self, input: &Path) -> Result<FileOutcome> {
        log::info!("Processing {}", input.display());
        if !is_regular_file(input).await {
            log::warn!("SKIP: file not found: {}", input.display());
            return Ok(FileOutcome::Skipped {
                input: input.to_path_buf(),
            });
        }

        let task = FileTask::new(input, &self.workdir);
        let imposition = Imposition {
            input: &task.temp,
            workdir: &self.workdir,
            paper: self.options.paper.as_deref(),
            signature: self.options.signature,
            short_edge: self.options.short_edge,
        };
        let imposed = imposition.output_path();

        let result = self.build(&task, &imposition, &imposed).await;
        task.cleanup(&imposed).await;
        result?;

        log::info!("Wrote {}", task.output.display());
        Ok(FileOutcome::Completed {
            input: task.input,
            output: task.output,
        })
    }

    async fn build(
        &self,
        task: &FileTask,
        imposition: &Imposition<'_>,
        imposed: &Path,
    ) -> Result<()> {
        if self.options.crop {
            log::info!("Getting bounds...");
            let boxes = execute(
                &BoundsProbe {
                    input: &task.input,
                    scratch: &task.temp,
                    resolution: self.options.resolution,
                },
                &self.runner,
            )
            .await?;
            let geometry = compute_crop_geometry(&boxes, &self.options.margins, &task.input)?;
            log::debug!(
                "{} pages, odd crop [{}], even crop [{}]",
                boxes.len(),
                geometry.odd,
                geometry.even
            );

            log::info!("Cropping...");
            execute(
                &CropExecution {
                    input: &task.input,
                    output: &task.temp,
                    geometry: &geometry,
                    resolution: self.options.resolution,
                },
                &self.runner,
            )
            .await?;
        } else {
            tokio::fs::copy(&task.input, &task.temp).await?;
        }

        log::info!("Creating booklet...");
        execute(imposition, &self.runner).await?;
        ensure_non_empty(imposed).await?;
        move_file(imposed, &task.output).await
    }
}
