//! Human readable progress lines.
//!
//! One line per written file and one completion line per sweep. The wording
//! is not a stable interface; the presence of the lines is. The same events
//! are mirrored as structured `tracing` events.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::SweepError;
use crate::model::{ModelKind, SweepValue};
use crate::pipeline::SweepSummary;

pub struct ProgressReporter<W> {
    out: W,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W) -> Self {
        ProgressReporter { out }
    }

    /// Announces that the graph for `value` has been saved to `path`.
    ///
    /// # Errors
    /// Returns [`SweepError::Report`] if the output stream fails.
    pub fn file_written(
        &mut self,
        kind: ModelKind,
        value: SweepValue,
        path: &Path,
        edges: usize,
    ) -> Result<(), SweepError> {
        info!(model = %kind, %value, path = %path.display(), edges, "edge list saved");
        self.line(format_args!(
            "{kind} network with {value} saved to {}",
            path.display()
        ))
    }

    /// Announces the end of a complete sweep.
    ///
    /// # Errors
    /// Returns [`SweepError::Report`] if the output stream fails.
    pub fn finished(&mut self, summary: &SweepSummary) -> Result<(), SweepError> {
        info!(
            model = %summary.model,
            files = summary.files.len(),
            elapsed = ?summary.elapsed,
            "sweep completed"
        );
        self.line(format_args!(
            "All {} networks were generated and saved ({} files).",
            summary.model,
            summary.files.len()
        ))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), SweepError> {
        let write = |out: &mut W| -> io::Result<()> {
            out.write_fmt(args)?;
            out.write_all(b"\n")?;
            out.flush()
        };
        write(&mut self.out).map_err(|source| SweepError::Report { source })
    }
}
