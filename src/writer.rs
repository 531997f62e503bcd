//! Edge-list export.
//!
//! Files are plain text with one `u v` pair per line, no header and no
//! trailing metadata. Edges are written in the graph's iteration order,
//! without sorting or deduplication.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::error::SweepError;
use crate::Network;

/// Writes edge lists into one output directory.
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    output_dir: PathBuf,
}

impl EdgeListWriter {
    /// Creates `output_dir` and any missing parents. An existing directory is
    /// not an error.
    ///
    /// # Errors
    /// Returns [`SweepError::CreateDir`] if the directory cannot be created.
    pub fn create(output_dir: impl Into<PathBuf>) -> Result<EdgeListWriter, SweepError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| SweepError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;
        debug!(path = %output_dir.display(), "output directory ready");
        Ok(EdgeListWriter { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `graph` to `<output_dir>/<file_name>`, replacing any previous
    /// contents. Returns the path and the number of edges written.
    ///
    /// # Errors
    /// Returns [`SweepError::Write`] if the file cannot be created or written.
    pub fn write(&self, graph: &Network, file_name: &str) -> Result<(PathBuf, usize), SweepError> {
        let path = self.output_dir.join(file_name);
        let edges = File::create(&path)
            .and_then(|file| write_edges(graph, BufWriter::new(file)))
            .map_err(|source| SweepError::Write {
                path: path.clone(),
                source,
            })?;
        Ok((path, edges))
    }
}

/// Serializes every edge of `graph` as `"{u} {v}\n"` and flushes `writer`.
///
/// # Errors
/// Propagates any I/O error from `writer`.
pub fn write_edges<W: Write>(graph: &Network, mut writer: W) -> io::Result<usize> {
    let mut count = 0;
    for edge in graph.edge_references() {
        writeln!(writer, "{} {}", edge.source().index(), edge.target().index())?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
