//! The sweep driver: generate, write and report each graph of a plan in turn.
//!
//! A run creates its output directory once, then walks the plan strictly in
//! order. The first failure ends the run. Files already written stay on disk
//! and no completion line is printed. Re-running overwrites every file.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{field, instrument, Span};

use crate::error::SweepError;
use crate::generator::GraphGenerator;
use crate::model::{ModelKind, SweepValue};
use crate::report::ProgressReporter;
use crate::sweep::SweepPlan;
use crate::timing::StageTimer;
use crate::writer::EdgeListWriter;

/// One edge-list file produced by a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub value: SweepValue,
    pub path: PathBuf,
    pub edges: usize,
}

/// Outcome of a completed sweep.
#[derive(Debug, Clone)]
pub struct SweepSummary {
    pub model: ModelKind,
    pub output_dir: PathBuf,
    /// In sweep order, one entry per plan value.
    pub files: Vec<WrittenFile>,
    pub elapsed: Duration,
}

/// Runs every point of `plan` through `generator`, writing one edge list per
/// point and reporting progress to `reporter`.
///
/// # Errors
/// Returns the first [`SweepError`] met. Directory creation failures happen
/// before any graph is generated.
#[instrument(
    name = "sweep.run",
    err,
    skip_all,
    fields(model = %plan.kind(), points = plan.len(), completed = field::Empty),
)]
pub fn run_sweep<G, W>(
    plan: &SweepPlan,
    generator: &mut G,
    reporter: &mut ProgressReporter<W>,
) -> Result<SweepSummary, SweepError>
where
    G: GraphGenerator + ?Sized,
    W: Write,
{
    let timer = StageTimer::start();
    let writer = EdgeListWriter::create(plan.output_dir())?;

    let mut files = Vec::with_capacity(plan.len());
    for point in plan.points() {
        let graph = timer
            .time_stage("generate", || generator.generate(&point.model))
            .map_err(|source| SweepError::Generation {
                value: point.value,
                source,
            })?;
        let (path, edges) =
            timer.time_stage("write", || writer.write(&graph, &point.value.file_name()))?;
        drop(graph);

        reporter.file_written(plan.kind(), point.value, &path, edges)?;
        files.push(WrittenFile {
            value: point.value,
            path,
            edges,
        });
    }
    Span::current().record("completed", files.len());

    let summary = SweepSummary {
        model: plan.kind(),
        output_dir: writer.output_dir().to_path_buf(),
        files,
        elapsed: timer.elapsed(),
    };
    reporter.finished(&summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    use crate::config::{ModelConfig, SweepConfig};
    use crate::error::GenerationError;
    use crate::generator::RandomGraphGenerator;
    use crate::model::GraphModel;
    use crate::sweep::NodeCountRange;
    use crate::Network;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    /// Returns a path graph for the first `succeed` calls, then fails.
    struct FailingAfter {
        succeed: usize,
        calls: usize,
    }

    impl GraphGenerator for FailingAfter {
        fn generate(&mut self, model: &GraphModel) -> Result<Network, GenerationError> {
            self.calls += 1;
            if self.calls > self.succeed {
                return Err(GenerationError::InvalidAttachment {
                    m: 0,
                    n: model.node_count(),
                });
            }
            let mut graph = Network::default();
            let a = graph.add_node(());
            let b = graph.add_node(());
            graph.add_edge(a, b, ());
            Ok(graph)
        }
    }

    fn small_ba_config(dir: &TempDir) -> Result<SweepConfig, Box<dyn std::error::Error>> {
        Ok(SweepConfig {
            model: ModelConfig::BarabasiAlbert {
                m: 2,
                nodes: NodeCountRange::new(10, 40, 10)?,
            },
            output_dir: dir.path().join("barabasi_albert_networks"),
            seed: Some(1),
        })
    }

    #[test]
    fn writes_one_file_per_point_and_reports_each() -> TestResult {
        let dir = TempDir::new()?;
        let plan = SweepPlan::new(&small_ba_config(&dir)?);
        let mut generator = RandomGraphGenerator::from_seed(1);
        let mut reporter = ProgressReporter::new(Vec::new());

        let summary = run_sweep(&plan, &mut generator, &mut reporter)?;

        assert_eq!(summary.files.len(), 4);
        for (file, n) in summary.files.iter().zip([10usize, 20, 30, 40]) {
            assert_eq!(file.edges, 2 * (n - 2));
            assert_eq!(fs::read_to_string(&file.path)?.lines().count(), file.edges);
        }
        let output = String::from_utf8(reporter.into_inner())?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("n=10") && lines[0].contains("n_equal_10.txt"));
        assert!(lines[4].starts_with("All Barabási–Albert networks"));
        Ok(())
    }

    #[test]
    fn failure_mid_sweep_keeps_earlier_files_and_skips_completion() -> TestResult {
        let dir = TempDir::new()?;
        let plan = SweepPlan::new(&small_ba_config(&dir)?);
        let mut generator = FailingAfter {
            succeed: 2,
            calls: 0,
        };
        let mut reporter = ProgressReporter::new(Vec::new());

        let err = run_sweep(&plan, &mut generator, &mut reporter).expect_err("third graph fails");

        assert!(matches!(
            err,
            SweepError::Generation {
                value: SweepValue::NodeCount(30),
                ..
            }
        ));
        let output_dir = dir.path().join("barabasi_albert_networks");
        assert!(output_dir.join("n_equal_10.txt").is_file());
        assert!(output_dir.join("n_equal_20.txt").is_file());
        assert!(!output_dir.join("n_equal_30.txt").exists());
        let output = String::from_utf8(reporter.into_inner())?;
        assert_eq!(output.lines().count(), 2);
        assert!(!output.contains("All "));
        Ok(())
    }

    #[test]
    fn unusable_output_directory_fails_before_generation() -> TestResult {
        let dir = TempDir::new()?;
        let mut config = small_ba_config(&dir)?;
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "")?;
        config.output_dir = blocker;
        let plan = SweepPlan::new(&config);
        let mut generator = FailingAfter {
            succeed: usize::MAX,
            calls: 0,
        };
        let mut reporter = ProgressReporter::new(Vec::new());

        let err = run_sweep(&plan, &mut generator, &mut reporter).expect_err("dir is a file");

        assert!(matches!(err, SweepError::CreateDir { .. }));
        assert_eq!(generator.calls, 0);
        assert!(reporter.into_inner().is_empty());
        Ok(())
    }
}
