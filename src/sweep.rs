//! Sweep ranges and the ordered plan derived from them.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::config::{ModelConfig, SweepConfig};
use crate::error::ConfigError;
use crate::model::{GraphModel, ModelKind, Probability, SweepValue};

/// Inclusive range of node counts, `start, start + step, ..., <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNodeCountRange")]
pub struct NodeCountRange {
    start: usize,
    end: usize,
    step: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNodeCountRange {
    start: usize,
    end: usize,
    step: usize,
}

impl TryFrom<RawNodeCountRange> for NodeCountRange {
    type Error = ConfigError;

    fn try_from(raw: RawNodeCountRange) -> Result<Self, Self::Error> {
        NodeCountRange::new(raw.start, raw.end, raw.step)
    }
}

impl NodeCountRange {
    /// `1000, 2000, ..., 10000`.
    pub const DEFAULT: NodeCountRange = NodeCountRange {
        start: 1000,
        end: 10_000,
        step: 1000,
    };

    pub fn new(start: usize, end: usize, step: usize) -> Result<NodeCountRange, ConfigError> {
        if step == 0 || start == 0 || start > end {
            return Err(ConfigError::InvalidNodeRange { start, end, step });
        }
        Ok(NodeCountRange { start, end, step })
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn step(&self) -> usize {
        self.step
    }

    pub fn values(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).step_by(self.step)
    }
}

impl Default for NodeCountRange {
    fn default() -> Self {
        NodeCountRange::DEFAULT
    }
}

impl FromStr for NodeCountRange {
    type Err = ConfigError;

    /// Parses `START:END:STEP`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "START:END:STEP";
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [start, end, step] = parts.as_slice() else {
            return Err(ConfigError::RangeSyntax {
                input: s.to_owned(),
                expected: EXPECTED,
            });
        };
        let parse = |part: &str| {
            part.parse::<usize>().map_err(|_| ConfigError::RangeSyntax {
                input: s.to_owned(),
                expected: EXPECTED,
            })
        };
        NodeCountRange::new(parse(*start)?, parse(*end)?, parse(*step)?)
    }
}

/// Inclusive range of probabilities on the 0.1 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProbabilityRange")]
pub struct ProbabilityRange {
    start: Probability,
    end: Probability,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProbabilityRange {
    start: Probability,
    end: Probability,
}

impl TryFrom<RawProbabilityRange> for ProbabilityRange {
    type Error = ConfigError;

    fn try_from(raw: RawProbabilityRange) -> Result<Self, Self::Error> {
        ProbabilityRange::new(raw.start, raw.end)
    }
}

impl ProbabilityRange {
    /// `0.1, 0.2, ..., 0.9`.
    pub const DEFAULT: ProbabilityRange = ProbabilityRange {
        start: match Probability::from_tenths(1) {
            Some(p) => p,
            None => Probability::ZERO,
        },
        end: match Probability::from_tenths(9) {
            Some(p) => p,
            None => Probability::ONE,
        },
    };

    pub fn new(start: Probability, end: Probability) -> Result<ProbabilityRange, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidProbabilityRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(ProbabilityRange { start, end })
    }

    pub const fn start(&self) -> Probability {
        self.start
    }

    pub const fn end(&self) -> Probability {
        self.end
    }

    pub fn values(&self) -> impl Iterator<Item = Probability> {
        (self.start.tenths()..=self.end.tenths()).filter_map(Probability::from_tenths)
    }
}

impl Default for ProbabilityRange {
    fn default() -> Self {
        ProbabilityRange::DEFAULT
    }
}

impl FromStr for ProbabilityRange {
    type Err = ConfigError;

    /// Parses `START:END`, both ends on the 0.1 grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((start, end)) = s.split_once(':') else {
            return Err(ConfigError::RangeSyntax {
                input: s.to_owned(),
                expected: "START:END",
            });
        };
        ProbabilityRange::new(start.parse::<Probability>()?, end.parse::<Probability>()?)
    }
}

/// One step of a sweep: the varying value and the graph it asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub value: SweepValue,
    pub model: GraphModel,
}

/// The ordered list of graphs a run produces, plus where they go.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    kind: ModelKind,
    output_dir: PathBuf,
    points: Vec<SweepPoint>,
}

impl SweepPlan {
    pub fn new(config: &SweepConfig) -> SweepPlan {
        let points = match config.model {
            ModelConfig::BarabasiAlbert { m, nodes } => nodes
                .values()
                .map(|n| SweepPoint {
                    value: SweepValue::NodeCount(n),
                    model: GraphModel::BarabasiAlbert { n, m },
                })
                .collect(),
            ModelConfig::ErdosRenyi { n, probabilities } => probabilities
                .values()
                .map(|p| SweepPoint {
                    value: SweepValue::Probability(p),
                    model: GraphModel::ErdosRenyi { n, p: p.value() },
                })
                .collect(),
            ModelConfig::WattsStrogatz {
                n,
                k,
                probabilities,
            } => probabilities
                .values()
                .map(|p| SweepPoint {
                    value: SweepValue::Probability(p),
                    model: GraphModel::WattsStrogatz { n, k, p: p.value() },
                })
                .collect(),
        };
        SweepPlan {
            kind: config.model.kind(),
            output_dir: config.output_dir.clone(),
            points,
        }
    }

    pub const fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = SweepValue> + '_ {
        self.points.iter().map(|point| point.value)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn file_names(plan: &SweepPlan) -> Vec<String> {
        plan.values().map(SweepValue::file_name).collect()
    }

    #[test]
    fn default_barabasi_albert_plan_sweeps_node_counts() {
        let plan = SweepPlan::new(&SweepConfig::defaults_for(ModelKind::BarabasiAlbert));
        assert_eq!(plan.len(), 10);
        let expected: Vec<String> = (1..=10)
            .map(|i| format!("n_equal_{}.txt", i * 1000))
            .collect();
        assert_eq!(file_names(&plan), expected);
        assert!(plan
            .points()
            .iter()
            .all(|point| matches!(point.model, GraphModel::BarabasiAlbert { m: 4, .. })));
        assert_eq!(plan.output_dir(), Path::new("barabasi_albert_networks"));
    }

    #[rstest]
    #[case(ModelKind::ErdosRenyi, "erdos_renyi_networks")]
    #[case(ModelKind::WattsStrogatz, "watts_strogatz_networks")]
    fn default_probability_plans_sweep_tenths(#[case] kind: ModelKind, #[case] dir: &str) {
        let plan = SweepPlan::new(&SweepConfig::defaults_for(kind));
        assert_eq!(plan.len(), 9);
        let expected: Vec<String> = (1..=9).map(|i| format!("p_equal_0.{i}.txt")).collect();
        assert_eq!(file_names(&plan), expected);
        assert_eq!(plan.kind(), kind);
        assert_eq!(plan.output_dir(), Path::new(dir));
    }

    #[test]
    fn probability_points_carry_fixed_parameters() {
        let plan = SweepPlan::new(&SweepConfig::defaults_for(ModelKind::WattsStrogatz));
        let first = plan.points()[0];
        assert_eq!(
            first.model,
            GraphModel::WattsStrogatz {
                n: 1000,
                k: 6,
                p: 0.1
            }
        );
    }

    #[rstest]
    #[case("1000:10000:1000", 1000, 10_000, 1000)]
    #[case(" 10 : 30 : 5 ", 10, 30, 5)]
    #[case("7:7:1", 7, 7, 1)]
    fn node_range_parses(
        #[case] raw: &str,
        #[case] start: usize,
        #[case] end: usize,
        #[case] step: usize,
    ) {
        let range: NodeCountRange = raw.parse().expect("range must parse");
        assert_eq!((range.start(), range.end(), range.step()), (start, end, step));
    }

    #[rstest]
    #[case("1000:10000")]
    #[case("a:b:c")]
    #[case("1:2:3:4")]
    fn node_range_rejects_bad_syntax(#[case] raw: &str) {
        let err = raw.parse::<NodeCountRange>().expect_err("syntax is invalid");
        assert!(matches!(err, ConfigError::RangeSyntax { .. }));
    }

    #[rstest]
    #[case("10:20:0")]
    #[case("20:10:5")]
    #[case("0:10:5")]
    fn node_range_rejects_degenerate_bounds(#[case] raw: &str) {
        let err = raw.parse::<NodeCountRange>().expect_err("range is degenerate");
        assert!(matches!(err, ConfigError::InvalidNodeRange { .. }));
    }

    #[test]
    fn node_range_stops_at_or_before_end() {
        let range = NodeCountRange::new(10, 35, 10).expect("valid range");
        assert_eq!(range.values().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn probability_range_parses_and_expands() {
        let range: ProbabilityRange = "0.0:0.3".parse().expect("range must parse");
        let values: Vec<String> = range.values().map(|p| p.to_string()).collect();
        assert_eq!(values, ["0.0", "0.1", "0.2", "0.3"]);
    }

    #[rstest]
    #[case("0.5")]
    #[case("0.9:0.1")]
    #[case("0.1:0.25")]
    fn probability_range_rejects_invalid_input(#[case] raw: &str) {
        assert!(raw.parse::<ProbabilityRange>().is_err());
    }

    #[test]
    fn ranges_deserialize_with_validation() {
        let range: NodeCountRange =
            serde_json::from_str(r#"{"start": 5, "end": 15, "step": 5}"#).expect("valid json");
        assert_eq!(range.values().collect::<Vec<_>>(), vec![5, 10, 15]);

        let bad = serde_json::from_str::<NodeCountRange>(r#"{"start": 5, "end": 1, "step": 5}"#);
        assert!(bad.is_err());

        let probabilities: ProbabilityRange =
            serde_json::from_str(r#"{"start": 0.2, "end": 0.4}"#).expect("valid json");
        assert_eq!(probabilities.values().count(), 3);
    }
}
