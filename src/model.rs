//! Graph models and the parameter values a sweep iterates over.

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The three supported random graph models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Preferential attachment; the sweep varies the node count.
    BarabasiAlbert,
    /// Independent edges; the sweep varies the edge probability.
    ErdosRenyi,
    /// Rewired ring lattice; the sweep varies the rewiring probability.
    WattsStrogatz,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::BarabasiAlbert,
        ModelKind::ErdosRenyi,
        ModelKind::WattsStrogatz,
    ];

    /// Directory receiving this model's edge lists. The names are disjoint so
    /// that sweeps of different models never touch the same files.
    pub const fn output_dir(self) -> &'static str {
        match self {
            ModelKind::BarabasiAlbert => "barabasi_albert_networks",
            ModelKind::ErdosRenyi => "erdos_renyi_networks",
            ModelKind::WattsStrogatz => "watts_strogatz_networks",
        }
    }

    /// Human readable name used in progress output.
    pub const fn label(self) -> &'static str {
        match self {
            ModelKind::BarabasiAlbert => "Barabási–Albert",
            ModelKind::ErdosRenyi => "Erdős–Rényi",
            ModelKind::WattsStrogatz => "Watts–Strogatz",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A probability on the one-decimal grid `0.0, 0.1, ..., 1.0`.
///
/// Stored as a count of tenths so that the value used for generation and the
/// value printed into file names can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability {
    tenths: u8,
}

impl Probability {
    pub const ZERO: Probability = Probability { tenths: 0 };
    pub const ONE: Probability = Probability { tenths: 10 };

    /// Returns `None` when `tenths` exceeds 10.
    pub const fn from_tenths(tenths: u8) -> Option<Probability> {
        if tenths <= 10 {
            Some(Probability { tenths })
        } else {
            None
        }
    }

    pub const fn tenths(self) -> u8 {
        self.tenths
    }

    pub fn value(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let scaled = value * 10.0;
        let rounded = scaled.round();
        if !scaled.is_finite() || (scaled - rounded).abs() > 1e-9 || !(0.0..=10.0).contains(&rounded)
        {
            return Err(ConfigError::OffGridProbability { value });
        }
        // In range 0..=10 after the check above.
        Ok(Probability {
            tenths: rounded as u8,
        })
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> f64 {
        probability.value()
    }
}

impl FromStr for Probability {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            input: s.to_owned(),
        })?;
        Probability::try_from(value)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// One value of the varying parameter of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepValue {
    NodeCount(usize),
    Probability(Probability),
}

impl SweepValue {
    /// Name of the varying parameter, as used in file names.
    pub const fn parameter(self) -> &'static str {
        match self {
            SweepValue::NodeCount(_) => "n",
            SweepValue::Probability(_) => "p",
        }
    }

    /// `n_equal_<n>.txt` or `p_equal_<p>.txt`, with `p` always printed with
    /// exactly one decimal digit.
    pub fn file_name(self) -> String {
        match self {
            SweepValue::NodeCount(n) => format!("n_equal_{n}.txt"),
            SweepValue::Probability(p) => format!("p_equal_{p}.txt"),
        }
    }
}

impl fmt::Display for SweepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepValue::NodeCount(n) => write!(f, "n={n}"),
            SweepValue::Probability(p) => write!(f, "p={p}"),
        }
    }
}

/// A fully specified request for one graph instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphModel {
    /// `n` nodes, each new node attaching `m` edges.
    BarabasiAlbert { n: usize, m: usize },
    /// `n` nodes, each pair joined with probability `p`.
    ErdosRenyi { n: usize, p: f64 },
    /// `n` nodes on a ring of degree `k`, each edge rewired with probability `p`.
    WattsStrogatz { n: usize, k: usize, p: f64 },
}

impl GraphModel {
    pub const fn kind(&self) -> ModelKind {
        match self {
            GraphModel::BarabasiAlbert { .. } => ModelKind::BarabasiAlbert,
            GraphModel::ErdosRenyi { .. } => ModelKind::ErdosRenyi,
            GraphModel::WattsStrogatz { .. } => ModelKind::WattsStrogatz,
        }
    }

    pub const fn node_count(&self) -> usize {
        match *self {
            GraphModel::BarabasiAlbert { n, .. }
            | GraphModel::ErdosRenyi { n, .. }
            | GraphModel::WattsStrogatz { n, .. } => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("0.1", 1)]
    #[case("0.3", 3)]
    #[case(" 0.7 ", 7)]
    #[case("1", 10)]
    #[case("0", 0)]
    #[case("0.90", 9)]
    fn probability_parses_grid_values(#[case] raw: &str, #[case] tenths: u8) {
        let probability: Probability = raw.parse().expect("value is on the grid");
        assert_eq!(probability.tenths(), tenths);
    }

    #[rstest]
    #[case("0.15")]
    #[case("1.1")]
    #[case("-0.1")]
    #[case("NaN")]
    #[case("inf")]
    fn probability_rejects_off_grid_values(#[case] raw: &str) {
        let err = raw.parse::<Probability>().expect_err("value is off the grid");
        assert!(matches!(err, ConfigError::OffGridProbability { .. }));
    }

    #[test]
    fn probability_rejects_garbage() {
        let err = "abc".parse::<Probability>().expect_err("not a number");
        assert!(matches!(err, ConfigError::InvalidNumber { input } if input == "abc"));
    }

    #[rstest]
    #[case(0, "0.0")]
    #[case(1, "0.1")]
    #[case(9, "0.9")]
    #[case(10, "1.0")]
    fn probability_displays_one_decimal(#[case] tenths: u8, #[case] expected: &str) {
        let probability = Probability::from_tenths(tenths).expect("tenths in range");
        assert_eq!(probability.to_string(), expected);
    }

    #[test]
    fn probability_value_matches_division_by_ten() {
        for tenths in 0..=10u8 {
            let probability = Probability::from_tenths(tenths).expect("tenths in range");
            assert_eq!(probability.value(), f64::from(tenths) / 10.0);
        }
        assert!(Probability::from_tenths(11).is_none());
    }

    #[rstest]
    #[case(SweepValue::NodeCount(1000), "n_equal_1000.txt")]
    #[case(SweepValue::NodeCount(10000), "n_equal_10000.txt")]
    #[case(SweepValue::Probability(Probability { tenths: 1 }), "p_equal_0.1.txt")]
    #[case(SweepValue::Probability(Probability { tenths: 9 }), "p_equal_0.9.txt")]
    fn sweep_value_file_names(#[case] value: SweepValue, #[case] expected: &str) {
        assert_eq!(value.file_name(), expected);
    }

    #[test]
    fn output_dirs_are_disjoint() {
        let dirs: std::collections::HashSet<_> =
            ModelKind::ALL.iter().map(|kind| kind.output_dir()).collect();
        assert_eq!(dirs.len(), ModelKind::ALL.len());
    }

    #[test]
    fn model_kind_round_trips_through_json_names() {
        let kind: ModelKind = serde_json::from_str("\"watts_strogatz\"").expect("known model");
        assert_eq!(kind, ModelKind::WattsStrogatz);
    }
}
