//! Run configuration.
//!
//! A sweep starts from compiled-in defaults that reproduce the classic runs
//! exactly. An optional JSON file and then command-line flags are layered on
//! top, each as a [`ConfigOverrides`]. Overriding a parameter the model does
//! not have is rejected rather than silently ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde_derive::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::model::ModelKind;
use crate::sweep::{NodeCountRange, ProbabilityRange};

/// Edges added per new node in Barabási–Albert sweeps.
pub const DEFAULT_ATTACHMENT: usize = 4;
/// Node count held fixed in probability sweeps.
pub const DEFAULT_NODE_COUNT: usize = 1000;
/// Ring lattice degree for Watts–Strogatz sweeps.
pub const DEFAULT_LATTICE_DEGREE: usize = 6;

/// Fixed parameters and sweep range of one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelConfig {
    BarabasiAlbert {
        m: usize,
        nodes: NodeCountRange,
    },
    ErdosRenyi {
        n: usize,
        probabilities: ProbabilityRange,
    },
    WattsStrogatz {
        n: usize,
        k: usize,
        probabilities: ProbabilityRange,
    },
}

impl ModelConfig {
    pub const fn defaults_for(kind: ModelKind) -> ModelConfig {
        match kind {
            ModelKind::BarabasiAlbert => ModelConfig::BarabasiAlbert {
                m: DEFAULT_ATTACHMENT,
                nodes: NodeCountRange::DEFAULT,
            },
            ModelKind::ErdosRenyi => ModelConfig::ErdosRenyi {
                n: DEFAULT_NODE_COUNT,
                probabilities: ProbabilityRange::DEFAULT,
            },
            ModelKind::WattsStrogatz => ModelConfig::WattsStrogatz {
                n: DEFAULT_NODE_COUNT,
                k: DEFAULT_LATTICE_DEGREE,
                probabilities: ProbabilityRange::DEFAULT,
            },
        }
    }

    pub const fn kind(&self) -> ModelKind {
        match self {
            ModelConfig::BarabasiAlbert { .. } => ModelKind::BarabasiAlbert,
            ModelConfig::ErdosRenyi { .. } => ModelKind::ErdosRenyi,
            ModelConfig::WattsStrogatz { .. } => ModelKind::WattsStrogatz,
        }
    }
}

/// Fully resolved configuration of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub model: ModelConfig,
    pub output_dir: PathBuf,
    /// Seed for the graph generator. `None` seeds from OS entropy, so
    /// repeated runs produce different graphs.
    pub seed: Option<u64>,
}

impl SweepConfig {
    pub fn defaults_for(kind: ModelKind) -> SweepConfig {
        SweepConfig {
            model: ModelConfig::defaults_for(kind),
            output_dir: PathBuf::from(kind.output_dir()),
            seed: None,
        }
    }

    /// Builds the configuration for `kind` from its defaults, the optional
    /// JSON file at `config_file`, and `flags`, later layers winning.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if a
    /// layer sets a parameter the model does not have.
    pub fn resolve(
        kind: ModelKind,
        config_file: Option<&Path>,
        flags: &ConfigOverrides,
    ) -> Result<SweepConfig, ConfigError> {
        let mut config = SweepConfig::defaults_for(kind);
        if let Some(path) = config_file {
            config.apply(&ConfigOverrides::from_json_file(path)?)?;
        }
        config.apply(flags)?;
        debug!(config = ?config, "resolved sweep configuration");
        Ok(config)
    }

    /// Applies every option set in `overrides`.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotApplicable`] when `overrides` sets a
    /// parameter that the configured model does not use.
    pub fn apply(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        let kind = self.model.kind();
        let FixedOverrides { n, m, k } = overrides.fixed_params;
        match &mut self.model {
            ModelConfig::BarabasiAlbert {
                m: attachment,
                nodes,
            } => {
                reject(n, "n", kind)?;
                reject(k, "k", kind)?;
                reject(overrides.probability_range, "probability_range", kind)?;
                if let Some(value) = m {
                    *attachment = value;
                }
                if let Some(range) = overrides.node_count_range {
                    *nodes = range;
                }
            }
            ModelConfig::ErdosRenyi {
                n: node_count,
                probabilities,
            } => {
                reject(m, "m", kind)?;
                reject(k, "k", kind)?;
                reject(overrides.node_count_range, "node_count_range", kind)?;
                if let Some(value) = n {
                    *node_count = value;
                }
                if let Some(range) = overrides.probability_range {
                    *probabilities = range;
                }
            }
            ModelConfig::WattsStrogatz {
                n: node_count,
                k: degree,
                probabilities,
            } => {
                reject(m, "m", kind)?;
                reject(overrides.node_count_range, "node_count_range", kind)?;
                if let Some(value) = n {
                    *node_count = value;
                }
                if let Some(value) = k {
                    *degree = value;
                }
                if let Some(range) = overrides.probability_range {
                    *probabilities = range;
                }
            }
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir.clone_from(dir);
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        Ok(())
    }
}

fn reject<T>(value: Option<T>, option: &'static str, model: ModelKind) -> Result<(), ConfigError> {
    match value {
        Some(_) => Err(ConfigError::NotApplicable { option, model }),
        None => Ok(()),
    }
}

/// A partial configuration layer. Unset fields leave the layer below intact.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub node_count_range: Option<NodeCountRange>,
    pub probability_range: Option<ProbabilityRange>,
    pub fixed_params: FixedOverrides,
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Overrides for the parameters held constant during a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedOverrides {
    pub n: Option<usize>,
    pub m: Option<usize>,
    pub k: Option<usize>,
}

impl ConfigOverrides {
    /// Loads a layer from a JSON document such as
    /// `{"probability_range": {"start": 0.2, "end": 0.4}, "seed": 7}`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_json_file(path: &Path) -> Result<ConfigOverrides, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
