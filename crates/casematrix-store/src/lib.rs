use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use casematrix_scoring::{ScoringError, ScoringWeights};
use casematrix_sizing::{SizingError, TShirtSizeConfig};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("scoring weights have not been configured")]
    WeightsMissing,
    #[error("t-shirt size config has not been configured")]
    SizeConfigMissing,
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(#[from] ScoringError),
    #[error("invalid size config: {0}")]
    InvalidSizeConfig(#[from] SizingError),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Persisted {
    #[serde(default)]
    weights: Option<ScoringWeights>,
    #[serde(default)]
    size_config: Option<TShirtSizeConfig>,
}

/// JSON-file-backed store for the two admin configurations. Loads fail
/// closed: a configuration that was never saved is an explicit error,
/// never a silent default.
pub struct ConfigStore {
    path: PathBuf,
    state: Persisted,
}

impl ConfigStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !path.exists() {
            let state = Persisted::default();
            let bytes = serde_json::to_vec_pretty(&state)?;
            fs::write(&path, bytes)?;
        }

        let bytes = fs::read(&path)?;
        let state: Persisted = serde_json::from_slice(&bytes)?;

        Ok(Self { path, state })
    }

    pub fn load_weights(&self) -> Result<ScoringWeights, StoreError> {
        self.state.weights.ok_or(StoreError::WeightsMissing)
    }

    pub fn save_weights(&mut self, weights: ScoringWeights) -> Result<(), StoreError> {
        weights.validate()?;
        self.state.weights = Some(weights);
        self.persist()
    }

    pub fn load_size_config(&self) -> Result<TShirtSizeConfig, StoreError> {
        self.state
            .size_config
            .clone()
            .ok_or(StoreError::SizeConfigMissing)
    }

    pub fn save_size_config(&mut self, config: TShirtSizeConfig) -> Result<(), StoreError> {
        config.validate()?;
        self.state.size_config = Some(config);
        self.persist()
    }

    pub fn stats(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path,
            "weights_configured": self.state.weights.is_some(),
            "size_config_configured": self.state.size_config.is_some(),
            "size_buckets": self.state.size_config.as_ref().map_or(0, |c| c.buckets.len()),
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&self.state)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}
