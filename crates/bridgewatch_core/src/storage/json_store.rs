use crate::dataset::Dataset;
use crate::error::AppError;
use crate::mock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

pub const SCHEMA_VERSION: u32 = 1;
const DATASET_ENV_VAR: &str = "BRIDGEWATCH_DATASET_PATH";

#[derive(Debug, Serialize, Deserialize)]
struct StoredDataset {
    schema_version: u32,
    #[serde(flatten)]
    dataset: Dataset,
}

/// Where the data set comes from for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Mock,
    File(PathBuf),
}

pub fn dataset_source(explicit: Option<&Path>) -> DatasetSource {
    if let Some(path) = explicit {
        return DatasetSource::File(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(DATASET_ENV_VAR)
        && !path.trim().is_empty()
    {
        return DatasetSource::File(PathBuf::from(path));
    }

    DatasetSource::Mock
}

pub fn load(source: &DatasetSource, now: OffsetDateTime) -> Result<Dataset, AppError> {
    match source {
        DatasetSource::Mock => {
            tracing::debug!("using built-in mock data set");
            Ok(mock::dataset(now))
        }
        DatasetSource::File(path) => load_dataset(path),
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    let stored: StoredDataset = serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
    })?;

    if stored.schema_version != SCHEMA_VERSION {
        return Err(AppError::invalid_data("schema_version mismatch"));
    }

    tracing::debug!(
        path = %path.display(),
        tasks = stored.dataset.tasks.len(),
        plans = stored.dataset.plans.len(),
        history = stored.dataset.history.len(),
        "loaded data set"
    );
    Ok(stored.dataset)
}

/// Writes a snapshot that [`load_dataset`] accepts. Refuses to overwrite.
pub fn export_dataset(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::invalid_input(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let stored = StoredDataset {
        schema_version: SCHEMA_VERSION,
        dataset: dataset.clone(),
    };
    let content = serde_json::to_string_pretty(&stored)
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))?;

    Ok(())
}
