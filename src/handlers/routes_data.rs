use std::path::Path;

use anyhow::Context;
use axum::{extract::State, Json};
use tracing::{error, info};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Read and parse a JSON document. Loaded fresh per request so edits to the
/// data files show up without a restart.
async fn load_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn record_count(data: &serde_json::Value) -> usize {
    data.as_array().map(|a| a.len()).unwrap_or(0)
}

pub async fn get_clients(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    match load_json(&state.config.data_dir.join("clients.json")).await {
        Ok(data) => {
            info!(records = record_count(&data), "Loaded clients");
            Ok(Json(data))
        }
        Err(err) => {
            error!(error = %err, "Failed to load clients");
            Err(AppError::Internal("failed to load clients".to_string()))
        }
    }
}

pub async fn get_vehicles(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    match load_json(&state.config.data_dir.join("vehicles.json")).await {
        Ok(data) => {
            info!(records = record_count(&data), "Loaded vehicles");
            Ok(Json(data))
        }
        Err(err) => {
            error!(error = %err, "Failed to load vehicles");
            Err(AppError::Internal("failed to load vehicles".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn load_json_parses_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clients.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, r#"[{{"id": "C1", "name": "Cliente 1"}}]"#).unwrap();

        let data = load_json(&path).await.unwrap();
        assert_eq!(record_count(&data), 1);
        assert_eq!(data[0]["id"], "C1");
    }

    #[tokio::test]
    async fn load_json_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_json(&dir.path().join("absent.json")).await.is_err());
    }

    #[tokio::test]
    async fn load_json_fails_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, b"not json at all").unwrap();
        assert!(load_json(&path).await.is_err());
    }
}
