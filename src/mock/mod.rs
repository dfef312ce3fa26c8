// src/mock/mod.rs
pub mod dashboard;
pub mod nonconformities;
pub mod products;
pub mod sample;
pub mod termination;

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{config::OutputConfig, dates, output};

/// SIC3PRO project the mock data impersonates.
pub(crate) const PROJECT_ID: &str = "1253";

/// File names written by `save_all`, in write order (summary.json excluded).
pub const DATASET_FILES: [&str; 4] = [
    "termination.json",
    "nonconformities.json",
    "nonconforming.json",
    "dashboard.json",
];

/// Alert entry shared by the termination dataset and the consolidated
/// dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub tipo: String,
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    pub accion_requerida: bool,
}

/// The four dataset documents the dashboard loads.
#[derive(Debug, Clone)]
pub struct MockDatasets {
    pub termination: termination::TerminationData,
    pub nonconformities: nonconformities::NonconformitiesData,
    pub nonconforming: products::NonconformingData,
    pub dashboard: dashboard::DashboardData,
}

/// Build all datasets for a single generation instant. The dashboard KPIs
/// are derived from the other three, so everything shares one `now`.
pub fn generate(now: DateTime<Local>) -> MockDatasets {
    let termination = termination::build(now);
    let nonconformities = nonconformities::build(now);
    let nonconforming = products::build(now);
    let dashboard = dashboard::build(now, &termination, &nonconformities, &nonconforming);

    MockDatasets {
        termination,
        nonconformities,
        nonconforming,
        dashboard,
    }
}

/// Record of one batch generation, saved next to the datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub ultima_actualizacion: String,
    pub archivos_generados: Vec<String>,
    pub estado: String,
    pub total_datos: usize,
}

/// Write every dataset file plus `summary.json` under the configured
/// directory. `total_datos` is the combined serialized size of the three
/// source datasets (the dashboard document is derived, so it doesn't count).
pub fn save_all(
    data: &MockDatasets,
    config: &OutputConfig,
    now: DateTime<Local>,
) -> Result<GenerationSummary> {
    output::write_json(config.dataset_path("termination.json"), &data.termination)?;
    output::write_json(
        config.dataset_path("nonconformities.json"),
        &data.nonconformities,
    )?;
    output::write_json(config.dataset_path("nonconforming.json"), &data.nonconforming)?;
    output::write_json(config.dataset_path("dashboard.json"), &data.dashboard)?;

    let total_datos = json_len(&data.termination)?
        + json_len(&data.nonconformities)?
        + json_len(&data.nonconforming)?;

    let summary = GenerationSummary {
        ultima_actualizacion: dates::isoformat(now),
        archivos_generados: DATASET_FILES.iter().map(|s| s.to_string()).collect(),
        estado: "exito".to_string(),
        total_datos,
    };
    output::write_json(config.dataset_path("summary.json"), &summary)?;

    info!(
        dir = %config.datasets_dir.display(),
        files = DATASET_FILES.len() + 1,
        "datasets saved"
    );
    Ok(summary)
}

fn json_len<T: Serialize>(value: &T) -> Result<usize> {
    Ok(serde_json::to_string_pretty(value)?.len())
}
