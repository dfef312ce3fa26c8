// src/mock/dashboard.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::mock::{
    nonconformities::NonconformitiesData, products::NonconformingData,
    termination::TerminationData, Alert, PROJECT_ID,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetadata {
    pub proyecto: String,
    pub ultima_actualizacion: String,
    pub version_datos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_terminaciones: usize,
    pub terminaciones_completadas: usize,
    pub terminaciones_pendientes: usize,
    pub terminaciones_retrasadas: usize,
    pub no_conformidades_abiertas: usize,
    pub productos_no_conformes: usize,
    pub eficiencia_general: String,
    pub tasa_resolucion_nc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub metadata: DashboardMetadata,
    pub kpis: Kpis,
    pub alertas_consolidadas: Vec<Alert>,
    pub ultima_actualizacion_ui: String,
}

/// Consolidated dashboard document. Everything here is derived from the
/// other three datasets, so callers must build those first.
pub fn build(
    now: DateTime<Local>,
    termination: &TerminationData,
    nonconformities: &NonconformitiesData,
    nonconforming: &NonconformingData,
) -> DashboardData {
    let resumen = &termination.resumen;

    let mut alertas_consolidadas = termination.alertas.clone();
    alertas_consolidadas.push(Alert {
        id: "ALT-003".to_string(),
        tipo: "informativa".to_string(),
        titulo: "Revisión mensual programada".to_string(),
        descripcion: "Revisión mensual de calidad programada para mañana".to_string(),
        fecha: dates::ymd(now),
        accion_requerida: false,
    });

    DashboardData {
        metadata: DashboardMetadata {
            proyecto: format!("Proyecto {PROJECT_ID}"),
            ultima_actualizacion: dates::isoformat(now),
            version_datos: "1.0".to_string(),
        },
        kpis: Kpis {
            total_terminaciones: resumen.total,
            terminaciones_completadas: resumen.completados,
            terminaciones_pendientes: resumen.pendientes + resumen.en_progreso,
            terminaciones_retrasadas: resumen.retrasados,
            no_conformidades_abiertas: nonconformities.resumen.abiertas,
            productos_no_conformes: nonconforming.resumen.total,
            eficiencia_general: resumen.eficiencia.clone(),
            tasa_resolucion_nc: nonconformities.resumen.tasa_resolucion.clone(),
        },
        alertas_consolidadas,
        ultima_actualizacion_ui: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
