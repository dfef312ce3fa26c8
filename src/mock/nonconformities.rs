// src/mock/nonconformities.rs
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::mock::PROJECT_ID;

pub const NC_TYPES: [&str; 5] = [
    "Calidad",
    "Seguridad",
    "Ambiental",
    "Proceso",
    "Documentación",
];

const NC_TOTAL: usize = 48;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NcMetadata {
    pub tipo: String,
    pub generado_en: String,
    pub proyecto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NcResumen {
    pub total: usize,
    pub abiertas: usize,
    pub cerradas: usize,
    pub en_progreso: usize,
    pub tasa_resolucion: String,
    pub tiempo_promedio_resolucion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub tipo: String,
    pub cantidad: usize,
    pub porcentaje: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCount {
    pub mes: String,
    pub cantidad: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalNc {
    pub id: String,
    pub descripcion: String,
    pub tipo: String,
    pub prioridad: String,
    pub fecha_deteccion: String,
    pub estado: String,
    pub responsable: String,
    pub dias_abierta: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonconformitiesData {
    pub metadata: NcMetadata,
    pub resumen: NcResumen,
    pub por_tipo: Vec<TypeBreakdown>,
    pub por_mes: Vec<MonthCount>,
    pub ncs_criticas: Vec<CriticalNc>,
}

/// Non-conformity dataset: fixed headline numbers, per-type counts stepped
/// by position, and a four-month trend ending in the current month.
pub fn build(now: DateTime<Local>) -> NonconformitiesData {
    let por_tipo = NC_TYPES
        .iter()
        .enumerate()
        .map(|(idx, &tipo)| {
            let cantidad = (idx + 1) * 5;
            TypeBreakdown {
                tipo: tipo.to_string(),
                cantidad,
                porcentaje: format!("{:.1}%", cantidad as f64 / NC_TOTAL as f64 * 100.0),
            }
        })
        .collect();

    let por_mes = [(90, 8), (60, 12), (30, 15), (0, 13)]
        .into_iter()
        .map(|(days_back, cantidad)| MonthCount {
            mes: (now - Duration::days(days_back)).format("%b").to_string(),
            cantidad,
        })
        .collect();

    NonconformitiesData {
        metadata: NcMetadata {
            tipo: "no_conformidades".to_string(),
            generado_en: dates::isoformat(now),
            proyecto: PROJECT_ID.to_string(),
        },
        resumen: NcResumen {
            total: NC_TOTAL,
            abiertas: 15,
            cerradas: 28,
            en_progreso: 5,
            tasa_resolucion: "85.4%".to_string(),
            tiempo_promedio_resolucion: "7.2 días".to_string(),
        },
        por_tipo,
        por_mes,
        ncs_criticas: vec![CriticalNc {
            id: "NC-2024-001".to_string(),
            descripcion: "Soldadura no conforme en tubería principal".to_string(),
            tipo: "Calidad".to_string(),
            prioridad: "Crítica".to_string(),
            fecha_deteccion: dates::ymd(now - Duration::days(15)),
            estado: "Abierta".to_string(),
            responsable: "Área Mecánica".to_string(),
            dias_abierta: 15,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn build_fixed() -> NonconformitiesData {
        build(Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
    }

    #[test]
    fn per_type_counts_step_by_position() {
        let data = build_fixed();
        let cantidades: Vec<usize> = data.por_tipo.iter().map(|t| t.cantidad).collect();
        assert_eq!(cantidades, vec![5, 10, 15, 20, 25]);
        assert_eq!(data.por_tipo[0].porcentaje, "10.4%");
        assert_eq!(data.por_tipo[4].porcentaje, "52.1%");
    }

    #[test]
    fn trend_covers_the_last_four_months() {
        let data = build_fixed();
        let meses: Vec<&str> = data.por_mes.iter().map(|m| m.mes.as_str()).collect();
        assert_eq!(meses, vec!["Dec", "Jan", "Feb", "Mar"]);
        let cantidades: Vec<usize> = data.por_mes.iter().map(|m| m.cantidad).collect();
        assert_eq!(cantidades, vec![8, 12, 15, 13]);
    }

    #[test]
    fn critical_nc_was_detected_fifteen_days_ago() {
        let data = build_fixed();
        let nc = &data.ncs_criticas[0];
        assert_eq!(nc.fecha_deteccion, "2024-02-29");
        assert_eq!(nc.dias_abierta, 15);
        assert_eq!(nc.estado, "Abierta");
    }
}
