// src/mock/termination.rs
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::mock::{Alert, PROJECT_ID};

pub const AREAS: [&str; 5] = [
    "Área 1 - Eléctrica",
    "Área 2 - Mecánica",
    "Área 3 - Instrumentación",
    "Área 4 - Civil",
    "Área 5 - Montaje",
];

pub const SISTEMAS: [&str; 5] = [
    "Eléctrico",
    "Mecánico",
    "Instrumentación",
    "Civil",
    "Montaje",
];

const ESTADOS: [&str; 4] = ["Completado", "En progreso", "Pendiente", "Retrasado"];
const PRIORIDADES: [&str; 3] = ["Alta", "Media", "Baja"];
const ITEM_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationMetadata {
    pub tipo: String,
    pub generado_en: String,
    pub proyecto: String,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationResumen {
    pub total: usize,
    pub completados: usize,
    pub en_progreso: usize,
    pub pendientes: usize,
    pub retrasados: usize,
    pub eficiencia: String,
    pub tasa_completacion: String,
}

/// Per-estado counts for one of the five fixed areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBreakdown {
    pub area: String,
    pub sistema: String,
    pub completados: usize,
    pub en_progreso: usize,
    pub pendientes: usize,
    pub retrasados: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationItem {
    pub id: String,
    pub descripcion: String,
    pub area: String,
    pub sistema: String,
    pub estado: String,
    pub prioridad: String,
    pub fecha_compromiso: String,
    /// Only set for completed items; serialized as null otherwise.
    pub fecha_real: Option<String>,
    pub responsable: String,
    pub dias_retraso: usize,
    pub progreso: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationData {
    pub metadata: TerminationMetadata,
    pub resumen: TerminationResumen,
    pub por_area: Vec<AreaBreakdown>,
    pub items: Vec<TerminationItem>,
    pub alertas: Vec<Alert>,
}

/// Synthesize the termination-tracking dataset: 50 items with labels cycled
/// by index so every estado/prioridad/area combination shows up, plus the
/// aggregates the dashboard charts read.
pub fn build(now: DateTime<Local>) -> TerminationData {
    let items: Vec<TerminationItem> = (1..=ITEM_COUNT).map(|i| item(now, i)).collect();

    let count_estado =
        |estado: &str| items.iter().filter(|it| it.estado == estado).count();
    let total = items.len();
    let completados = count_estado("Completado");
    let en_progreso = count_estado("En progreso");
    let pendientes = count_estado("Pendiente");
    let retrasados = count_estado("Retrasado");

    let eficiencia = percent(completados as f64, total as f64);
    let tasa_completacion = percent(completados as f64 + en_progreso as f64 * 0.5, total as f64);

    let por_area = AREAS
        .iter()
        .map(|&area| {
            let (nombre, sistema) = split_area(area);
            let in_area = |estado: &str| {
                items
                    .iter()
                    .filter(|it| it.area == area && it.estado == estado)
                    .count()
            };
            AreaBreakdown {
                area: nombre.to_string(),
                sistema: sistema.to_string(),
                completados: in_area("Completado"),
                en_progreso: in_area("En progreso"),
                pendientes: in_area("Pendiente"),
                retrasados: in_area("Retrasado"),
            }
        })
        .collect();

    let retraso_electrico = items
        .iter()
        .filter(|it| it.area.contains("Eléctrica") && it.estado == "Retrasado")
        .count();
    let sin_documentar = items
        .iter()
        .filter(|it| it.estado == "Completado" && it.progreso < 100)
        .count();

    let alertas = vec![
        Alert {
            id: "ALT-001".to_string(),
            tipo: "critica".to_string(),
            titulo: "Retraso crítico en área eléctrica".to_string(),
            descripcion: format!("{retraso_electrico} items con retraso > 5 días"),
            fecha: dates::ymd(now),
            accion_requerida: true,
        },
        Alert {
            id: "ALT-002".to_string(),
            tipo: "advertencia".to_string(),
            titulo: "Items pendientes de documentación".to_string(),
            descripcion: format!("{sin_documentar} items completados sin documentación final"),
            fecha: dates::ymd(now - Duration::days(1)),
            accion_requerida: true,
        },
    ];

    TerminationData {
        metadata: TerminationMetadata {
            tipo: "detalles_terminacion".to_string(),
            generado_en: dates::isoformat(now),
            proyecto: PROJECT_ID.to_string(),
            total_items: total,
        },
        resumen: TerminationResumen {
            total,
            completados,
            en_progreso,
            pendientes,
            retrasados,
            eficiencia,
            tasa_completacion,
        },
        por_area,
        items,
        alertas,
    }
}

fn item(now: DateTime<Local>, i: usize) -> TerminationItem {
    let area = AREAS[i % AREAS.len()];
    let sistema = SISTEMAS[i % SISTEMAS.len()];
    let estado = ESTADOS[i % ESTADOS.len()];

    // Commitment dates fan out over the past 50 days; the newest item lands
    // on `now` itself. Completed items get a real date shifted by up to a
    // week, which may fall after `now` for the latest ones.
    let dias_fuera = 50 - i as i64;
    let fecha_real = (i % 4 == 0)
        .then(|| dates::ymd(now - Duration::days(dias_fuera - (i % 7) as i64)));

    TerminationItem {
        id: format!("TERM-{}", 2_024_000 + i),
        descripcion: format!(
            "Terminación {i}: {} en {}",
            sistema.to_lowercase(),
            split_area(area).0
        ),
        area: area.to_string(),
        sistema: sistema.to_string(),
        estado: estado.to_string(),
        prioridad: PRIORIDADES[i % PRIORIDADES.len()].to_string(),
        fecha_compromiso: dates::ymd(now - Duration::days(dias_fuera)),
        fecha_real,
        responsable: format!("RESP_{}", (i % 5) + 1),
        dias_retraso: if estado == "Retrasado" { i % 10 } else { 0 },
        progreso: i % 100,
    }
}

fn percent(part: f64, whole: f64) -> String {
    format!("{:.1}%", part / whole * 100.0)
}

/// "Área 1 - Eléctrica" -> ("Área 1", "Eléctrica")
fn split_area(area: &str) -> (&str, &str) {
    area.split_once(" - ").unwrap_or((area, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn build_fixed() -> TerminationData {
        build(Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
    }

    #[test]
    fn fifty_items_with_cycled_estados() {
        let data = build_fixed();
        assert_eq!(data.items.len(), 50);
        assert_eq!(data.metadata.total_items, 50);

        // i in 1..=50 cycled over four estados
        assert_eq!(data.resumen.completados, 12);
        assert_eq!(data.resumen.en_progreso, 13);
        assert_eq!(data.resumen.pendientes, 13);
        assert_eq!(data.resumen.retrasados, 12);
        assert_eq!(data.resumen.total, 50);
    }

    #[test]
    fn resumen_percentages_have_one_decimal() {
        let data = build_fixed();
        assert_eq!(data.resumen.eficiencia, "24.0%");
        // (12 + 13 * 0.5) / 50
        assert_eq!(data.resumen.tasa_completacion, "37.0%");
    }

    #[test]
    fn fecha_real_only_for_completed_items() {
        let data = build_fixed();
        for item in &data.items {
            assert_eq!(
                item.fecha_real.is_some(),
                item.estado == "Completado",
                "item {}",
                item.id
            );
        }
    }

    #[test]
    fn dias_retraso_only_for_delayed_items() {
        let data = build_fixed();
        for item in &data.items {
            if item.estado != "Retrasado" {
                assert_eq!(item.dias_retraso, 0, "item {}", item.id);
            }
        }
        assert!(data
            .items
            .iter()
            .any(|it| it.estado == "Retrasado" && it.dias_retraso > 0));
    }

    #[test]
    fn por_area_counts_sum_to_resumen() {
        let data = build_fixed();
        assert_eq!(data.por_area.len(), AREAS.len());

        let sum = |f: fn(&AreaBreakdown) -> usize| data.por_area.iter().map(f).sum::<usize>();
        assert_eq!(sum(|a| a.completados), data.resumen.completados);
        assert_eq!(sum(|a| a.en_progreso), data.resumen.en_progreso);
        assert_eq!(sum(|a| a.pendientes), data.resumen.pendientes);
        assert_eq!(sum(|a| a.retrasados), data.resumen.retrasados);

        // Labels are split on " - "
        assert_eq!(data.por_area[0].area, "Área 1");
        assert_eq!(data.por_area[0].sistema, "Eléctrica");
    }

    #[test]
    fn alert_counts_come_from_the_items() {
        let data = build_fixed();
        // Delayed AND in the electrical area: i % 5 == 0 and i % 4 == 3
        // over 1..=50 gives i in {15, 35}.
        assert_eq!(
            data.alertas[0].descripcion,
            "2 items con retraso > 5 días"
        );
        // Every completed item has progreso < 100 here.
        assert_eq!(
            data.alertas[1].descripcion,
            "12 items completados sin documentación final"
        );
    }

    #[test]
    fn item_fields_follow_the_cycles() {
        let data = build_fixed();
        let first = &data.items[0]; // i = 1
        assert_eq!(first.id, "TERM-2024001");
        assert_eq!(first.area, "Área 2 - Mecánica");
        assert_eq!(first.sistema, "Mecánico");
        assert_eq!(first.estado, "En progreso");
        assert_eq!(first.prioridad, "Media");
        assert_eq!(first.responsable, "RESP_2");
        assert_eq!(first.descripcion, "Terminación 1: mecánico en Área 2");
        assert_eq!(first.fecha_compromiso, "2024-01-26"); // now - 49 days
        assert_eq!(first.progreso, 1);
    }

    #[test]
    fn serialized_shape_matches_the_dashboard_contract() {
        let data = build_fixed();
        let json = serde_json::to_string_pretty(&data).unwrap();
        for key in [
            "\"metadata\"",
            "\"resumen\"",
            "\"por_area\"",
            "\"items\"",
            "\"alertas\"",
            "\"fecha_compromiso\"",
            "\"accion_requerida\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
        // Pending items serialize fecha_real as null, not omitted.
        assert!(json.contains("\"fecha_real\": null"));
    }
}
