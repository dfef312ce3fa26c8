// src/mock/products.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::mock::PROJECT_ID;

pub const MATERIALES: [&str; 6] = [
    "Tuberías A106",
    "Válvulas Globo",
    "Estructuras A36",
    "Equipos Rotativos",
    "Instrumentos",
    "Material Eléctrico",
];

const ESTADOS: [&str; 3] = ["Rechazado", "Reprocesado", "En revisión"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub tipo: String,
    pub generado_en: String,
    pub proyecto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResumen {
    pub total: usize,
    pub rechazados: usize,
    pub reprocesados: usize,
    pub en_revision: usize,
    pub tasa_rechazo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialBreakdown {
    pub material: String,
    pub cantidad: usize,
    pub estado: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonconformingData {
    pub metadata: ProductMetadata,
    pub resumen: ProductResumen,
    pub por_material: Vec<MaterialBreakdown>,
}

/// Non-conforming products dataset: fixed headline numbers plus a
/// per-material breakdown with counts and dispositions cycled by position.
pub fn build(now: DateTime<Local>) -> NonconformingData {
    let por_material = MATERIALES
        .iter()
        .enumerate()
        .map(|(idx, &material)| MaterialBreakdown {
            material: material.to_string(),
            cantidad: (idx + 2) * 2,
            estado: ESTADOS[idx % ESTADOS.len()].to_string(),
        })
        .collect();

    NonconformingData {
        metadata: ProductMetadata {
            tipo: "productos_no_conformes".to_string(),
            generado_en: dates::isoformat(now),
            proyecto: PROJECT_ID.to_string(),
        },
        resumen: ProductResumen {
            total: 32,
            rechazados: 15,
            reprocesados: 12,
            en_revision: 5,
            tasa_rechazo: "46.9%".to_string(),
        },
        por_material,
    }
}
