// src/mock/sample.rs
//
// The quick sample dataset behind menu option 3. Unlike the batch datasets
// it uses the camelCase English field names of the first dashboard
// prototype, which the UI still accepts for `sic3pro_data.json`.
use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::mock::PROJECT_ID;

const SYSTEMS: [&str; 4] = ["Eléctrico", "Mecánico", "Instrumentación", "Civil"];
const STATUSES: [&str; 4] = ["completed", "pending", "delayed", "in_progress"];
const PRIORITIES: [&str; 3] = ["Alta", "Media", "Baja"];
const ITEM_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMetadata {
    pub source: String,
    pub last_updated: String,
    pub project: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSummary {
    pub total_items: usize,
    pub completed: usize,
    pub pending: usize,
    pub delayed: usize,
    pub efficiency: String,
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleItem {
    pub id: String,
    pub description: String,
    pub area: String,
    pub system: String,
    pub status: String,
    pub commitment_date: String,
    pub responsible: String,
    /// Days until (or past, when negative) the commitment date.
    pub days_remaining: i32,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAlert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub action_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    pub metadata: SampleMetadata,
    pub summary: SampleSummary,
    pub items: Vec<SampleItem>,
    pub alerts: Vec<SampleAlert>,
}

pub fn build(now: DateTime<Local>) -> SampleData {
    let month_start = dates::ymd(now.with_day(1).unwrap_or(now));

    let items = (0..ITEM_COUNT)
        .map(|i| SampleItem {
            id: format!("TERM-{}", 1000 + i),
            description: format!("Terminación {}: Sistema eléctrico área {}", i + 1, i % 5 + 1),
            area: format!("Área {}", i % 5 + 1),
            system: SYSTEMS[i % SYSTEMS.len()].to_string(),
            status: STATUSES[i % STATUSES.len()].to_string(),
            commitment_date: month_start.clone(),
            responsible: format!("Responsable {}", (i % 3) + 1),
            days_remaining: (i % 7) as i32 - 3,
            priority: PRIORITIES[i % PRIORITIES.len()].to_string(),
        })
        .collect();

    SampleData {
        metadata: SampleMetadata {
            source: "SIC3PRO - Datos de ejemplo".to_string(),
            last_updated: dates::isoformat(now),
            project: PROJECT_ID.to_string(),
            kind: "detalles_terminacion".to_string(),
        },
        summary: SampleSummary {
            total_items: 156,
            completed: 94,
            pending: 42,
            delayed: 20,
            efficiency: "78%".to_string(),
            last_update: now.format("%Y-%m-%d %H:%M").to_string(),
        },
        items,
        alerts: vec![
            SampleAlert {
                id: "ALT-001".to_string(),
                kind: "critical".to_string(),
                title: "Retraso crítico en área eléctrica".to_string(),
                description: "3 items con más de 10 días de retraso".to_string(),
                date: dates::ymd(now),
                action_required: true,
            },
            SampleAlert {
                id: "ALT-002".to_string(),
                kind: "warning".to_string(),
                title: "No conformidad pendiente de revisión".to_string(),
                description: "NC-2024-001 requiere revisión inmediata".to_string(),
                date: dates::ymd(now),
                action_required: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn build_fixed() -> SampleData {
        build(Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
    }

    #[test]
    fn fifty_items_anchored_to_the_month_start() {
        let data = build_fixed();
        assert_eq!(data.items.len(), 50);
        assert!(data.items.iter().all(|it| it.commitment_date == "2024-03-01"));

        let first = &data.items[0]; // i = 0
        assert_eq!(first.id, "TERM-1000");
        assert_eq!(first.status, "completed");
        assert_eq!(first.days_remaining, -3);

        // days_remaining cycles through -3..=3
        let last = &data.items[6]; // i = 6
        assert_eq!(last.days_remaining, 3);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_string_pretty(&build_fixed()).unwrap();
        for key in [
            "\"lastUpdated\"",
            "\"totalItems\"",
            "\"commitmentDate\"",
            "\"daysRemaining\"",
            "\"actionRequired\"",
            "\"type\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
    }
}
