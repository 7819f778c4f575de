//! CampCatalog - Camp Dataset
//!
//! ## Responsibilities
//!
//! - Parse `campamentos.json` (`{ "campamentos": [...] }`)
//! - Flatten `coordenadas.lat` / `coordenadas.lng` onto each record for map consumers
//! - Hold the read-only camp list for the life of the process

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Camp record as consumed by list, map and detail views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camp {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    pub lat: f64,
    pub lng: f64,
    /// Remaining display fields, kept verbatim
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Coordinates as stored in the dataset
#[derive(Debug, Clone, Copy, Deserialize)]
struct Coordinates {
    lat: f64,
    lng: f64,
}

/// Camp record as stored in the dataset
#[derive(Debug, Deserialize)]
struct StoredCamp {
    id: i64,
    #[serde(default)]
    nombre: Option<String>,
    coordenadas: Coordinates,
    #[serde(flatten)]
    details: serde_json::Map<String, serde_json::Value>,
}

impl From<StoredCamp> for Camp {
    fn from(stored: StoredCamp) -> Self {
        Self {
            id: stored.id,
            nombre: stored.nombre,
            lat: stored.coordenadas.lat,
            lng: stored.coordenadas.lng,
            details: stored.details,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Dataset {
    campamentos: Vec<StoredCamp>,
}

/// Read-only camp collection
#[derive(Debug, Clone, Default)]
pub struct CampCatalog {
    camps: Vec<Camp>,
}

impl CampCatalog {
    /// Build a catalog from already flattened records
    pub fn new(camps: Vec<Camp>) -> Self {
        Self { camps }
    }

    /// Parse the dataset JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self {
            camps: dataset.campamentos.into_iter().map(Camp::from).collect(),
        })
    }

    /// Load the dataset from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Catalog(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&text)
            .map_err(|e| Error::Catalog(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            path = %path.display(),
            camp_count = catalog.len(),
            "Camp catalog loaded"
        );
        Ok(catalog)
    }

    /// All camps in dataset order
    pub fn camps(&self) -> &[Camp] {
        &self.camps
    }

    /// Look up a camp by id
    pub fn get(&self, id: i64) -> Option<&Camp> {
        self.camps.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.camps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "campamentos": [
            {
                "id": 3,
                "nombre": "Camping del Lago",
                "provincia": "Huesca",
                "coordenadas": { "lat": 42.5, "lng": -0.3 }
            },
            {
                "id": 1000,
                "coordenadas": { "lat": 40.1, "lng": 2.7 }
            }
        ]
    }"#;

    #[test]
    fn test_coordinates_flattened() {
        let catalog = CampCatalog::from_json(DATASET).unwrap();
        assert_eq!(catalog.len(), 2);

        let camp = catalog.get(3).unwrap();
        assert_eq!(camp.nombre.as_deref(), Some("Camping del Lago"));
        assert_eq!(camp.lat, 42.5);
        assert_eq!(camp.lng, -0.3);
        assert_eq!(camp.details["provincia"], "Huesca");
        assert!(!camp.details.contains_key("coordenadas"));
    }

    #[test]
    fn test_dataset_order_preserved() {
        let catalog = CampCatalog::from_json(DATASET).unwrap();
        let ids: Vec<i64> = catalog.camps().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1000]);
        assert!(catalog.get(1000).unwrap().nombre.is_none());
    }

    #[test]
    fn test_serialized_record_is_flat() {
        let catalog = CampCatalog::from_json(DATASET).unwrap();
        let value = serde_json::to_value(catalog.get(3).unwrap()).unwrap();
        assert_eq!(value["lat"], 42.5);
        assert_eq!(value["lng"], -0.3);
        assert_eq!(value["provincia"], "Huesca");
    }

    #[test]
    fn test_missing_coordinates_rejected() {
        let json = r#"{ "campamentos": [ { "id": 1 } ] }"#;
        assert!(CampCatalog::from_json(json).is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = CampCatalog::load("/nonexistent/campamentos.json")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }
}
