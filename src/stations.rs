use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Point, Station};

/// One entry of the portal's station listing endpoint. Only `name` is
/// guaranteed; everything else depends on how well the station is maintained
/// in the provider's directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl StationRecord {
    // Station ids arrive as numbers in some listings and strings in others.
    fn code(&self) -> Option<String> {
        match &self.id {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    fn to_station(&self) -> Station {
        let point = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Point { lat, lng }),
            _ => None,
        };
        Station {
            code: self.code(),
            name: self.name.clone(),
            brand: self.brand.clone(),
            point,
            address: self.address.clone(),
        }
    }
}

/// Station metadata indexed by name, used to enrich parsed transactions.
/// Names are not unique in the source data, so lookups are best-effort.
#[derive(Debug, Default)]
pub struct StationDirectory {
    by_name: HashMap<String, StationRecord>,
}

impl StationDirectory {
    pub fn rebuild(&mut self, records: Vec<StationRecord>) {
        self.by_name.clear();
        for record in records {
            // First record wins on duplicate names.
            self.by_name.entry(record.name.clone()).or_insert(record);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Station> {
        self.by_name.get(name).map(StationRecord::to_station)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_from_json(json: &str) -> StationDirectory {
        let records: Vec<StationRecord> = serde_json::from_str(json).unwrap();
        let mut directory = StationDirectory::default();
        directory.rebuild(records);
        directory
    }

    #[test]
    fn listing_with_all_fields_builds_full_station() {
        let directory = directory_from_json(
            r#"[{"name": "АЗС №12", "id": "S-12", "brand": "Лукойл",
                 "address": "Тверская 1", "lat": 55.75, "lng": 37.61}]"#,
        );
        let station = directory.lookup("АЗС №12").unwrap();
        assert_eq!(station.code.as_deref(), Some("S-12"));
        assert_eq!(station.brand.as_deref(), Some("Лукойл"));
        let point = station.point.unwrap();
        assert_eq!(point.lat, 55.75);
        assert_eq!(point.lng, 37.61);
    }

    #[test]
    fn numeric_id_is_stringified() {
        let directory = directory_from_json(r#"[{"name": "АЗС №7", "id": 7}]"#);
        let station = directory.lookup("АЗС №7").unwrap();
        assert_eq!(station.code.as_deref(), Some("7"));
    }

    #[test]
    fn bare_name_record_still_resolves() {
        let directory = directory_from_json(r#"[{"name": "АЗС №3"}]"#);
        let station = directory.lookup("АЗС №3").unwrap();
        assert!(station.code.is_none());
        assert!(station.point.is_none());
        assert!(station.address.is_none());
    }

    #[test]
    fn coordinate_needs_both_axes() {
        let directory = directory_from_json(r#"[{"name": "АЗС №9", "lat": 55.0}]"#);
        assert!(directory.lookup("АЗС №9").unwrap().point.is_none());
    }

    #[test]
    fn first_record_wins_on_duplicate_names() {
        let directory = directory_from_json(
            r#"[{"name": "АЗС №1", "id": 1}, {"name": "АЗС №1", "id": 2}]"#,
        );
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("АЗС №1").unwrap().code.as_deref(), Some("1"));
    }

    #[test]
    fn unknown_name_yields_nothing() {
        let directory = directory_from_json(r#"[{"name": "АЗС №1"}]"#);
        assert!(directory.lookup("АЗС №2").is_none());
    }
}
