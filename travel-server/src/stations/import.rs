//! Conversion of the provider's stations-list dump into the codes file.
//!
//! The provider publishes its full station inventory as a deeply nested
//! tree (countries, regions, settlements, stations). Only the station
//! title and its provider code matter here; everything else is ignored
//! during deserialization.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top level of the stations-list dump.
#[derive(Debug, Deserialize)]
pub struct StationsList {
    #[serde(default)]
    pub countries: Vec<Country>,
}

#[derive(Debug, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub regions: Vec<Region>,
}

#[derive(Debug, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

#[derive(Debug, Deserialize)]
pub struct Settlement {
    #[serde(default)]
    pub stations: Vec<StationEntry>,
}

/// One station in the dump. Only the display title and the provider code
/// are of interest.
#[derive(Debug, Deserialize)]
pub struct StationEntry {
    pub title: String,
    #[serde(default)]
    pub codes: StationCodes,
}

#[derive(Debug, Default, Deserialize)]
pub struct StationCodes {
    pub yandex_code: Option<String>,
}

/// Parse a stations-list JSON document and flatten it to the codes map.
pub fn convert(json: &str) -> Result<BTreeMap<String, Vec<String>>, serde_json::Error> {
    let list: StationsList = serde_json::from_str(json)?;
    Ok(build_code_map(&list))
}

/// Flatten the stations-list tree into the name to codes mapping the
/// directory loads.
///
/// Codes are appended per title in encounter order, so stations sharing a
/// title accumulate all their codes under one entry. Stations without a
/// provider code are skipped.
pub fn build_code_map(list: &StationsList) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for country in &list.countries {
        for region in &country.regions {
            for settlement in &region.settlements {
                for station in &settlement.stations {
                    let Some(code) = &station.codes.yandex_code else {
                        continue;
                    };
                    map.entry(station.title.clone())
                        .or_default()
                        .push(code.clone());
                }
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations_list(json: &str) -> StationsList {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flattens_the_nested_tree() {
        let list = stations_list(
            r#"{
                "countries": [{
                    "regions": [{
                        "settlements": [{
                            "stations": [
                                {"title": "Moscow", "codes": {"yandex_code": "s9600213"}},
                                {"title": "Tver", "codes": {"yandex_code": "s9603093"}}
                            ]
                        }]
                    }]
                }]
            }"#,
        );

        let map = build_code_map(&list);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Moscow"], vec!["s9600213".to_string()]);
        assert_eq!(map["Tver"], vec!["s9603093".to_string()]);
    }

    #[test]
    fn duplicate_titles_accumulate_codes_in_encounter_order() {
        let list = stations_list(
            r#"{
                "countries": [{
                    "regions": [
                        {"settlements": [{"stations": [
                            {"title": "Moscow", "codes": {"yandex_code": "s9600213"}}
                        ]}]},
                        {"settlements": [{"stations": [
                            {"title": "Moscow", "codes": {"yandex_code": "s2000002"}}
                        ]}]}
                    ]
                }]
            }"#,
        );

        let map = build_code_map(&list);
        assert_eq!(
            map["Moscow"],
            vec!["s9600213".to_string(), "s2000002".to_string()]
        );
    }

    #[test]
    fn stations_without_a_code_are_skipped() {
        let list = stations_list(
            r#"{
                "countries": [{
                    "regions": [{
                        "settlements": [{
                            "stations": [
                                {"title": "No Code Halt", "codes": {}},
                                {"title": "Codeless", "codes": {"yandex_code": null}},
                                {"title": "Tver", "codes": {"yandex_code": "s9603093"}}
                            ]
                        }]
                    }]
                }]
            }"#,
        );

        let map = build_code_map(&list);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("Tver"));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let map = convert(r#"{"countries": [{"regions": [{}]}]}"#).unwrap();
        assert!(map.is_empty());

        let map = convert("{}").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn extra_fields_in_the_dump_are_ignored() {
        let map = convert(
            r#"{
                "countries": [{
                    "title": "Russia",
                    "codes": {"yandex_code": "l225"},
                    "regions": [{
                        "settlements": [{
                            "title": "Moscow",
                            "stations": [{
                                "title": "Leningradsky Station",
                                "direction": "",
                                "station_type": "train_station",
                                "transport_type": "train",
                                "codes": {"yandex_code": "s2000006", "esr_code": "060073"}
                            }]
                        }]
                    }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(map["Leningradsky Station"], vec!["s2000006".to_string()]);
    }
}
