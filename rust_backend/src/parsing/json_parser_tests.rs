#[cfg(test)]
mod tests {
    use crate::parsing::json_parser::{parse_catalog_json, parse_catalog_json_str};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test parsing a bare array of catalog rows
    #[test]
    fn test_parse_array() {
        let json = r#"[
            {
                "hostname": "51 Peg",
                "pl_name": "51 Peg b",
                "ra": 344.3665854,
                "dec": 20.7687006,
                "sy_dist": 15.4614,
                "st_spectype": "G2 IV",
                "pl_orbsmax": 0.0527,
                "pl_orbeccen": 0.013,
                "disc_year": 1995
            }
        ]"#;

        let result = parse_catalog_json_str(json);
        assert!(result.is_ok(), "Should parse array: {:?}", result.err());
        let planets = result.unwrap();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].planet_name, "51 Peg b");
        assert_eq!(planets[0].spectral_type.as_deref(), Some("G2 IV"));
        assert_eq!(planets[0].discovery_year, Some(1995));
    }

    /// Test parsing a wrapped export
    #[test]
    fn test_parse_wrapped_object() {
        let json = r#"{
            "planets": [
                {"hostname": "HD 209458", "pl_name": "HD 209458 b", "sy_dist": "48.3"},
                {"hostname": "HD 209458", "pl_name": "HD 209458 c", "sy_dist": ""}
            ]
        }"#;

        let planets = parse_catalog_json_str(json).unwrap();
        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].distance_pc, Some(48.3));
        assert_eq!(planets[1].distance_pc, None);
    }

    /// Test that malformed numeric cells never abort parsing
    #[test]
    fn test_malformed_numbers_are_dropped() {
        let json = r#"[
            {"hostname": "K2-18", "pl_name": "K2-18 b", "ra": "unknown", "dec": true, "sy_dist": 38.0}
        ]"#;

        let planets = parse_catalog_json_str(json).unwrap();
        assert_eq!(planets[0].ra_deg, None);
        assert_eq!(planets[0].dec_deg, None);
        assert_eq!(planets[0].distance_pc, Some(38.0));
    }

    /// Test that a row without a host name reports its JSON path
    #[test]
    fn test_missing_hostname_reports_path() {
        let json = r#"[
            {"hostname": "A", "pl_name": "A b"},
            {"pl_name": "orphan"}
        ]"#;

        let err = parse_catalog_json_str(json).unwrap_err().to_string();
        assert!(err.contains("[1]"), "error should name the row: {}", err);
        assert!(err.contains("hostname"), "error should name the field: {}", err);
    }

    #[test]
    fn test_invalid_json_syntax() {
        let result = parse_catalog_json_str("[{\"hostname\": ");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid JSON syntax"));
    }

    #[test]
    fn test_object_without_planets_key() {
        let err = parse_catalog_json_str(r#"{"rows": []}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("planets"));
        assert!(err.contains("rows"));
    }

    #[test]
    fn test_scalar_document_rejected() {
        let err = parse_catalog_json_str("42").unwrap_err().to_string();
        assert!(err.contains("number"));
    }

    #[test]
    fn test_empty_array() {
        let planets = parse_catalog_json_str("[]").unwrap();
        assert!(planets.is_empty());
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"hostname": "GJ 1214", "pl_name": "GJ 1214 b", "pl_rade": 2.74}}]"#
        )
        .unwrap();

        let planets = parse_catalog_json(file.path()).unwrap();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].radius_earth, Some(2.74));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_catalog_json(std::path::Path::new("/nonexistent/catalog.json"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read JSON file"));
    }
}
