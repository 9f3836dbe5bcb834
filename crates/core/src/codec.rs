//! JSON and YAML documents for records and transfer objects.
//!
//! Parsing uses `serde_path_to_error` so that a schema mismatch reports the path of the failing
//! field (for example `addresses[0].addressUse`) instead of only the serde message.

use crate::{MapperError, MapperResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Supported document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks a format from a file extension: `.yaml`/`.yml` are YAML, anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse a document of type `T`.
///
/// # Errors
///
/// Returns [`MapperError::Translation`] naming the failing path when the text does not match
/// `T`'s schema, or is not valid JSON/YAML at all.
pub fn parse<T: DeserializeOwned>(text: &str, format: DocumentFormat) -> MapperResult<T> {
    let result = match format {
        DocumentFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(text);
            serde_path_to_error::deserialize::<_, T>(&mut deserializer)
                .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))
        }
        DocumentFormat::Yaml => {
            let deserializer = serde_yaml::Deserializer::from_str(text);
            serde_path_to_error::deserialize::<_, T>(deserializer)
                .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))
        }
    };

    if let Err(err) = &result {
        tracing::debug!("document rejected: {err}");
    }
    result
}

/// Render `value` as pretty-printed JSON or YAML.
///
/// # Errors
///
/// Returns [`MapperError::Serialization`] if the serializer fails.
pub fn render<T: Serialize>(value: &T, format: DocumentFormat) -> MapperResult<String> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| MapperError::Serialization(e.to_string())),
        DocumentFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| MapperError::Serialization(e.to_string()))
        }
    }
}

fn schema_mismatch(path: String, source: impl std::fmt::Display) -> MapperError {
    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    MapperError::Translation(format!("schema mismatch at {path}: {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AddressUse, Patient};
    use crate::transfer::{PatientCreateRequest, PatientUpdateRequest};
    use chrono::NaiveDate;

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("req.yaml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("req.YML")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("req.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("req")),
            DocumentFormat::Json
        );
    }

    #[test]
    fn parses_yaml_create_request() {
        let input = r#"givenName: Sarah
familyName: Williams
dateOfBirth: 1992-03-20
allergies:
  - penicillin
addresses:
  - addressUse: home
    city: Leeds
    primary: true
"#;

        let request: PatientCreateRequest =
            parse(input, DocumentFormat::Yaml).expect("parse yaml");
        assert_eq!(request.given_name.as_deref(), Some("Sarah"));
        assert_eq!(
            request.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1992, 3, 20).expect("date"))
        );
        let addresses = request.addresses.expect("addresses");
        assert_eq!(addresses[0].address_use, Some(AddressUse::Home));
        assert!(addresses[0].primary);
    }

    #[test]
    fn parses_json_update_request_with_missing_fields() {
        let request: PatientUpdateRequest =
            parse(r#"{"phone": "0113 496 0000"}"#, DocumentFormat::Json).expect("parse json");
        assert_eq!(request.phone.as_deref(), Some("0113 496 0000"));
        assert_eq!(request.given_name, None);
        assert_eq!(request.addresses, None);
    }

    #[test]
    fn reports_path_of_wrong_type() {
        let input = r#"{"addresses": [{"addressUse": "castle"}]}"#;
        let err = parse::<PatientCreateRequest>(input, DocumentFormat::Json)
            .expect_err("should reject unknown address use");
        match err {
            MapperError::Translation(msg) => {
                assert!(msg.contains("addresses[0].addressUse"), "{msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_medical_record_number_in_record() {
        let err = parse::<Patient>(r#"medicalRecordNumber: "  ""#, DocumentFormat::Yaml)
            .expect_err("blank MRN rejected");
        match err {
            MapperError::Translation(msg) => assert!(msg.contains("medicalRecordNumber"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn renders_json_and_yaml() {
        let request = PatientUpdateRequest {
            family_name: Some("Okafor".into()),
            ..PatientUpdateRequest::default()
        };

        let json = render(&request, DocumentFormat::Json).expect("render json");
        assert!(json.contains("\"familyName\": \"Okafor\""));

        let yaml = render(&request, DocumentFormat::Yaml).expect("render yaml");
        assert!(yaml.contains("familyName: Okafor"));
    }
}
