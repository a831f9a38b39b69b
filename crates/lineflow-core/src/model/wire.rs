//! Helpers serde del formato persistido.
//!
//! El contrato de la carga serializada representa los timestamps como
//! strings RFC3339 de precisión de segundos con sufijo `Z`, y usa el string
//! vacío como "sin valor". Estos módulos `with` mapean ese formato a
//! `Option<DateTime<Utc>>`.

pub mod rfc3339_opt {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where D: Deserializer<'de>
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(&raw).map(|ts| Some(ts.with_timezone(&Utc)))
                                          .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super::rfc3339_opt", default)]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn empty_string_means_unset() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":""}"#).unwrap();
        assert_eq!(stamp.at, None);
        assert_eq!(serde_json::to_string(&stamp).unwrap(), r#"{"at":""}"#);
    }

    #[test]
    fn roundtrip_second_precision() {
        let raw = r#"{"at":"2026-08-07T10:30:00Z"}"#;
        let stamp: Stamp = serde_json::from_str(raw).unwrap();
        assert!(stamp.at.is_some());
        assert_eq!(serde_json::to_string(&stamp).unwrap(), raw);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"ayer"}"#).is_err());
    }
}
