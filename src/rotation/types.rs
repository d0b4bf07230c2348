//! Core type definitions.
//!
//! Defines [`SiteId`], the two catalog tags ([`InjectionType`] and [`BodyView`]),
//! [`Site`] (a catalog entry), and [`InjectionRecord`] (one immutable history fact).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of an injection site, as enumerated by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// The two injection categories used to filter candidate sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionType {
    /// Shallow, subcutaneous.
    Subq,
    /// Deep, intramuscular.
    Im,
}

impl InjectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subq => "subq",
            Self::Im => "im",
        }
    }
}

impl std::fmt::Display for InjectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for InjectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "subq" | "sc" | "subcutaneous" => Ok(Self::Subq),
            "im" | "intramuscular" => Ok(Self::Im),
            _ => Err(format!("unknown injection type: {s}")),
        }
    }
}

/// Which side of the body diagram a site is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyView {
    Anterior,
    Posterior,
}

impl BodyView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anterior => "anterior",
            Self::Posterior => "posterior",
        }
    }
}

impl std::fmt::Display for BodyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A catalog entry. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    #[serde(rename = "type")]
    pub injection_type: InjectionType,
    pub view: BodyView,
    pub anatomical_label: String,
}

/// One logged injection. Never mutated once appended to the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionRecord {
    pub site_id: SiteId,
    pub timestamp: DateTime<Utc>,
    pub compound_name: String,
    /// Omitted from the serialized record entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_without_notes_omits_field() {
        let record = InjectionRecord {
            site_id: SiteId::new("abdomen-left"),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            compound_name: "BPC-157".into(),
            notes: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["siteId"], "abdomen-left");
        assert_eq!(json["compoundName"], "BPC-157");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn record_with_notes_keeps_field() {
        let record = InjectionRecord {
            site_id: SiteId::new("glute-right"),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            compound_name: "TB-500".into(),
            notes: Some("slight bruising".into()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""notes":"slight bruising""#));
    }

    #[test]
    fn injection_type_parses_aliases() {
        assert_eq!("subq".parse::<InjectionType>().unwrap(), InjectionType::Subq);
        assert_eq!("SubQ".parse::<InjectionType>().unwrap(), InjectionType::Subq);
        assert_eq!("IM".parse::<InjectionType>().unwrap(), InjectionType::Im);
        assert!("iv".parse::<InjectionType>().is_err());
    }

    #[test]
    fn site_deserializes_type_tag() {
        let site: Site = toml::from_str(
            r#"
id = "delt-left"
type = "im"
view = "anterior"
anatomical_label = "Left deltoid"
"#,
        )
        .unwrap();
        assert_eq!(site.injection_type, InjectionType::Im);
        assert_eq!(site.view, BodyView::Anterior);
        assert_eq!(site.id.as_str(), "delt-left");
    }
}
