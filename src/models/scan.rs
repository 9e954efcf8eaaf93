// Scan Record Model
// Represents one completed assessment as served by GET /scans/{id}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Naive timestamp layouts emitted by the scanning service, tried in order
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A single vulnerability finding inside a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Vulnerability name; used as the finding's identity
    pub vulnerability: String,
    #[serde(default = "default_severity")]
    pub severity: String, // "High", "Medium", "Low", "Info", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

fn default_severity() -> String {
    "Info".to_string()
}

impl Finding {
    /// Create new finding
    pub fn new(vulnerability: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            vulnerability: vulnerability.into(),
            severity: severity.into(),
            description: None,
            remediation: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set remediation
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

/// Scan record as returned by the analytics service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub url: String,
    /// Raw ISO-8601 timestamp; validated when the record is ordered
    #[serde(default)]
    pub scan_date: Option<String>,
    #[serde(deserialize_with = "deserialize_score")]
    pub risk_score: i32,
    #[serde(default, rename = "scan_details")]
    pub findings: Option<Vec<Finding>>,
}

impl ScanRecord {
    /// Create new scan record
    pub fn new(url: impl Into<String>, risk_score: i32) -> Self {
        Self {
            id: None,
            url: url.into(),
            scan_date: None,
            risk_score,
            findings: None,
        }
    }

    /// Set identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set scan timestamp
    pub fn with_scan_date(mut self, scan_date: impl Into<String>) -> Self {
        self.scan_date = Some(scan_date.into());
        self
    }

    /// Append a finding
    pub fn with_finding(mut self, finding: Finding) -> Self {
        self.findings.get_or_insert_with(Vec::new).push(finding);
        self
    }

    /// Findings of this scan; an absent list reads as empty
    pub fn findings(&self) -> &[Finding] {
        self.findings.as_deref().unwrap_or(&[])
    }

    /// Parsed scan timestamp, `None` when missing or unparsable
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.scan_date.as_deref().and_then(parse_timestamp)
    }
}

/// Parse a timestamp in any of the layouts the scanning service produces.
///
/// Naive timestamps are interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The service stores scores as floats; round to the nearest integer and
/// reject anything outside 0-100
fn deserialize_score<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("risk_score must be a finite number"));
    }

    let rounded = value.round();
    if !(0.0..=100.0).contains(&rounded) {
        return Err(serde::de::Error::custom(format!(
            "risk_score must be between 0 and 100, got {}",
            value
        )));
    }
    Ok(rounded as i32)
}
