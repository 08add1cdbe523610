//! Wire types for the analysis backend's `/api/upload` response.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator with a loosely specified JSON
//! shape, so decoding is lenient: missing or `null` collections become empty,
//! a risk flag that is not a boolean becomes `RiskStatus::Unknown`, and a file
//! size that is not a number becomes `None` rather than a decode failure.
//! Category order in `keyValuePairs` is kept exactly as the backend sent it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Parsed body of a successful upload (or fallback fetch).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    /// Files the backend reports as analyzed, in backend order.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub files: Vec<AnalyzedFile>,
    /// Tri-state reading of `isLifeThreatening`.
    #[serde(rename = "isLifeThreatening", default, deserialize_with = "deserialize_risk_status")]
    pub risk: RiskStatus,
    /// Findings grouped by category label, in backend order.
    #[serde(rename = "keyValuePairs", default, deserialize_with = "deserialize_finding_groups")]
    pub findings: Vec<FindingGroup>,
}

/// One analyzed file entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalyzedFile {
    /// Original file name as received by the backend.
    #[serde(default)]
    pub filename: String,
    /// Size in bytes as reported; `None` when missing or not numeric.
    #[serde(default, deserialize_with = "deserialize_lenient_size")]
    pub size: Option<f64>,
}

/// Findings listed under a single category label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindingGroup {
    pub category: String,
    pub findings: Vec<String>,
}

/// Risk verdict carried by `isLifeThreatening`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiskStatus {
    /// `isLifeThreatening: true`.
    LifeThreatening,
    /// `isLifeThreatening: false`.
    Stable,
    /// Field missing, `null`, or not a boolean.
    #[default]
    Unknown,
}

impl RiskStatus {
    /// Map a raw JSON value onto the tri-state verdict.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(true) => Self::LifeThreatening,
            serde_json::Value::Bool(false) => Self::Stable,
            _ => Self::Unknown,
        }
    }
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_risk_status<'de, D>(deserializer: D) -> Result<RiskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(RiskStatus::from_json(&value))
}

fn deserialize_lenient_size<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(size_from_json(&value))
}

/// Numbers and numeric strings are accepted as-is; anything else is `None`.
fn size_from_json(value: &serde_json::Value) -> Option<f64> {
    let size = match value {
        serde_json::Value::Number(number) => number.as_f64()?,
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    size.is_finite().then_some(size)
}

fn deserialize_finding_groups<'de, D>(deserializer: D) -> Result<Vec<FindingGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OrderedFindings>::deserialize(deserializer)?
        .map(|ordered| ordered.0)
        .unwrap_or_default())
}

/// `keyValuePairs` read entry by entry so category order survives decoding.
struct OrderedFindings(Vec<FindingGroup>);

impl<'de> Deserialize<'de> for OrderedFindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedFindingsVisitor)
    }
}

struct OrderedFindingsVisitor;

impl<'de> Visitor<'de> for OrderedFindingsVisitor {
    type Value = OrderedFindings;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category labels to finding lists")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups: Vec<FindingGroup> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((category, items)) = map.next_entry::<String, Option<Vec<serde_json::Value>>>()? {
            let findings = items.unwrap_or_default().into_iter().map(finding_text).collect();
            // A repeated key keeps its first position and its last value.
            if let Some(existing) = groups.iter_mut().find(|group| group.category == category) {
                existing.findings = findings;
            } else {
                groups.push(FindingGroup { category, findings });
            }
        }
        Ok(OrderedFindings(groups))
    }
}

fn finding_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}
