//! Response shapes and status vocabularies shared by the status page client.
//!
//! Remote entities keep every field the API returns in `extra`, so a listing
//! can be echoed back without losing data the client does not model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Incident statuses that count as closed when looking for open incidents.
pub const RESOLVED_INCIDENT_STATUSES: [&str; 3] = ["resolved", "postmortem", "completed"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Component {
    /// Raw status with underscores rendered as spaces.
    pub fn status_label(&self) -> String {
        self.status.replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Incident {
    pub fn is_unresolved(&self) -> bool {
        !RESOLVED_INCIDENT_STATUSES.contains(&self.status.as_str())
    }

    /// Parsed creation timestamp; `None` when absent or not RFC 3339.
    pub fn created_at_time(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(&self.created_at, &Rfc3339).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
}

impl ComponentStatus {
    pub const ALL: [ComponentStatus; 4] = [
        ComponentStatus::Operational,
        ComponentStatus::DegradedPerformance,
        ComponentStatus::PartialOutage,
        ComponentStatus::MajorOutage,
    ];

    /// Wire value, as sent in `component[status]`.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentStatus::Operational => "operational",
            ComponentStatus::DegradedPerformance => "degraded_performance",
            ComponentStatus::PartialOutage => "partial_outage",
            ComponentStatus::MajorOutage => "major_outage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentStatus::Operational => "operational",
            ComponentStatus::DegradedPerformance => "degraded performance",
            ComponentStatus::PartialOutage => "partial outage",
            ComponentStatus::MajorOutage => "major outage",
        }
    }

    /// First status, in canonical order, whose label contains `fragment`
    /// (case-insensitive, underscores read as spaces).
    pub fn match_fragment(fragment: &str) -> Option<Self> {
        let needle = fragment.to_lowercase().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|status| status.label().contains(needle.as_str()))
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.into_iter().map(Self::label).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
}

impl IncidentStatus {
    const ALL: [IncidentStatus; 4] = [
        IncidentStatus::Investigating,
        IncidentStatus::Identified,
        IncidentStatus::Monitoring,
        IncidentStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Identified => "identified",
            IncidentStatus::Monitoring => "monitoring",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}
