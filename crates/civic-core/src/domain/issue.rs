//! Issue Entity
//!
//! Citizen-reported civic problems and the client-only intake form.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::tone::BadgeTone;

/// Lifecycle status of a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [IssueStatus::Open, IssueStatus::InProgress, IssueStatus::Resolved];

    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            IssueStatus::Open => BadgeTone::Destructive,
            IssueStatus::InProgress => BadgeTone::Default,
            IssueStatus::Resolved => BadgeTone::Success,
        }
    }
}

/// Urgency of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            Priority::Urgent | Priority::High => BadgeTone::Destructive,
            Priority::Medium => BadgeTone::Warning,
            Priority::Low => BadgeTone::Secondary,
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

/// Department an issue is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    #[default]
    Road,
    Water,
    Lighting,
    PublicSafety,
    Environment,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::Road,
        IssueCategory::Water,
        IssueCategory::Lighting,
        IssueCategory::PublicSafety,
        IssueCategory::Environment,
        IssueCategory::Other,
    ];

    /// Form value
    pub fn id(&self) -> &'static str {
        match self {
            IssueCategory::Road => "road",
            IssueCategory::Water => "water",
            IssueCategory::Lighting => "lighting",
            IssueCategory::PublicSafety => "public-safety",
            IssueCategory::Environment => "environment",
            IssueCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Road => "Road Issues",
            IssueCategory::Water => "Water Issues",
            IssueCategory::Lighting => "Street Lighting",
            IssueCategory::PublicSafety => "Public Safety",
            IssueCategory::Environment => "Environment",
            IssueCategory::Other => "Other",
        }
    }
}

impl FromStr for IssueCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        IssueCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

/// A citizen complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub category: IssueCategory,
    pub location: String,
    pub status: IssueStatus,
    pub priority: Priority,
    pub date: NaiveDate,
    pub description: String,
    pub reported_by: String,
    /// Set once the complaint has been closed out
    #[serde(default)]
    pub resolved_date: Option<NaiveDate>,
}

impl Entity for Complaint {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Fields collected by the "Report New Issue" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub priority: Priority,
    pub location: String,
}

impl ComplaintDraft {
    /// Title and location are the required fields
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Form labels of the required fields left empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("Issue Title");
        }
        if self.location.is_empty() {
            missing.push("Location");
        }
        missing
    }

    /// Turn the draft into a new open complaint.
    ///
    /// Returns `None` when a required field is empty; the caller treats that
    /// as a silent no-op and keeps the form open.
    pub fn submit(self, now_millis: u64, today: NaiveDate, reported_by: &str) -> Option<Complaint> {
        if !self.is_complete() {
            log::debug!("ignoring incomplete complaint draft");
            return None;
        }
        Some(Complaint {
            id: now_millis.to_string(),
            title: self.title,
            category: self.category,
            location: self.location,
            status: IssueStatus::Open,
            priority: self.priority,
            date: today,
            description: self.description,
            reported_by: reported_by.to_string(),
            resolved_date: None,
        })
    }
}

/// Newest complaints are shown first
pub fn prepend_complaint(complaints: &mut Vec<Complaint>, complaint: Complaint) {
    complaints.insert(0, complaint);
}

/// Append simulated voice-to-text output to a description
pub fn append_transcript(description: &str, transcript: &str) -> String {
    if description.is_empty() {
        transcript.to_string()
    } else {
        format!("{} {}", description, transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
    }

    fn pothole_draft() -> ComplaintDraft {
        ComplaintDraft {
            title: "Pothole".to_string(),
            description: String::new(),
            category: IssueCategory::Road,
            priority: Priority::High,
            location: "Main St".to_string(),
        }
    }

    #[test]
    fn test_submit_complete_draft() {
        let complaint = pothole_draft().submit(1705400000000, today(), "Current User").unwrap();
        assert_eq!(complaint.id, "1705400000000");
        assert_eq!(complaint.status, IssueStatus::Open);
        assert_eq!(complaint.date, today());
        assert_eq!(complaint.reported_by, "Current User");
        assert_eq!(complaint.priority, Priority::High);
        assert!(complaint.resolved_date.is_none());
    }

    #[test]
    fn test_submit_requires_title_and_location() {
        let mut draft = pothole_draft();
        draft.title.clear();
        assert!(draft.submit(1, today(), "Current User").is_none());

        let mut draft = pothole_draft();
        draft.location.clear();
        assert!(draft.submit(1, today(), "Current User").is_none());
    }

    #[test]
    fn test_missing_fields_names_required_inputs() {
        assert!(pothole_draft().missing_fields().is_empty());
        assert_eq!(ComplaintDraft::default().missing_fields(), vec!["Issue Title", "Location"]);

        let mut draft = pothole_draft();
        draft.location.clear();
        draft.description.clear();
        assert_eq!(draft.missing_fields(), vec!["Location"]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut list = Vec::new();
        prepend_complaint(&mut list, pothole_draft().submit(1, today(), "a").unwrap());
        prepend_complaint(&mut list, pothole_draft().submit(2, today(), "b").unwrap());
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id(), "2");
        assert_eq!(list[1].id(), "1");
    }

    #[test]
    fn test_filed_complaints_keep_distinct_keys() {
        let mut list = sample::complaints();
        prepend_complaint(&mut list, pothole_draft().submit(1705400000000, today(), "a").unwrap());
        prepend_complaint(&mut list, pothole_draft().submit(1705400000001, today(), "b").unwrap());
        let keys: HashSet<String> = list.iter().map(|c| c.id()).collect();
        assert_eq!(keys.len(), list.len());
    }

    #[test]
    fn test_append_transcript() {
        assert_eq!(append_transcript("", "Voice note"), "Voice note");
        assert_eq!(append_transcript("Leak", "Voice note"), "Leak Voice note");
    }

    #[test]
    fn test_parse_form_values() {
        assert_eq!("public-safety".parse::<IssueCategory>(), Ok(IssueCategory::PublicSafety));
        assert_eq!("urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert!("potholes".parse::<IssueCategory>().is_err());
    }

    #[test]
    fn test_draft_defaults_match_form() {
        let draft = ComplaintDraft::default();
        assert_eq!(draft.category, IssueCategory::Road);
        assert_eq!(draft.priority, Priority::Medium);
    }
}
