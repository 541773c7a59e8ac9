//! Administration Records
//!
//! Data quality issues, issue categories, integrations and backups.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::infrastructure::Severity;
use super::issue::IssueStatus;
use super::tone::BadgeTone;

/// A data quality problem found in submitted reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataIssue {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: IssueStatus,
    /// Number of affected records
    pub count: u32,
}

impl DataIssue {
    pub fn icon_class(&self) -> &'static str {
        match self.severity {
            Severity::Critical | Severity::High => "issue-icon icon-high",
            Severity::Medium => "issue-icon icon-medium",
            Severity::Low => "issue-icon icon-low",
        }
    }
}

impl Entity for DataIssue {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A named issue category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub description: String,
}

/// Fields of the "Create New Category" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    /// Name is required; an empty name is a silent no-op
    pub fn submit(self) -> Option<CategoryDefinition> {
        if self.name.is_empty() {
            log::debug!("ignoring category draft without a name");
            return None;
        }
        Some(CategoryDefinition {
            name: self.name,
            description: self.description,
        })
    }
}

/// External API connection shown on the integrations tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiIntegration {
    pub name: String,
    pub connected: bool,
    pub last_sync: Option<NaiveDateTime>,
}

impl ApiIntegration {
    pub fn status_label(&self) -> &'static str {
        if self.connected { "Connected" } else { "Disconnected" }
    }

    pub fn badge(&self) -> BadgeTone {
        if self.connected { BadgeTone::Success } else { BadgeTone::Destructive }
    }

    pub fn last_sync_label(&self) -> String {
        self.last_sync
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "Never".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub taken_at: NaiveDateTime,
    pub size_gb: f64,
    pub succeeded: bool,
}

impl BackupRecord {
    pub fn status_label(&self) -> &'static str {
        if self.succeeded { "Success" } else { "Failed" }
    }

    pub fn badge(&self) -> BadgeTone {
        if self.succeeded { BadgeTone::Success } else { BadgeTone::Destructive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_draft_requires_name() {
        assert!(CategoryDraft::default().submit().is_none());

        let draft = CategoryDraft {
            name: "Noise".to_string(),
            description: "Construction and traffic noise".to_string(),
        };
        let created = draft.submit().unwrap();
        assert_eq!(created.name, "Noise");
    }

    #[test]
    fn test_integration_never_synced() {
        let api = ApiIntegration {
            name: "Emergency Services".to_string(),
            connected: false,
            last_sync: None,
        };
        assert_eq!(api.last_sync_label(), "Never");
        assert_eq!(api.status_label(), "Disconnected");
    }
}
