//! AI Report Generation
//!
//! The generator is a simulation: `begin` hands out a run ticket and the UI
//! calls `finish` with it after a fixed delay. Nothing is produced or stored.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{BadgeTone, DomainError, DomainResult, Priority};
use crate::pending::{PendingRun, RunTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Predictive,
    Performance,
    Resource,
    Citizen,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Predictive,
        ReportType::Performance,
        ReportType::Resource,
        ReportType::Citizen,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportType::Predictive => "predictive",
            ReportType::Performance => "performance",
            ReportType::Resource => "resource",
            ReportType::Citizen => "citizen",
        }
    }

    /// Long form used in the report type select
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Predictive => "Predictive Maintenance",
            ReportType::Performance => "Performance Analysis",
            ReportType::Resource => "Resource Optimization",
            ReportType::Citizen => "Citizen Satisfaction",
        }
    }

    /// Short form used on report history badges
    pub fn short_label(&self) -> &'static str {
        match self {
            ReportType::Predictive => "Predictive",
            ReportType::Performance => "Performance",
            ReportType::Resource => "Resource",
            ReportType::Citizen => "Citizen",
        }
    }
}

impl FromStr for ReportType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPeriod {
    #[default]
    Last30Days,
    Last90Days,
    Last6Months,
    LastYear,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Last30Days,
        ReportPeriod::Last90Days,
        ReportPeriod::Last6Months,
        ReportPeriod::LastYear,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportPeriod::Last30Days => "30d",
            ReportPeriod::Last90Days => "90d",
            ReportPeriod::Last6Months => "6m",
            ReportPeriod::LastYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Last30Days => "Last 30 Days",
            ReportPeriod::Last90Days => "Last 90 Days",
            ReportPeriod::Last6Months => "Last 6 Months",
            ReportPeriod::LastYear => "Last Year",
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        ReportPeriod::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    StreetLighting,
    RoadManagement,
    WaterServices,
    PublicSafety,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::StreetLighting,
        Department::RoadManagement,
        Department::WaterServices,
        Department::PublicSafety,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::StreetLighting => "Street Lighting",
            Department::RoadManagement => "Road Management",
            Department::WaterServices => "Water Services",
            Department::PublicSafety => "Public Safety",
        }
    }
}

/// Options chosen on the "Generate New Report" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub period: ReportPeriod,
    pub departments: Vec<Department>,
}

impl Default for ReportRequest {
    /// Every department is ticked initially
    fn default() -> Self {
        Self {
            report_type: ReportType::default(),
            period: ReportPeriod::default(),
            departments: Department::ALL.to_vec(),
        }
    }
}

impl ReportRequest {
    pub fn includes(&self, department: Department) -> bool {
        self.departments.contains(&department)
    }

    /// Tick or untick a department, keeping `Department::ALL` order
    pub fn toggle_department(&mut self, department: Department) {
        if self.includes(department) {
            self.departments.retain(|d| *d != department);
        } else {
            self.departments.push(department);
            self.departments
                .sort_by_key(|d| Department::ALL.iter().position(|x| x == d));
        }
    }
}

/// Whether a report run is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationState {
    run: PendingRun,
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        self.run.is_active()
    }

    /// Start a run. Returns `None` if one is already in flight.
    pub fn begin(&mut self) -> Option<RunTicket> {
        self.run.start()
    }

    /// End the run behind `ticket`; a cancelled run is left alone
    pub fn finish(&mut self, ticket: RunTicket) -> bool {
        self.run.complete(ticket)
    }

    /// Leaving the page abandons the run
    pub fn cancel(&mut self) {
        self.run.cancel();
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_generating() {
            "Generating Report..."
        } else {
            "Generate AI Report"
        }
    }
}

/// A finding surfaced by the (simulated) analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Percent
    pub confidence: u8,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Complete,
    Processing,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Complete => "Complete",
            ReportStatus::Processing => "Processing",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            ReportStatus::Complete => BadgeTone::Success,
            ReportStatus::Processing => BadgeTone::Warning,
        }
    }
}

/// An entry in the report history list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub name: String,
    pub date: NaiveDate,
    pub report_type: ReportType,
    pub status: ReportStatus,
}

impl GeneratedReport {
    pub fn downloadable(&self) -> bool {
        self.status == ReportStatus::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_cycle() {
        let mut state = GenerationState::default();
        assert!(!state.is_generating());
        let ticket = state.begin().unwrap();
        assert!(state.is_generating());
        assert_eq!(state.button_label(), "Generating Report...");
        assert!(state.begin().is_none());
        assert!(state.finish(ticket));
        assert!(!state.is_generating());
        assert_eq!(state.button_label(), "Generate AI Report");
    }

    #[test]
    fn test_cancelled_generation_does_not_finish() {
        let mut state = GenerationState::default();
        let ticket = state.begin().unwrap();
        state.cancel();
        assert!(!state.finish(ticket));
        assert!(!state.is_generating());

        let next = state.begin().unwrap();
        assert!(!state.finish(ticket));
        assert!(state.is_generating());
        assert!(state.finish(next));
    }

    #[test]
    fn test_toggle_department_keeps_order() {
        let mut request = ReportRequest::default();
        assert_eq!(request.departments.len(), 4);

        request.toggle_department(Department::RoadManagement);
        assert!(!request.includes(Department::RoadManagement));

        request.toggle_department(Department::StreetLighting);
        request.toggle_department(Department::RoadManagement);
        request.toggle_department(Department::StreetLighting);
        assert_eq!(request.departments, Department::ALL.to_vec());
    }

    #[test]
    fn test_report_type_select_values() {
        for kind in ReportType::ALL {
            assert_eq!(kind.id().parse::<ReportType>(), Ok(kind));
        }
        assert_eq!("6m".parse::<ReportPeriod>(), Ok(ReportPeriod::Last6Months));
    }
}
