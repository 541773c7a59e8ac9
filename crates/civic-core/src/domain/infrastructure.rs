//! Infrastructure Records
//!
//! Street lights, roads and water assets shown on the department pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::issue::Priority;
use super::tone::BadgeTone;

/// When the next maintenance visit falls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceDue {
    On(NaiveDate),
    Overdue,
}

impl MaintenanceDue {
    pub fn is_overdue(&self) -> bool {
        matches!(self, MaintenanceDue::Overdue)
    }

    pub fn label(&self) -> String {
        match self {
            MaintenanceDue::On(date) => date.to_string(),
            MaintenanceDue::Overdue => "Overdue".to_string(),
        }
    }
}

// ========================
// Street lighting
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightStatus {
    Online,
    Offline,
    Dimmed,
}

impl LightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LightStatus::Online => "Online",
            LightStatus::Offline => "Offline",
            LightStatus::Dimmed => "Dimmed",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            LightStatus::Online => BadgeTone::Success,
            LightStatus::Offline => BadgeTone::Destructive,
            LightStatus::Dimmed => BadgeTone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetLight {
    pub id: String,
    pub location: String,
    pub status: LightStatus,
    /// Percent of full output
    pub brightness: u8,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: MaintenanceDue,
    /// Watts
    pub energy_usage: u32,
    /// Monthly cost in cents
    pub monthly_cost_cents: u32,
}

impl StreetLight {
    pub fn monthly_cost(&self) -> String {
        format_cents(self.monthly_cost_cents)
    }
}

impl Entity for StreetLight {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// `$15.2`, `$0`: dollars with at most one trailing decimal digit
pub fn format_cents(cents: u32) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    if rest == 0 {
        format!("${}", dollars)
    } else if rest % 10 == 0 {
        format!("${}.{}", dollars, rest / 10)
    } else {
        format!("${}.{:02}", dollars, rest)
    }
}

// ========================
// Roads
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadCondition {
    Good,
    Fair,
    Poor,
}

impl RoadCondition {
    pub fn label(&self) -> &'static str {
        match self {
            RoadCondition::Good => "Good",
            RoadCondition::Fair => "Fair",
            RoadCondition::Poor => "Poor",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            RoadCondition::Good => BadgeTone::Success,
            RoadCondition::Fair => BadgeTone::Warning,
            RoadCondition::Poor => BadgeTone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "Low",
            TrafficLevel::Medium => "Medium",
            TrafficLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub id: String,
    pub name: String,
    pub condition: RoadCondition,
    pub last_inspection: NaiveDate,
    pub next_maintenance: MaintenanceDue,
    pub length_km: f64,
    pub traffic: TrafficLevel,
    pub issues: Vec<String>,
}

impl Entity for Road {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceProject {
    pub name: String,
    /// Percent complete
    pub progress: u8,
    pub deadline: NaiveDate,
    pub budget: String,
}

/// Dispatch state of a field work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    Open,
    Assigned,
    InProgress,
}

impl WorkOrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "Open",
            WorkOrderStatus::Assigned => "Assigned",
            WorkOrderStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadReport {
    pub id: String,
    pub location: String,
    pub issue: String,
    pub priority: Priority,
    pub status: WorkOrderStatus,
}

// ========================
// Water
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterAssetStatus {
    Operational,
    MaintenanceRequired,
    Critical,
}

impl WaterAssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WaterAssetStatus::Operational => "Operational",
            WaterAssetStatus::MaintenanceRequired => "Maintenance Required",
            WaterAssetStatus::Critical => "Critical",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            WaterAssetStatus::Operational => BadgeTone::Success,
            WaterAssetStatus::MaintenanceRequired => BadgeTone::Warning,
            WaterAssetStatus::Critical => BadgeTone::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAsset {
    pub id: String,
    pub kind: String,
    pub location: String,
    pub status: WaterAssetStatus,
    /// PSI
    pub pressure: u32,
    /// Gallons per minute
    pub flow_rate: u32,
    pub last_inspection: NaiveDate,
}

impl Entity for WaterAsset {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            Severity::Critical => BadgeTone::Destructive,
            Severity::High => BadgeTone::Warning,
            Severity::Medium | Severity::Low => BadgeTone::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub kind: String,
    pub location: String,
    pub severity: Severity,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReading {
    pub parameter: String,
    pub value: String,
    pub range: String,
    pub within_range: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub task: String,
    pub date: NaiveDate,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1520), "$15.2");
        assert_eq!(format_cents(0), "$0");
        assert_eq!(format_cents(960), "$9.6");
        assert_eq!(format_cents(1205), "$12.05");
    }

    #[test]
    fn test_maintenance_due_label() {
        let due = MaintenanceDue::On(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(due.label(), "2024-03-15");
        assert!(!due.is_overdue());
        assert_eq!(MaintenanceDue::Overdue.label(), "Overdue");
    }
}
