//! Sample Data
//!
//! Literal datasets every view starts from. Nothing here is fetched or
//! persisted; each call builds a fresh copy.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    ActivityEntry, ApiIntegration, BackupRecord, CategoryDefinition, ChartDatum, Complaint, DataIssue,
    EmergencyAlert, IssueCategory, IssueStatus, LightStatus, MaintenanceDue, MaintenanceProject, MapMarker,
    MarkerType, ModulePermission, Priority, QualityReading, Road, RoadCondition, RoadReport, Role,
    ScheduledTask, Severity, StatTile, StreetLight, SystemUser, Tone, TrafficLevel, Trend, UserStatus,
    WaterAsset, WaterAssetStatus, WorkOrderStatus,
};
use crate::report::{AiInsight, GeneratedReport, ReportStatus, ReportType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, min, 0).unwrap_or_default()
}

fn datum(name: &str, value: f64, tone: Tone) -> ChartDatum {
    ChartDatum::new(name, value, tone)
}

// ========================
// Dashboard
// ========================

pub fn complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "10-81-13-005".to_string(),
            title: "Large pothole on Main Street".to_string(),
            category: IssueCategory::Road,
            location: "Main St & 3rd Ave".to_string(),
            status: IssueStatus::Open,
            priority: Priority::High,
            date: date(2024, 1, 15),
            description: "Large pothole causing traffic issues".to_string(),
            reported_by: "John Doe".to_string(),
            resolved_date: None,
        },
        Complaint {
            id: "10-81-13-006".to_string(),
            title: "Water main leak".to_string(),
            category: IssueCategory::Water,
            location: "5th Park Ln".to_string(),
            status: IssueStatus::InProgress,
            priority: Priority::Medium,
            date: date(2024, 1, 14),
            description: "Water main leak reported".to_string(),
            reported_by: "Jane Smith".to_string(),
            resolved_date: None,
        },
        Complaint {
            id: "10-81-13-007".to_string(),
            title: "Street light not functioning".to_string(),
            category: IssueCategory::Lighting,
            location: "Central Plaza".to_string(),
            status: IssueStatus::Resolved,
            priority: Priority::Low,
            date: date(2024, 1, 13),
            description: "Street light not functioning".to_string(),
            reported_by: "Mike Johnson".to_string(),
            resolved_date: None,
        },
    ]
}

pub fn category_distribution() -> Vec<ChartDatum> {
    vec![
        datum("Road Issues", 32.0, Tone::Red),
        datum("Water Issues", 28.0, Tone::Blue),
        datum("Street Lighting", 25.0, Tone::Yellow),
        datum("Other", 15.0, Tone::Gray),
    ]
}

pub fn priority_distribution() -> Vec<ChartDatum> {
    vec![
        datum("High", 23.0, Tone::Red),
        datum("Medium", 45.0, Tone::Yellow),
        datum("Low", 78.0, Tone::Green),
    ]
}

// ========================
// Map
// ========================

pub fn map_markers() -> Vec<MapMarker> {
    let marker = |id, x, y, kind, priority, status, title: &str, description: &str, reported_by: &str, day| MapMarker {
        id,
        x,
        y,
        kind,
        priority,
        status,
        title: title.to_string(),
        description: description.to_string(),
        reported_by: reported_by.to_string(),
        date: date(2024, 1, day),
    };
    vec![
        marker(1, 25.0, 35.0, MarkerType::Road, Priority::High, IssueStatus::Open,
            "Pothole on Main Street", "Large pothole causing traffic delays", "John Doe", 15),
        marker(2, 45.0, 28.0, MarkerType::Water, Priority::Medium, IssueStatus::InProgress,
            "Water Main Leak", "Water leak near residential area", "Jane Smith", 14),
        marker(3, 65.0, 45.0, MarkerType::Lighting, Priority::Low, IssueStatus::Open,
            "Street Light Out", "Street light not functioning properly", "Mike Johnson", 13),
        marker(4, 30.0, 60.0, MarkerType::Road, Priority::High, IssueStatus::InProgress,
            "Traffic Signal Malfunction", "Traffic signal stuck on red", "Sarah Wilson", 12),
        marker(5, 55.0, 25.0, MarkerType::Water, Priority::Medium, IssueStatus::Resolved,
            "Drainage Issue", "Storm drain clogged after rain", "Tom Brown", 11),
    ]
}

/// Share of capacity each department is using
pub fn department_workload() -> Vec<ChartDatum> {
    vec![
        datum("Public Works", 85.0, Tone::Red),
        datum("Parks & Recreation", 60.0, Tone::Green),
        datum("Utilities", 75.0, Tone::Yellow),
        datum("Transportation", 40.0, Tone::Purple),
    ]
}

// ========================
// AI reports
// ========================

pub fn ai_stats() -> Vec<StatTile> {
    vec![
        StatTile::new("Reports Generated", "127", "12% this month", Trend::Up, Tone::Blue),
        StatTile::new("Accuracy Rate", "91%", "Industry leading", Trend::None, Tone::Green),
        StatTile::new("Predictions Made", "23", "This week", Trend::None, Tone::Purple),
        StatTile::new("Cost Savings", "$2.1M", "From predictions", Trend::None, Tone::Orange),
    ]
}

pub fn ai_insights() -> Vec<AiInsight> {
    let insight = |title: &str, description: &str, priority, confidence, action: &str| AiInsight {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        confidence,
        action: action.to_string(),
    };
    vec![
        insight("Predictive Maintenance Alert",
            "AI analysis predicts 3 street lights will fail within next 2 weeks",
            Priority::High, 92, "Schedule maintenance"),
        insight("Traffic Pattern Analysis",
            "Unusual traffic congestion detected on Main St during morning hours",
            Priority::Medium, 87, "Review traffic signals"),
        insight("Water Usage Anomaly",
            "Potential water leak detected in Sector 5 based on usage patterns",
            Priority::High, 95, "Inspect water lines"),
    ]
}

pub fn model_accuracy() -> Vec<ChartDatum> {
    vec![
        datum("Predictive", 92.0, Tone::Green),
        datum("Traffic", 87.0, Tone::Blue),
        datum("Water", 95.0, Tone::Purple),
        datum("Infrastructure", 89.0, Tone::Orange),
    ]
}

pub fn monthly_reports() -> Vec<ChartDatum> {
    vec![
        datum("Jan", 45.0, Tone::Blue),
        datum("Feb", 52.0, Tone::Blue),
        datum("Mar", 48.0, Tone::Blue),
        datum("Apr", 61.0, Tone::Blue),
    ]
}

pub fn generated_reports() -> Vec<GeneratedReport> {
    vec![
        GeneratedReport {
            name: "Predictive Maintenance Report - January 2024".to_string(),
            date: date(2024, 1, 15),
            report_type: ReportType::Predictive,
            status: ReportStatus::Complete,
        },
        GeneratedReport {
            name: "Performance Analysis - Q4 2023".to_string(),
            date: date(2024, 1, 10),
            report_type: ReportType::Performance,
            status: ReportStatus::Complete,
        },
        GeneratedReport {
            name: "Resource Optimization Report".to_string(),
            date: date(2024, 1, 5),
            report_type: ReportType::Resource,
            status: ReportStatus::Processing,
        },
    ]
}

// ========================
// Street lighting
// ========================

pub fn lighting_stats() -> Vec<StatTile> {
    vec![
        StatTile::new("Total Lights", "1,247", "2.3% from last month", Trend::Up, Tone::Yellow),
        StatTile::new("Online", "1,180", "94.6% uptime", Trend::None, Tone::Green),
        StatTile::new("Energy Usage", "12.5K", "kWh this month", Trend::None, Tone::Blue),
        StatTile::new("Cost Savings", "$2.8K", "vs last month", Trend::None, Tone::Purple),
    ]
}

pub fn street_lights() -> Vec<StreetLight> {
    vec![
        StreetLight {
            id: "SL-001".to_string(),
            location: "Main St & 1st Ave".to_string(),
            status: LightStatus::Online,
            brightness: 85,
            last_maintenance: date(2023, 12, 15),
            next_maintenance: MaintenanceDue::On(date(2024, 3, 15)),
            energy_usage: 120,
            monthly_cost_cents: 1520,
        },
        StreetLight {
            id: "SL-002".to_string(),
            location: "Oak Park Dr".to_string(),
            status: LightStatus::Offline,
            brightness: 0,
            last_maintenance: date(2023, 11, 20),
            next_maintenance: MaintenanceDue::Overdue,
            energy_usage: 0,
            monthly_cost_cents: 0,
        },
        StreetLight {
            id: "SL-003".to_string(),
            location: "Central Plaza".to_string(),
            status: LightStatus::Dimmed,
            brightness: 45,
            last_maintenance: date(2023, 12, 1),
            next_maintenance: MaintenanceDue::On(date(2024, 2, 28)),
            energy_usage: 80,
            monthly_cost_cents: 960,
        },
        StreetLight {
            id: "SL-004".to_string(),
            location: "Industrial Ave".to_string(),
            status: LightStatus::Online,
            brightness: 90,
            last_maintenance: date(2024, 1, 10),
            next_maintenance: MaintenanceDue::On(date(2024, 4, 10)),
            energy_usage: 135,
            monthly_cost_cents: 1680,
        },
    ]
}

pub fn lighting_performance() -> Vec<ChartDatum> {
    vec![
        datum("Online", 85.0, Tone::Green),
        datum("Offline", 8.0, Tone::Red),
        datum("Dimmed", 7.0, Tone::Yellow),
    ]
}

pub fn lighting_energy() -> Vec<ChartDatum> {
    vec![
        datum("Jan", 12500.0, Tone::Blue),
        datum("Feb", 11800.0, Tone::Blue),
        datum("Mar", 13200.0, Tone::Blue),
        datum("Apr", 12900.0, Tone::Blue),
    ]
}

/// Label/value pairs of the "Quick Stats" card
pub fn lighting_quick_stats() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Avg Brightness", "78%"),
        ("Maintenance Due", "22"),
        ("Emergency Repairs", "3"),
        ("Cost per Light", "$12.5/mo"),
    ]
}

// ========================
// Roads
// ========================

pub fn road_stats() -> Vec<StatTile> {
    vec![
        StatTile::new("Roads in Good Condition", "127", "3% this quarter", Trend::Up, Tone::Green),
        StatTile::new("Roads Need Maintenance", "43", "Same as last month", Trend::Flat, Tone::Yellow),
        StatTile::new("Critical Repairs Needed", "12", "2 from last week", Trend::Down, Tone::Red),
        StatTile::new("Annual Maintenance Budget", "$12.5M", "67% utilized", Trend::None, Tone::Blue),
    ]
}

pub fn roads() -> Vec<Road> {
    vec![
        Road {
            id: "RD-001".to_string(),
            name: "Main Street".to_string(),
            condition: RoadCondition::Good,
            last_inspection: date(2024, 1, 10),
            next_maintenance: MaintenanceDue::On(date(2024, 4, 15)),
            length_km: 2.5,
            traffic: TrafficLevel::High,
            issues: Vec::new(),
        },
        Road {
            id: "RD-002".to_string(),
            name: "Oak Avenue".to_string(),
            condition: RoadCondition::Poor,
            last_inspection: date(2023, 12, 15),
            next_maintenance: MaintenanceDue::Overdue,
            length_km: 1.8,
            traffic: TrafficLevel::Medium,
            issues: vec!["Potholes".to_string(), "Cracking".to_string()],
        },
        Road {
            id: "RD-003".to_string(),
            name: "Industrial Boulevard".to_string(),
            condition: RoadCondition::Fair,
            last_inspection: date(2024, 1, 5),
            next_maintenance: MaintenanceDue::On(date(2024, 3, 20)),
            length_km: 3.2,
            traffic: TrafficLevel::High,
            issues: vec!["Surface wear".to_string()],
        },
    ]
}

pub fn road_conditions() -> Vec<ChartDatum> {
    vec![
        datum("Good", 127.0, Tone::Green),
        datum("Fair", 43.0, Tone::Yellow),
        datum("Poor", 12.0, Tone::Red),
    ]
}

pub fn maintenance_budget() -> Vec<ChartDatum> {
    vec![
        datum("Q1", 2_500_000.0, Tone::Blue),
        datum("Q2", 3_200_000.0, Tone::Blue),
        datum("Q3", 2_800_000.0, Tone::Blue),
        datum("Q4", 4_000_000.0, Tone::Blue),
    ]
}

pub fn maintenance_projects() -> Vec<MaintenanceProject> {
    let project = |name: &str, progress, deadline, budget: &str| MaintenanceProject {
        name: name.to_string(),
        progress,
        deadline,
        budget: budget.to_string(),
    };
    vec![
        project("Highway 101 Resurfacing", 75, date(2024, 3, 1), "$2.5M"),
        project("Downtown Street Repairs", 45, date(2024, 2, 15), "$800K"),
        project("Residential Area Pothole Fixes", 90, date(2024, 1, 30), "$150K"),
    ]
}

pub fn road_reports() -> Vec<RoadReport> {
    let report = |id: &str, location: &str, issue: &str, priority, status| RoadReport {
        id: id.to_string(),
        location: location.to_string(),
        issue: issue.to_string(),
        priority,
        status,
    };
    vec![
        report("RPT-001", "Main St & 5th Ave", "Large pothole", Priority::High, WorkOrderStatus::InProgress),
        report("RPT-002", "Oak Avenue near School", "Cracked pavement", Priority::Medium, WorkOrderStatus::Assigned),
        report("RPT-003", "Industrial Blvd", "Faded lane markings", Priority::Low, WorkOrderStatus::Open),
    ]
}

// ========================
// Water
// ========================

pub fn water_stats() -> Vec<StatTile> {
    vec![
        StatTile::new("System Uptime", "98.5%", "0.2% from last month", Trend::Up, Tone::Blue),
        StatTile::new("Active Connections", "847", "+12 new connections", Trend::None, Tone::Green),
        StatTile::new("Maintenance Alerts", "12", "Same as yesterday", Trend::Flat, Tone::Yellow),
        StatTile::new("Emergency Situations", "3", "1 resolved today", Trend::Down, Tone::Red),
    ]
}

pub fn water_assets() -> Vec<WaterAsset> {
    let asset = |id: &str, kind: &str, location: &str, status, pressure, flow_rate, inspected| WaterAsset {
        id: id.to_string(),
        kind: kind.to_string(),
        location: location.to_string(),
        status,
        pressure,
        flow_rate,
        last_inspection: inspected,
    };
    vec![
        asset("WS-001", "Water Main", "Downtown District", WaterAssetStatus::Operational, 85, 450, date(2024, 1, 8)),
        asset("WS-002", "Fire Hydrant", "Residential Area A", WaterAssetStatus::MaintenanceRequired, 60, 200, date(2023, 12, 20)),
        asset("WS-003", "Water Main", "Industrial Zone", WaterAssetStatus::Critical, 35, 150, date(2024, 1, 12)),
    ]
}

pub fn water_system_status() -> Vec<ChartDatum> {
    vec![
        datum("Operational", 847.0, Tone::Green),
        datum("Maintenance", 12.0, Tone::Yellow),
        datum("Critical", 3.0, Tone::Red),
    ]
}

pub fn water_quality() -> Vec<ChartDatum> {
    vec![
        datum("pH Level", 7.2, Tone::Green),
        datum("Chlorine", 1.1, Tone::Blue),
        datum("Turbidity", 0.3, Tone::Green),
        datum("Bacteria", 0.0, Tone::Green),
    ]
}

pub fn emergency_alerts() -> Vec<EmergencyAlert> {
    let alert = |kind: &str, location: &str, severity, time: &str| EmergencyAlert {
        kind: kind.to_string(),
        location: location.to_string(),
        severity,
        time: time.to_string(),
    };
    vec![
        alert("Water Main Break", "Elm Street", Severity::Critical, "2 hours ago"),
        alert("Low Pressure", "Park Avenue", Severity::Medium, "4 hours ago"),
        alert("Quality Alert", "Sector 7", Severity::High, "6 hours ago"),
    ]
}

pub fn quality_readings() -> Vec<QualityReading> {
    let reading = |parameter: &str, value: &str, range: &str| QualityReading {
        parameter: parameter.to_string(),
        value: value.to_string(),
        range: range.to_string(),
        within_range: true,
    };
    vec![
        reading("pH Level", "7.2", "6.5-8.5"),
        reading("Chlorine", "1.1 mg/L", "0.5-4.0 mg/L"),
        reading("Turbidity", "0.3 NTU", "<1.0 NTU"),
        reading("Bacteria", "0 CFU/100mL", "0 CFU/100mL"),
    ]
}

pub fn water_schedule() -> Vec<ScheduledTask> {
    let task = |task: &str, day, priority| ScheduledTask {
        task: task.to_string(),
        date: date(2024, 1, day),
        priority,
    };
    vec![
        task("Hydrant Inspection - Zone A", 18, Priority::Medium),
        task("Main Line Pressure Test", 20, Priority::High),
        task("Water Quality Sampling", 22, Priority::High),
        task("Valve Maintenance", 25, Priority::Low),
    ]
}

// ========================
// Users
// ========================

pub fn user_stats() -> Vec<StatTile> {
    vec![
        StatTile::new("Total Users", "47", "+3 this month", Trend::None, Tone::Blue),
        StatTile::new("Active Users", "42", "89% active rate", Trend::None, Tone::Green),
        StatTile::new("Pending Approval", "5", "Need review", Trend::None, Tone::Yellow),
        StatTile::new("Departments", "8", "Across city", Trend::None, Tone::Purple),
    ]
}

pub fn system_users() -> Vec<SystemUser> {
    vec![
        SystemUser {
            id: 1,
            name: "John Smith".to_string(),
            email: "john.smith@city.gov".to_string(),
            role: Role::Admin,
            department: "Public Works".to_string(),
            status: UserStatus::Active,
            last_login: at(2024, 1, 15, 9, 30),
        },
        SystemUser {
            id: 2,
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@city.gov".to_string(),
            role: Role::Manager,
            department: "Water Services".to_string(),
            status: UserStatus::Active,
            last_login: at(2024, 1, 15, 8, 45),
        },
        SystemUser {
            id: 3,
            name: "Mike Wilson".to_string(),
            email: "mike.w@city.gov".to_string(),
            role: Role::Technician,
            department: "Street Lighting".to_string(),
            status: UserStatus::Inactive,
            last_login: at(2024, 1, 10, 16, 20),
        },
    ]
}

pub fn user_roles() -> Vec<ChartDatum> {
    vec![
        datum("Admins", 8.0, Tone::Purple),
        datum("Managers", 15.0, Tone::Blue),
        datum("Technicians", 24.0, Tone::Green),
    ]
}

pub fn weekly_activity() -> Vec<ChartDatum> {
    vec![
        datum("Week 1", 145.0, Tone::Blue),
        datum("Week 2", 158.0, Tone::Blue),
        datum("Week 3", 132.0, Tone::Blue),
        datum("Week 4", 167.0, Tone::Blue),
    ]
}

/// Module access for a role; rows always come in the same module order
pub fn permissions_for(role: Role) -> Vec<ModulePermission> {
    let rows: [(bool, bool, bool); 4] = match role {
        Role::Admin => [(true, true, true), (true, false, true), (true, true, true), (false, false, true)],
        Role::Manager => [(true, true, false), (true, false, false), (true, true, false), (false, false, false)],
        Role::Technician => [(true, false, false), (true, true, false), (true, false, false), (false, false, false)],
        Role::Viewer => [(true, false, false), (true, false, false), (true, false, false), (false, false, false)],
    };
    ["Dashboard", "Map View", "Reports", "User Management"]
        .into_iter()
        .zip(rows)
        .map(|(module, (read, write, admin))| ModulePermission::new(module, read, write, admin))
        .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    let entry = |user: &str, action: &str, time: &str| ActivityEntry {
        user: user.to_string(),
        action: action.to_string(),
        time: time.to_string(),
    };
    vec![
        entry("John Smith", "Updated street light status", "10 minutes ago"),
        entry("Sarah Johnson", "Generated water quality report", "1 hour ago"),
        entry("Mike Wilson", "Completed maintenance task", "2 hours ago"),
        entry("John Smith", "Created new user account", "3 hours ago"),
    ]
}

// ========================
// Settings
// ========================

pub fn system_health() -> Vec<StatTile> {
    vec![
        StatTile::new("System Uptime", "99.9%", "30 days", Trend::None, Tone::Green),
        StatTile::new("Current Version", "2.1.3", "Latest", Trend::None, Tone::Blue),
        StatTile::new("Pending Updates", "3", "Available", Trend::None, Tone::Yellow),
        StatTile::new("Storage Used", "12GB", "of 50GB", Trend::None, Tone::Purple),
    ]
}

pub fn system_usage() -> Vec<ChartDatum> {
    vec![
        datum("CPU", 67.0, Tone::Blue),
        datum("Memory", 45.0, Tone::Green),
        datum("Storage", 78.0, Tone::Yellow),
        datum("Network", 23.0, Tone::Purple),
    ]
}

pub fn api_integrations() -> Vec<ApiIntegration> {
    vec![
        ApiIntegration {
            name: "Weather Service API".to_string(),
            connected: true,
            last_sync: Some(at(2024, 1, 15, 9, 30)),
        },
        ApiIntegration {
            name: "Traffic Data API".to_string(),
            connected: true,
            last_sync: Some(at(2024, 1, 15, 9, 25)),
        },
        ApiIntegration {
            name: "Emergency Services".to_string(),
            connected: false,
            last_sync: None,
        },
    ]
}

pub fn backups() -> Vec<BackupRecord> {
    vec![
        BackupRecord { taken_at: at(2024, 1, 15, 2, 0), size_gb: 1.2, succeeded: true },
        BackupRecord { taken_at: at(2024, 1, 14, 2, 0), size_gb: 1.1, succeeded: true },
        BackupRecord { taken_at: at(2024, 1, 13, 2, 0), size_gb: 1.0, succeeded: false },
    ]
}

// ========================
// History, categories, data quality
// ========================

/// Complaints filed by the signed-in user
pub fn complaint_history() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "UCH-001".to_string(),
            title: "Broken streetlight on Oak Street".to_string(),
            category: IssueCategory::Lighting,
            location: "Oak St & 2nd Ave".to_string(),
            status: IssueStatus::Resolved,
            priority: Priority::Medium,
            date: date(2024, 1, 10),
            description: String::new(),
            reported_by: "John Smith".to_string(),
            resolved_date: Some(date(2024, 1, 15)),
        },
        Complaint {
            id: "UCH-002".to_string(),
            title: "Pothole causing vehicle damage".to_string(),
            category: IssueCategory::Road,
            location: "Main St & 5th Ave".to_string(),
            status: IssueStatus::InProgress,
            priority: Priority::High,
            date: date(2024, 1, 12),
            description: String::new(),
            reported_by: "John Smith".to_string(),
            resolved_date: None,
        },
        Complaint {
            id: "UCH-003".to_string(),
            title: "Water leak in park area".to_string(),
            category: IssueCategory::Water,
            location: "Central Park".to_string(),
            status: IssueStatus::Open,
            priority: Priority::Low,
            date: date(2024, 1, 14),
            description: String::new(),
            reported_by: "John Smith".to_string(),
            resolved_date: None,
        },
    ]
}

pub fn categories() -> Vec<CategoryDefinition> {
    let category = |name: &str, description: &str| CategoryDefinition {
        name: name.to_string(),
        description: description.to_string(),
    };
    vec![
        category("Road Issues", "Potholes, road damage, traffic issues"),
        category("Water & Utilities", "Water leaks, utility outages"),
        category("Street Lighting", "Broken or missing street lights"),
    ]
}

pub fn data_issues() -> Vec<DataIssue> {
    let issue = |id, title: &str, description: &str, severity, status, count| DataIssue {
        id,
        title: title.to_string(),
        description: description.to_string(),
        severity,
        status,
        count,
    };
    vec![
        issue(1, "Missing Location Data", "Several reports missing GPS coordinates",
            Severity::High, IssueStatus::Open, 23),
        issue(2, "Duplicate Reports", "Multiple reports for same issue",
            Severity::Medium, IssueStatus::InProgress, 12),
        issue(3, "Incomplete User Information", "Reports with missing contact details",
            Severity::Low, IssueStatus::Resolved, 8),
    ]
}

/// Label/value pairs of the "Data Quality Overview" card
pub fn data_quality_overview() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Data Completeness", "94%"),
        ("Data Accuracy", "97%"),
        ("Issues Detected", "43"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let ids: HashSet<String> = complaints().iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), complaints().len());

        let ids: HashSet<u32> = map_markers().iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), map_markers().len());
    }

    #[test]
    fn test_markers_inside_map() {
        for marker in map_markers() {
            assert!((0.0..=100.0).contains(&marker.x));
            assert!((0.0..=100.0).contains(&marker.y));
        }
    }

    #[test]
    fn test_permissions_cover_every_module() {
        for role in Role::ALL {
            let rows = permissions_for(role);
            assert_eq!(rows.len(), 4);
            assert_eq!(rows[0].module, "Dashboard");
        }
        assert!(permissions_for(Role::Admin).iter().all(|p| p.admin));
        assert!(permissions_for(Role::Viewer).iter().all(|p| !p.write));
    }

    #[test]
    fn test_history_resolution_dates() {
        for complaint in complaint_history() {
            assert_eq!(complaint.resolved_date.is_some(), complaint.status == IssueStatus::Resolved);
        }
    }
}
