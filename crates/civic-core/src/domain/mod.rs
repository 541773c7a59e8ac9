//! Domain Layer
//!
//! Transient, in-memory view-model records. Every status and priority is a
//! closed enum, so no record can carry a value outside its set.

mod entity;
mod tone;
mod issue;
mod marker;
mod chart;
mod infrastructure;
mod people;
mod admin;

pub use entity::{Entity, DomainError, DomainResult};
pub use tone::{Tone, BadgeTone};
pub use issue::{IssueStatus, Priority, IssueCategory, Complaint, ComplaintDraft, prepend_complaint, append_transcript};
pub use marker::{MarkerType, MapMarker};
pub use chart::{ChartDatum, StatTile, Trend};
pub use infrastructure::{
    MaintenanceDue, LightStatus, StreetLight, RoadCondition, TrafficLevel, Road, MaintenanceProject,
    WorkOrderStatus, RoadReport, WaterAssetStatus, WaterAsset, Severity, EmergencyAlert, QualityReading,
    ScheduledTask, format_cents,
};
pub use people::{Role, UserStatus, SystemUser, ModulePermission, ActivityEntry, CurrentUser};
pub use admin::{DataIssue, CategoryDefinition, CategoryDraft, ApiIntegration, BackupRecord};
