//! Pages
//!
//! One component per sidebar destination.

mod ai_report;
mod categories;
mod dashboard;
mod data_issues;
mod history;
mod lighting;
mod map;
mod roads;
mod settings;
mod users;
mod water;

pub use ai_report::AiReportPage;
pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use data_issues::DataIssuesPage;
pub use history::HistoryPage;
pub use lighting::LightingPage;
pub use map::MapPage;
pub use roads::RoadsPage;
pub use settings::SettingsPage;
pub use users::UsersPage;
pub use water::WaterPage;
