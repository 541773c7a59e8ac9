//! UI Components
//!
//! Reusable Leptos components.

pub mod charts;
pub mod ui;
mod complaint_form;
mod header;
mod landing;
mod login_modal;
mod sidebar;

pub use charts::{BarChart, PieChart};
pub use complaint_form::ComplaintForm;
pub use header::Header;
pub use landing::Landing;
pub use login_modal::LoginModal;
pub use sidebar::Sidebar;
pub use ui::{Badge, Card, DetailList, Metric, Modal, PageHeading, ProgressBar, StatGrid};
