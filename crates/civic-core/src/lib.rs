//! CivicTracker view-model layer
//!
//! Everything the dashboard shows that is not markup: the session state
//! machine, the page registry, domain records, derived display data, the map
//! viewport, configuration and the sample datasets. No browser dependencies,
//! so all of it is tested natively.

pub mod config;
pub mod display;
pub mod domain;
pub mod page;
pub mod pending;
pub mod report;
pub mod sample;
pub mod session;
pub mod settings;
pub mod viewport;

pub use config::AppConfig;
pub use page::Page;
pub use session::{Credentials, Session, SessionEvent, SessionPhase};
