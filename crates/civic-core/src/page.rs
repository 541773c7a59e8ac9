//! Page Registry
//!
//! Every authenticated view is a `Page` variant. Views are dispatched with an
//! exhaustive match, so a page without a view fails to compile. String
//! identifiers only enter through `resolve`, which falls back to the
//! dashboard instead of failing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Dashboard,
    Map,
    AiReport,
    Lighting,
    Roads,
    Water,
    Users,
    Settings,
    History,
    Categories,
    DataIssues,
}

/// One sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    /// Pending-item counter shown next to the label
    pub badge: Option<u32>,
}

/// A titled group of sidebar links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub entries: &'static [NavEntry],
}

const fn entry(page: Page, label: &'static str, badge: Option<u32>) -> NavEntry {
    NavEntry { page, label, badge }
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Dashboard,
        Page::Map,
        Page::AiReport,
        Page::Lighting,
        Page::Roads,
        Page::Water,
        Page::Users,
        Page::Settings,
        Page::History,
        Page::Categories,
        Page::DataIssues,
    ];

    /// Sidebar layout. `History` is reached from the user menu instead.
    pub const NAVIGATION: &'static [NavSection] = &[
        NavSection {
            title: "Main Navigation",
            entries: &[
                entry(Page::Dashboard, "Dashboard", None),
                entry(Page::Map, "Interactive Map", None),
                entry(Page::AiReport, "AI Report", Some(7)),
            ],
        },
        NavSection {
            title: "Issue Categories",
            entries: &[
                entry(Page::Categories, "New Categories", None),
                entry(Page::DataIssues, "Data Issues", None),
                entry(Page::Lighting, "Street Lighting", None),
                entry(Page::Roads, "Road Management", None),
                entry(Page::Water, "Water Issues", Some(6)),
            ],
        },
        NavSection {
            title: "Secondary",
            entries: &[
                entry(Page::Users, "User Management", None),
                entry(Page::Settings, "Settings", None),
            ],
        },
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Map => "map",
            Page::AiReport => "ai-report",
            Page::Lighting => "lighting",
            Page::Roads => "roads",
            Page::Water => "water",
            Page::Users => "users",
            Page::Settings => "settings",
            Page::History => "history",
            Page::Categories => "categories",
            Page::DataIssues => "data-issues",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard Overview",
            Page::Map => "City Issue Map",
            Page::AiReport => "AI-Powered Reports",
            Page::Lighting => "Street Lighting Management",
            Page::Roads => "Road Management",
            Page::Water => "Water System Management",
            Page::Users => "User Management",
            Page::Settings => "System Settings",
            Page::History => "Complaint History",
            Page::Categories => "New Categories",
            Page::DataIssues => "Data Issues",
        }
    }

    /// Lenient lookup used by the navigation contract
    pub fn resolve(id: &str) -> Page {
        match id.parse::<Page>() {
            Ok(page) => page,
            Err(err) => {
                log::debug!("{}, falling back to {}", err, Page::default().id());
                Page::default()
            }
        }
    }

    /// Location hash for deep links, e.g. `#/map`
    pub fn hash(&self) -> String {
        format!("#/{}", self.id())
    }

    /// Resolve a `#/page` location hash; empty or unknown hashes give the dashboard
    pub fn from_hash(hash: &str) -> Page {
        let id = hash.trim_start_matches('#').trim_start_matches('/');
        Page::resolve(id)
    }
}

impl FromStr for Page {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_ids() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.id()), page);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_dashboard() {
        assert_eq!(Page::resolve("xyz"), Page::Dashboard);
        assert_eq!(Page::resolve("profile"), Page::Dashboard);
        assert_eq!(Page::resolve(""), Page::Dashboard);
    }

    #[test]
    fn test_strict_parse_reports_unknown() {
        assert_eq!("xyz".parse::<Page>(), Err(DomainError::UnknownId("xyz".to_string())));
        assert_eq!("ai-report".parse::<Page>(), Ok(Page::AiReport));
    }

    #[test]
    fn test_hash_round_trip() {
        assert_eq!(Page::Map.hash(), "#/map");
        assert_eq!(Page::from_hash("#/water"), Page::Water);
        assert_eq!(Page::from_hash("#data-issues"), Page::DataIssues);
        assert_eq!(Page::from_hash(""), Page::Dashboard);
        assert_eq!(Page::from_hash("#/nowhere"), Page::Dashboard);
    }

    #[test]
    fn test_navigation_lists_each_page_once() {
        let mut seen: Vec<Page> = Page::NAVIGATION
            .iter()
            .flat_map(|section| section.entries.iter().map(|e| e.page))
            .collect();
        let total = seen.len();
        seen.sort_by_key(|p| p.id());
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert!(!seen.contains(&Page::History));
        assert_eq!(total, Page::ALL.len() - 1);
    }
}
