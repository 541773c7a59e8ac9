//! System Settings
//!
//! Tabs of the settings page and the editable preferences behind them.
//! Edits stay in memory: `SettingsEditor` keeps a saved copy and a draft.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    General,
    Notifications,
    Security,
    Integrations,
    Backup,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::General,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::Integrations,
        SettingsTab::Backup,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Security => "security",
            SettingsTab::Integrations => "integrations",
            SettingsTab::Backup => "backup",
        }
    }

    /// Tab button text
    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Security => "Security",
            SettingsTab::Integrations => "Integrations",
            SettingsTab::Backup => "Backup & Recovery",
        }
    }

    /// Panel heading
    pub fn heading(&self) -> &'static str {
        match self {
            SettingsTab::General => "General Settings",
            SettingsTab::Notifications => "Notification Preferences",
            SettingsTab::Security => "Security Settings",
            SettingsTab::Integrations => "System Integrations",
            SettingsTab::Backup => "Backup & Recovery",
        }
    }
}

impl FromStr for SettingsTab {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        SettingsTab::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl BackupFrequency {
    pub const ALL: [BackupFrequency; 3] = [BackupFrequency::Daily, BackupFrequency::Weekly, BackupFrequency::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            BackupFrequency::Daily => "Daily",
            BackupFrequency::Weekly => "Weekly",
            BackupFrequency::Monthly => "Monthly",
        }
    }
}

/// Every field on the settings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    // General
    pub system_name: String,
    pub version: String,
    pub time_zone: String,
    pub date_format: String,
    pub dark_mode: bool,
    pub show_dashboard_stats: bool,
    pub advanced_tooltips: bool,
    // Notifications
    pub alert_high_priority: bool,
    pub daily_reports: bool,
    pub maintenance_reminders: bool,
    pub activity_updates: bool,
    pub downtime_alert_minutes: u32,
    pub high_priority_threshold: u32,
    // Security
    pub min_password_length: u32,
    pub require_uppercase: bool,
    pub require_special: bool,
    pub two_factor: bool,
    pub session_timeout_minutes: u32,
    pub max_failed_logins: u32,
    // Backup
    pub backup_frequency: BackupFrequency,
    pub backup_time: String,
    pub retention_days: u32,
}

impl SystemSettings {
    pub const TIME_ZONES: [&'static str; 3] = ["UTC-8 (Pacific Time)", "UTC-5 (Eastern Time)", "UTC+0 (GMT)"];
    pub const DATE_FORMATS: [&'static str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            system_name: "CivicTracker Platform".to_string(),
            version: "2.1.3".to_string(),
            time_zone: Self::TIME_ZONES[0].to_string(),
            date_format: Self::DATE_FORMATS[0].to_string(),
            dark_mode: true,
            show_dashboard_stats: true,
            advanced_tooltips: false,
            alert_high_priority: true,
            daily_reports: true,
            maintenance_reminders: false,
            activity_updates: false,
            downtime_alert_minutes: 5,
            high_priority_threshold: 10,
            min_password_length: 8,
            require_uppercase: true,
            require_special: true,
            two_factor: false,
            session_timeout_minutes: 30,
            max_failed_logins: 5,
            backup_frequency: BackupFrequency::Daily,
            backup_time: "02:00".to_string(),
            retention_days: 30,
        }
    }
}

/// Saved settings plus the working copy bound to the form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsEditor {
    saved: SystemSettings,
    draft: SystemSettings,
}

impl SettingsEditor {
    pub fn new(saved: SystemSettings) -> Self {
        Self {
            draft: saved.clone(),
            saved,
        }
    }

    pub fn draft(&self) -> &SystemSettings {
        &self.draft
    }

    pub fn saved(&self) -> &SystemSettings {
        &self.saved
    }

    pub fn edit(&mut self, change: impl FnOnce(&mut SystemSettings)) {
        change(&mut self.draft);
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// "Save Changes"
    pub fn save(&mut self) {
        if self.is_dirty() {
            log::debug!("saving settings for {}", self.draft.system_name);
        }
        self.saved = self.draft.clone();
    }

    /// "Cancel"
    pub fn discard(&mut self) {
        self.draft = self.saved.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids() {
        for tab in SettingsTab::ALL {
            assert_eq!(tab.id().parse::<SettingsTab>(), Ok(tab));
        }
        assert_eq!(SettingsTab::Backup.heading(), "Backup & Recovery");
    }

    #[test]
    fn test_editor_save_and_discard() {
        let mut editor = SettingsEditor::default();
        assert!(!editor.is_dirty());

        editor.edit(|s| s.session_timeout_minutes = 45);
        assert!(editor.is_dirty());
        editor.discard();
        assert_eq!(editor.draft().session_timeout_minutes, 30);

        editor.edit(|s| s.two_factor = true);
        editor.save();
        assert!(!editor.is_dirty());
        assert!(editor.saved().two_factor);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: SystemSettings = serde_json::from_str(r#"{"retention_days": 90}"#).unwrap();
        assert_eq!(settings.retention_days, 90);
        assert_eq!(settings.min_password_length, 8);
    }
}
