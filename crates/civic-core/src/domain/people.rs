//! System Users
//!
//! Staff accounts, roles and the role permission matrix.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::tone::BadgeTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Manager,
    Technician,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Technician, Role::Viewer];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Technician => "technician",
            Role::Viewer => "viewer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Technician => "Technician",
            Role::Viewer => "Viewer",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Role::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            UserStatus::Active => BadgeTone::Success,
            UserStatus::Inactive => BadgeTone::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: UserStatus,
    pub last_login: NaiveDateTime,
}

impl SystemUser {
    /// Avatar letter
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn last_login_label(&self) -> String {
        self.last_login.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl Entity for SystemUser {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Access flags for one module under one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulePermission {
    pub module: String,
    pub read: bool,
    pub write: bool,
    pub admin: bool,
}

impl ModulePermission {
    pub fn new(module: &str, read: bool, write: bool, admin: bool) -> Self {
        Self {
            module: module.to_string(),
            read,
            write,
            admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    pub time: String,
}

/// The signed-in operator shown in the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            name: "John Smith".to_string(),
            email: "john.smith@city.gov".to_string(),
            role: "Administrator".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(CurrentUser::default().initial(), 'J');
        let nobody = CurrentUser {
            name: String::new(),
            ..CurrentUser::default()
        };
        assert_eq!(nobody.initial(), '?');
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("technician".parse::<Role>(), Ok(Role::Technician));
        assert!("root".parse::<Role>().is_err());
    }
}
