//! Static display configuration for roles and statuses
//!
//! Both tables are exhaustive matches over closed enums, so a lookup can
//! never miss. Adding a variant without a table entry fails to compile.

use serde::Serialize;

use crate::{IconName, Role, Status};

/// How a role is presented in a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleDisplayConfig {
    /// Label shown next to the icon
    pub label: &'static str,
    pub icon: IconName,
    /// Background tint, text color and border color tokens
    pub style_class: &'static str,
}

const ADMIN: RoleDisplayConfig = RoleDisplayConfig {
    label: "Admin",
    icon: IconName::Shield,
    style_class: "bg-primary-subtle text-primary border-primary",
};

const TEAM_MEMBER: RoleDisplayConfig = RoleDisplayConfig {
    label: "Team Member",
    icon: IconName::Users,
    style_class: "bg-accent-subtle text-accent border-accent",
};

const VISITOR: RoleDisplayConfig = RoleDisplayConfig {
    label: "Visitor",
    icon: IconName::Eye,
    style_class: "bg-muted-subtle text-muted border-muted",
};

impl Role {
    /// Resolve the badge configuration for this role
    pub fn display_config(&self) -> &'static RoleDisplayConfig {
        match self {
            Role::Admin => &ADMIN,
            Role::TeamMember => &TEAM_MEMBER,
            Role::Visitor => &VISITOR,
        }
    }

    pub fn label(&self) -> &'static str {
        self.display_config().label
    }
}

impl Status {
    /// Resolve the pill style tokens for this status
    pub fn style_class(&self) -> &'static str {
        match self {
            Status::Success => "bg-success-subtle text-success border-success",
            Status::Warning => "bg-warning-subtle text-warning border-warning",
            Status::Error => "bg-error-subtle text-error border-error",
            Status::Info => "bg-info-subtle text-info border-info",
            Status::Neutral => "bg-neutral-subtle text-neutral border-neutral",
        }
    }
}

/// Serializable view of a role's configuration (for listings)
#[derive(Debug, Clone, Serialize)]
pub struct RoleEntry {
    pub role: Role,
    #[serde(flatten)]
    pub config: RoleDisplayConfig,
}

/// Serializable view of a status's configuration (for listings)
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    pub status: Status,
    pub label: &'static str,
    pub style_class: &'static str,
}

/// Every role with its configuration, in display order
pub fn role_entries() -> Vec<RoleEntry> {
    Role::ALL
        .iter()
        .map(|role| RoleEntry {
            role: *role,
            config: *role.display_config(),
        })
        .collect()
}

/// Every status with its style class, in display order
pub fn status_entries() -> Vec<StatusEntry> {
    Status::ALL
        .iter()
        .map(|status| StatusEntry {
            status: *status,
            label: status.label(),
            style_class: status.style_class(),
        })
        .collect()
}
