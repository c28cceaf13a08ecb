//! Core library for dashbadge
//!
//! This crate defines the role and status types, their static display
//! tables, icon references and the class-merge utility shared by the
//! badge components.

pub mod classes;
pub mod display;
pub mod error;
pub mod icon;
pub mod types;

// Re-exports
pub use classes::{merge_classes, ClassToken};
pub use display::{role_entries, status_entries, RoleDisplayConfig, RoleEntry, StatusEntry};
pub use error::{Error, Result};
pub use icon::{IconName, ICON_VIEWBOX};
pub use types::{Role, Status};
