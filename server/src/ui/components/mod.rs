//! Reusable UI components

mod icon;
mod role_badge;
mod status_badge;

pub use icon::Icon;
pub use role_badge::RoleBadge;
pub use status_badge::StatusBadge;
