//! Gallery page - every badge variant side by side

use dashbadge_core::{Role, Status};
use dioxus::prelude::*;

use crate::ui::components::{RoleBadge, StatusBadge};
use crate::ui::theme::{inject_global_css, ThemeMode};

#[component]
pub fn Gallery(
    title: String,
    theme: ThemeMode,
    #[props(default = true)] show_labels: bool,
) -> Element {
    let other = theme.toggle().as_str();

    rsx! {
        {inject_global_css()}

        main { class: "gallery",
            h1 { "{title}" }
            a { class: "theme-switch", href: "/?theme={other}", "Switch to {other} theme" }

            h2 { "Roles" }
            div { class: "gallery-row",
                for role in Role::ALL {
                    RoleBadge { key: "{role}", role, show_label: show_labels }
                }
            }

            h2 { "Roles (icon only)" }
            div { class: "gallery-row",
                for role in Role::ALL {
                    RoleBadge { key: "{role}", role, show_label: false }
                }
            }

            h2 { "Statuses" }
            div { class: "gallery-row",
                for status in Status::ALL {
                    StatusBadge { key: "{status}", status, {status.label()} }
                }
            }
        }
    }
}
