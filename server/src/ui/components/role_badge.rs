//! Role badge - icon plus optional label for a workspace role

use dashbadge_core::{classes, Role};
use dioxus::prelude::*;

use super::Icon;

/// Icon size inside a role badge, in pixels
pub const ROLE_ICON_SIZE: u32 = 12;

/// Badge showing a user's role
///
/// Caller classes are appended after the role's own tokens so they win
/// any conflict in the stylesheet.
#[component]
pub fn RoleBadge(
    role: Role,
    #[props(default, into)] class: String,
    #[props(default = true)] show_label: bool,
) -> Element {
    let config = role.display_config();
    let class_name = classes!("role-badge", config.style_class, class);

    rsx! {
        span {
            class: "{class_name}",
            "data-role": role.as_str(),
            Icon { name: config.icon, size: ROLE_ICON_SIZE }
            if show_label {
                span { class: "role-badge-label", "{config.label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_shown_by_default() {
        let html = dioxus_ssr::render_element(rsx! {
            RoleBadge { role: Role::Admin }
        });

        assert!(html.contains("<svg"));
        assert!(html.contains("icon-shield"));
        assert!(html.contains("Admin"));

        // Icon comes before the label
        let icon_at = html.find("<svg").unwrap();
        let label_at = html.find("Admin").unwrap();
        assert!(icon_at < label_at);
    }

    #[test]
    fn test_label_hidden() {
        let html = dioxus_ssr::render_element(rsx! {
            RoleBadge { role: Role::Admin, show_label: false }
        });

        assert!(html.contains("<svg"));
        assert!(html.contains("icon-shield"));
        assert!(!html.contains("Admin"));
    }

    #[test]
    fn test_caller_class_appended_last() {
        let html = dioxus_ssr::render_element(rsx! {
            RoleBadge { role: Role::TeamMember, class: "extra-class" }
        });

        assert!(html.contains(
            "class=\"role-badge bg-accent-subtle text-accent border-accent extra-class\""
        ));
        assert!(html.contains("Team Member"));
    }

    #[test]
    fn test_every_role_renders() {
        for role in Role::ALL {
            let html = dioxus_ssr::render_element(rsx! {
                RoleBadge { role }
            });
            let config = role.display_config();

            assert!(html.contains(config.label), "{role} missing label");
            assert!(html.contains(config.style_class), "{role} missing style");
            assert!(html.contains(&format!("icon-{}", config.icon)));
        }
    }
}
