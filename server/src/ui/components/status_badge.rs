//! Status badge - colored pill wrapping arbitrary content

use dashbadge_core::{classes, Status};
use dioxus::prelude::*;

/// Pill tinted by `status`; children are rendered untouched
#[component]
pub fn StatusBadge(
    status: Status,
    children: Element,
    #[props(default, into)] class: String,
) -> Element {
    let class_name = classes!("status-badge", status.style_class(), class);

    rsx! {
        span {
            class: "{class_name}",
            "data-status": status.as_str(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::RoleBadge;
    use dashbadge_core::Role;

    /// Values of every `class="..."` attribute, in document order
    fn class_attrs(html: &str) -> Vec<&str> {
        html.split("class=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_children_pass_through() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: Status::Error, "Deployment failed" }
        });

        assert!(html.contains("Deployment failed"));
        assert!(html.contains(
            "class=\"status-badge bg-error-subtle text-error border-error\""
        ));
    }

    #[test]
    fn test_nested_children_untouched() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: Status::Info,
                strong { "3" }
                " pending"
            }
        });

        assert!(html.contains("<strong>3</strong>"));
        assert!(html.contains(" pending"));
    }

    #[test]
    fn test_caller_class_appended_last() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: Status::Success, class: "ml-2", "ok" }
        });

        let attrs = class_attrs(&html);
        assert_eq!(
            attrs[0],
            "status-badge bg-success-subtle text-success border-success ml-2"
        );
    }

    #[test]
    fn test_no_cross_contamination() {
        let html = dioxus_ssr::render_element(rsx! {
            div {
                StatusBadge { status: Status::Warning, "Degraded" }
                RoleBadge { role: Role::Admin }
            }
        });

        let attrs = class_attrs(&html);
        let status_class = attrs
            .iter()
            .find(|c| c.starts_with("status-badge"))
            .unwrap();
        let role_class = attrs.iter().find(|c| c.starts_with("role-badge")).unwrap();

        for token in Status::Warning.style_class().split_whitespace() {
            assert!(!role_class.split_whitespace().any(|t| t == token));
        }
        for token in Role::Admin.display_config().style_class.split_whitespace() {
            assert!(!status_class.split_whitespace().any(|t| t == token));
        }
    }
}
