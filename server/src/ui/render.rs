//! Server-side rendering of pages and badge fragments

use dashbadge_core::{Role, Status};
use dioxus::prelude::*;

use super::components::{RoleBadge, StatusBadge};
use super::pages::Gallery;
use super::theme::ThemeMode;

/// Render the gallery as a complete HTML document
pub fn render_gallery(title: &str, theme: ThemeMode, show_labels: bool) -> String {
    let title = title.to_string();
    let html_body = dioxus_ssr::render_element(rsx! {
        Gallery { title: title.clone(), theme, show_labels }
    });

    tracing::debug!(theme = theme.as_str(), bytes = html_body.len(), "Rendered gallery");

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    {html_body}
</body>
</html>"#,
        theme = theme.as_str(),
        title = escape_text(&title),
    )
}

/// Render a single role badge as an HTML fragment
pub fn render_role_badge(role: Role, show_label: bool, class: &str) -> String {
    let class = class.to_string();
    dioxus_ssr::render_element(rsx! {
        RoleBadge { role, show_label, class }
    })
}

/// Render a single status badge wrapping `text` as an HTML fragment
pub fn render_status_badge(status: Status, text: &str, class: &str) -> String {
    let class = class.to_string();
    let text = text.to_string();
    dioxus_ssr::render_element(rsx! {
        StatusBadge { status, class, "{text}" }
    })
}

/// Minimal escaping for text placed outside the rendered tree
fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_lists_every_badge() {
        let html = render_gallery("Badges", ThemeMode::Light, true);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\" data-theme=\"light\">"));
        assert!(html.contains("<title>Badges</title>"));
        assert!(html.contains("href=\"/?theme=dark\""));
        for role in Role::ALL {
            assert!(html.contains(role.label()));
        }
        for status in Status::ALL {
            assert!(html.contains(status.style_class()));
        }
    }

    #[test]
    fn test_gallery_title_escaped() {
        let html = render_gallery("<Ops & Co>", ThemeMode::Dark, true);
        assert!(html.contains("<title>&lt;Ops &amp; Co&gt;</title>"));
    }

    #[test]
    fn test_role_fragment() {
        let html = render_role_badge(Role::Visitor, false, "ml-1");
        assert!(html.contains("text-muted border-muted ml-1"));
        assert!(!html.contains("Visitor"));
    }

    #[test]
    fn test_status_fragment() {
        let html = render_status_badge(Status::Warning, "Disk at 85%", "");
        assert!(html.contains("Disk at 85%"));
        assert!(html.contains("class=\"status-badge bg-warning-subtle text-warning border-warning\""));
    }
}
