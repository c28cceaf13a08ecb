//! Theme management and CSS definitions

use dashbadge_core::Error;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Theme mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::ConfigError(format!("Invalid theme: {}", other))),
        }
    }
}

/// Global CSS with theme variables and every badge style token
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root[data-theme="light"] {
    --bg-primary: #ffffff;
    --bg-secondary: #f5f7fa;
    --text-primary: #2e3440;
    --text-muted: #6c7a89;
    --accent-primary: #5e81ac;
    --accent-accent: #b48ead;
    --accent-muted: #6c7a89;
    --accent-success: #4f8a3c;
    --accent-warning: #b7892a;
    --accent-error: #bf616a;
    --accent-info: #3e8ca6;
    --accent-neutral: #4c566a;
    --border-color: #d8dee9;
}

:root[data-theme="dark"] {
    --bg-primary: #2e3440;
    --bg-secondary: #3b4252;
    --text-primary: #eceff4;
    --text-muted: #a8b0c0;
    --accent-primary: #81a1c1;
    --accent-accent: #b48ead;
    --accent-muted: #a8b0c0;
    --accent-success: #a3be8c;
    --accent-warning: #ebcb8b;
    --accent-error: #bf616a;
    --accent-info: #88c0d0;
    --accent-neutral: #d8dee9;
    --border-color: #4c566a;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    font-size: 16px;
    line-height: 1.5;
    background-color: var(--bg-primary);
    color: var(--text-primary);
}

h1 {
    font-size: 2rem;
    font-weight: 600;
    margin-bottom: 16px;
}

h2 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 24px 0 12px;
}

.gallery {
    max-width: 960px;
    margin: 0 auto;
    padding: 32px;
}

.gallery-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 12px;
    padding: 16px;
    background-color: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 12px;
}

.theme-switch {
    color: var(--accent-primary);
    font-size: 0.875rem;
}

/* Badges */
.role-badge {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    padding: 2px 8px;
    border: 1px solid;
    border-radius: 6px;
    font-size: 0.75rem;
    font-weight: 500;
}

.status-badge {
    display: inline-flex;
    align-items: center;
    padding: 2px 10px;
    border: 1px solid;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
}

.icon {
    flex-shrink: 0;
}

/* Role tokens */
.bg-primary-subtle { background-color: color-mix(in srgb, var(--accent-primary) 12%, transparent); }
.text-primary { color: var(--accent-primary); }
.border-primary { border-color: color-mix(in srgb, var(--accent-primary) 30%, transparent); }

.bg-accent-subtle { background-color: color-mix(in srgb, var(--accent-accent) 12%, transparent); }
.text-accent { color: var(--accent-accent); }
.border-accent { border-color: color-mix(in srgb, var(--accent-accent) 30%, transparent); }

.bg-muted-subtle { background-color: color-mix(in srgb, var(--accent-muted) 12%, transparent); }
.text-muted { color: var(--accent-muted); }
.border-muted { border-color: color-mix(in srgb, var(--accent-muted) 30%, transparent); }

/* Status tokens */
.bg-success-subtle { background-color: color-mix(in srgb, var(--accent-success) 15%, transparent); }
.text-success { color: var(--accent-success); }
.border-success { border-color: color-mix(in srgb, var(--accent-success) 35%, transparent); }

.bg-warning-subtle { background-color: color-mix(in srgb, var(--accent-warning) 15%, transparent); }
.text-warning { color: var(--accent-warning); }
.border-warning { border-color: color-mix(in srgb, var(--accent-warning) 35%, transparent); }

.bg-error-subtle { background-color: color-mix(in srgb, var(--accent-error) 15%, transparent); }
.text-error { color: var(--accent-error); }
.border-error { border-color: color-mix(in srgb, var(--accent-error) 35%, transparent); }

.bg-info-subtle { background-color: color-mix(in srgb, var(--accent-info) 15%, transparent); }
.text-info { color: var(--accent-info); }
.border-info { border-color: color-mix(in srgb, var(--accent-info) 35%, transparent); }

.bg-neutral-subtle { background-color: color-mix(in srgb, var(--accent-neutral) 15%, transparent); }
.text-neutral { color: var(--accent-neutral); }
.border-neutral { border-color: color-mix(in srgb, var(--accent-neutral) 35%, transparent); }
"#;

/// Inject global CSS into the document
pub fn inject_global_css() -> Element {
    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashbadge_core::{Role, Status};

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("Light".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_stylesheet_defines_every_token() {
        let tokens = Role::ALL
            .iter()
            .flat_map(|r| r.display_config().style_class.split_whitespace())
            .chain(Status::ALL.iter().flat_map(|s| s.style_class().split_whitespace()));

        for token in tokens {
            assert!(
                GLOBAL_CSS.contains(&format!(".{} {{", token)),
                "stylesheet is missing .{}",
                token
            );
        }
    }
}
