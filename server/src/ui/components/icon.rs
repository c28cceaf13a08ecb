//! Inline SVG icon component

use dashbadge_core::{IconName, ICON_VIEWBOX};
use dioxus::prelude::*;

/// Render a named icon as an inline SVG at `size` pixels square
#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 16)] size: u32,
    #[props(default, into)] class: String,
) -> Element {
    let view_box = format!("0 0 {ICON_VIEWBOX} {ICON_VIEWBOX}");
    let class_name = dashbadge_core::classes!("icon", format!("icon-{}", name.as_str()), class);

    rsx! {
        svg {
            class: "{class_name}",
            width: "{size}",
            height: "{size}",
            view_box: "{view_box}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in name.paths() {
                path { d: "{d}" }
            }
        }
    }
}
