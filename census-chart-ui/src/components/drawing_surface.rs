//! The `<svg>` drawing surface the chart renders into.

use dioxus::prelude::*;

/// Props for DrawingSurface
#[derive(Props, Clone, PartialEq)]
pub struct DrawingSurfaceProps {
    /// The DOM id of the `<svg>` (D3 appends the chart into it)
    pub id: String,
    /// Surface width in pixels
    #[props(default = 960)]
    pub width: u32,
    /// Surface height in pixels
    #[props(default = 500)]
    pub height: u32,
    /// Whether the data is still loading
    #[props(default = false)]
    pub loading: bool,
}

/// A fixed-size `<svg>` with a loading overlay.
#[component]
pub fn DrawingSurface(props: DrawingSurfaceProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading state populations..."
                }
            }
            svg {
                id: "{props.id}",
                width: "{props.width}",
                height: "{props.height}",
            }
        }
    }
}
