//! Webcast Embed Component
//!
//! Renders the launch webcast as an embedded player. The caller only
//! mounts this when a video identifier was actually extracted, so
//! there is no empty state here.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YoutubeEmbedProps {
    /// Extracted 11-character video identifier
    pub video_id: String,
}

#[component]
pub fn YoutubeEmbed(props: YoutubeEmbedProps) -> Element {
    rsx! {
        iframe {
            class: "webcast-frame",
            src: "https://www.youtube.com/embed/{props.video_id}",
            title: "Launch webcast",
            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
            allowfullscreen: true,
        }
    }
}
