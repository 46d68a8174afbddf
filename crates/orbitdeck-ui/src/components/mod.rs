//! Shared presentational components.

mod external_link;
mod image_frame;
mod labeled_field;
mod section_card;
mod spinner;
mod status_icon;

pub use external_link::{href_or_hash, ExternalLink};
pub use image_frame::ImageFrame;
pub use labeled_field::{LabeledField, StatusField};
pub use section_card::SectionCard;
pub use spinner::LoadingSpinner;
pub use status_icon::{StatusIcon, StatusKind};
