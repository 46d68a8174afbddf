//! Detail card components.
//!
//! One component per document section. Rails and panels are only
//! mounted by their pages when the backing collection is non-empty,
//! so none of them carries an empty state.

mod capsule_rail;
mod failure_panel;
mod launch_history;
mod launch_summary_card;
mod launchpad_card;
mod payload_rail;
mod rocket_card;
mod ship_rail;

pub use capsule_rail::CapsuleRail;
pub use failure_panel::FailurePanel;
pub use launch_history::LaunchHistory;
pub use launch_summary_card::LaunchSummaryCard;
pub use launchpad_card::LaunchpadCard;
pub use payload_rail::PayloadRail;
pub use rocket_card::RocketCard;
pub use ship_rail::ShipRail;
