//! Page components for Orbitdeck.

mod error_page;
mod home;
mod launch_detail;
mod launchpad_detail;
mod payload_detail;
mod rocket_detail;
mod ship_detail;

pub use error_page::ErrorPage;
pub use home::Home;
pub use launch_detail::LaunchDetail;
pub use launchpad_detail::LaunchpadDetail;
pub use payload_detail::PayloadDetail;
pub use rocket_detail::RocketDetail;
pub use ship_detail::ShipDetail;
