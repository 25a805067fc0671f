pub mod error;
pub mod models;
pub mod notifier;

pub use error::{CoreError, Result};
pub use models::announcement::{ADMIN_AUTHOR, Announcement};
pub use models::identity::Identity;
pub use models::nav_item::{ADMIN_NAV_ITEM, NAV_ITEMS, NavItem};
pub use models::notice::{Notice, NoticeLevel};
pub use models::preferences::Preferences;
pub use models::redirect_target::RedirectTarget;
pub use models::role::Role;
pub use models::route::{HOME_PATH, LOGIN_PATH, Route};
pub use models::route_class::RouteClass;
pub use models::session::Session;
pub use models::theme::Theme;
pub use notifier::Notifier;

#[cfg(test)]
mod tests;
