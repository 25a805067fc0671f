use eh_auth::Navigator;
use eh_core::{ADMIN_NAV_ITEM, NAV_ITEMS, NavItem, RedirectTarget, Session};

use log::info;

/// Sidebar entries for `session`; the admin console is listed for admins only
pub fn nav_items(session: &Session) -> Vec<NavItem> {
    let mut items = NAV_ITEMS.to_vec();
    if session.is_admin() {
        items.push(ADMIN_NAV_ITEM);
    }
    items
}

/// Navigator for headless runs; redirects are only logged
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, target: RedirectTarget) {
        info!("Redirecting to {target}");
    }
}
