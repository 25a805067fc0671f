/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Dashboard",
        href: "/",
    },
    NavItem {
        label: "Smart Assist",
        href: "/smart-assist",
    },
    NavItem {
        label: "File Hub",
        href: "/file-hub",
    },
    NavItem {
        label: "Code Lab",
        href: "/code-lab",
    },
    NavItem {
        label: "Academic Toolkit",
        href: "/academic",
    },
    NavItem {
        label: "Collaboration",
        href: "/collaboration",
    },
    NavItem {
        label: "Productivity",
        href: "/productivity",
    },
];

/// Only offered to admin sessions
pub const ADMIN_NAV_ITEM: NavItem = NavItem {
    label: "Admin Control",
    href: "/admin",
};
