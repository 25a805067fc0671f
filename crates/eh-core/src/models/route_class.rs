use serde::{Deserialize, Serialize};

/// Guard category a navigable view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// Only reachable while logged out (the login page)
    Public,
    Authenticated,
    AdminOnly,
}

impl RouteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Authenticated => "authenticated",
            Self::AdminOnly => "admin_only",
        }
    }
}

impl std::fmt::Display for RouteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
