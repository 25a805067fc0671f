use crate::RouteClass;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Every navigable view of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    SmartAssist,
    FileHub,
    CodeLab,
    Academic,
    Collaboration,
    Productivity,
    Profile,
    Admin,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Login,
        Route::Dashboard,
        Route::SmartAssist,
        Route::FileHub,
        Route::CodeLab,
        Route::Academic,
        Route::Collaboration,
        Route::Productivity,
        Route::Profile,
        Route::Admin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => HOME_PATH,
            Self::SmartAssist => "/smart-assist",
            Self::FileHub => "/file-hub",
            Self::CodeLab => "/code-lab",
            Self::Academic => "/academic",
            Self::Collaboration => "/collaboration",
            Self::Productivity => "/productivity",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
        }
    }

    pub fn class(&self) -> RouteClass {
        match self {
            Self::Login => RouteClass::Public,
            Self::Dashboard
            | Self::SmartAssist
            | Self::FileHub
            | Self::CodeLab
            | Self::Academic
            | Self::Collaboration
            | Self::Productivity
            | Self::Profile => RouteClass::Authenticated,
            Self::Admin => RouteClass::AdminOnly,
        }
    }

    /// Exact path lookup; `None` for paths the portal does not serve
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
