use crate::{HOME_PATH, LOGIN_PATH};

/// Where a denied navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectTarget {
    Home,
    Login,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Login => LOGIN_PATH,
        }
    }
}

impl std::fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
