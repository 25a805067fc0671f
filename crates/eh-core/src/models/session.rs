use crate::{Identity, Role};

/// Runtime view of "who is logged in, and as what".
///
/// Authentication state and role are derived from the wrapped identity on
/// every call; nothing is cached alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn guest() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn into_identity(self) -> Option<Identity> {
        self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Role {
        self.identity
            .as_ref()
            .map(Identity::role)
            .unwrap_or(Role::Guest)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }
}

impl From<Option<Identity>> for Session {
    fn from(identity: Option<Identity>) -> Self {
        Self { identity }
    }
}
