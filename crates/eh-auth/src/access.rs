use eh_core::RedirectTarget;

/// Outcome of a role claim check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Outcome of a route access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(RedirectTarget),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_target(&self) -> Option<RedirectTarget> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(*target),
        }
    }
}
