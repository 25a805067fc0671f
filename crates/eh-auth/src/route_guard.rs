use crate::{Access, AuthorizationPolicy};

use eh_core::{RedirectTarget, RouteClass, Session};

use std::sync::Arc;

/// What a guarded view resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Rendered,
    RedirectedHome,
    RedirectedLogin,
}

impl GuardState {
    pub fn redirect_target(&self) -> Option<RedirectTarget> {
        match self {
            Self::Rendered => None,
            Self::RedirectedHome => Some(RedirectTarget::Home),
            Self::RedirectedLogin => Some(RedirectTarget::Login),
        }
    }
}

impl From<Access> for GuardState {
    fn from(access: Access) -> Self {
        match access {
            Access::Allow => Self::Rendered,
            Access::Redirect(RedirectTarget::Home) => Self::RedirectedHome,
            Access::Redirect(RedirectTarget::Login) => Self::RedirectedLogin,
        }
    }
}

/// Resolves a view's class against the current session
#[derive(Debug, Clone)]
pub struct RouteGuard {
    policy: Arc<AuthorizationPolicy>,
}

impl RouteGuard {
    pub fn new(policy: Arc<AuthorizationPolicy>) -> Self {
        Self { policy }
    }

    pub fn evaluate(&self, session: &Session, route_class: RouteClass) -> GuardState {
        GuardState::from(self.policy.can_access(session, route_class))
    }
}
