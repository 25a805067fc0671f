//! Pure authorization decisions.
//!
//! The ADMIN claim is checked by comparing the matric code against one
//! configured value. That is not proof of identity: anyone who learns the
//! code can claim ADMIN, and student claims are not verified at all. Real
//! deployments need a credential-backed check in place of `can_claim`.

use crate::{Access, Decision};

use eh_config::AuthConfig;
use eh_core::{RedirectTarget, Role, RouteClass, Session};

pub struct AuthorizationPolicy {
    admin_matric_code: String,
}

impl AuthorizationPolicy {
    pub fn new(admin_matric_code: impl Into<String>) -> Self {
        Self {
            admin_matric_code: admin_matric_code.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.admin_matric_code.clone())
    }

    /// May a login claim `role` with this matric code?
    ///
    /// Exact, case-sensitive comparison with no trimming.
    pub fn can_claim(&self, role: Role, matric_code: &str) -> Decision {
        match role {
            Role::Admin if matric_code == self.admin_matric_code => Decision::Allow,
            Role::Admin => Decision::Deny,
            Role::Student | Role::Guest => Decision::Allow,
        }
    }

    /// May this session open a view of the given class?
    pub fn can_access(&self, session: &Session, route_class: RouteClass) -> Access {
        match route_class {
            RouteClass::Public => {
                if session.is_authenticated() {
                    Access::Redirect(RedirectTarget::Home)
                } else {
                    Access::Allow
                }
            }
            RouteClass::Authenticated => {
                if session.is_authenticated() {
                    Access::Allow
                } else {
                    Access::Redirect(RedirectTarget::Login)
                }
            }
            RouteClass::AdminOnly => match session.role() {
                Role::Admin => Access::Allow,
                Role::Student | Role::Guest => Access::Redirect(RedirectTarget::Home),
            },
        }
    }
}

impl std::fmt::Debug for AuthorizationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationPolicy")
            .field("admin_matric_code", &"<redacted>")
            .finish()
    }
}
