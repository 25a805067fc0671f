pub mod abort_signal;
pub mod access;
pub mod authorization_policy;
pub mod error;
pub mod login_rate_limiter;
pub mod password_reset;
pub mod route_guard;
pub mod router;
pub mod session_controller;

pub use abort_signal::{AbortHandle, AbortSignal, abort_pair};
pub use access::{Access, Decision};
pub use authorization_policy::AuthorizationPolicy;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password_reset::{PasswordResetService, ResetFailure, ResetFailureKind};
pub use route_guard::{GuardState, RouteGuard};
pub use router::{Navigation, Navigator, Router};
pub use session_controller::{ADMIN_DENIED_MESSAGE, RESET_SENT_MESSAGE, SessionController};

#[cfg(test)]
mod tests;
