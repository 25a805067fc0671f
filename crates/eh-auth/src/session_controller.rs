use crate::{
    AbortSignal, AuthError, AuthorizationPolicy, Decision, LoginRateLimiter, PasswordResetService,
    Result as AuthErrorResult,
};

use eh_config::AuthConfig;
use eh_core::{Identity, Notice, Notifier, Role, Session};
use eh_storage::SessionStore;

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

pub const ADMIN_DENIED_MESSAGE: &str = "Unauthorized: Admin access restricted.";
pub const RESET_SENT_MESSAGE: &str = "Reset link sent to your email!";

/// Login, signup, logout and password reset on top of the session store
pub struct SessionController {
    store: Arc<SessionStore>,
    policy: Arc<AuthorizationPolicy>,
    rate_limiter: LoginRateLimiter,
    reset_service: Arc<dyn PasswordResetService>,
    notifier: Notifier,
    enforce_admin_code_on_signup: bool,
    reset_timeout: Duration,
}

impl SessionController {
    pub fn new(
        store: Arc<SessionStore>,
        policy: Arc<AuthorizationPolicy>,
        reset_service: Arc<dyn PasswordResetService>,
        notifier: Notifier,
        config: &AuthConfig,
    ) -> Self {
        if !config.enforce_admin_code_on_signup {
            warn!("Admin code check is disabled for signup; any signup may claim ADMIN");
        }

        Self {
            store,
            policy,
            rate_limiter: LoginRateLimiter::per_minute(config.max_admin_attempts_per_minute),
            reset_service,
            notifier,
            enforce_admin_code_on_signup: config.enforce_admin_code_on_signup,
            reset_timeout: Duration::from_secs(config.password_reset_timeout_secs),
        }
    }

    pub fn session(&self) -> Session {
        self.store.session()
    }

    /// Establish a session for `role`.
    ///
    /// A denied ADMIN claim leaves the current session untouched and emits
    /// an error notice.
    pub fn login(&self, role: Role, matric_code: &str, email: &str) -> AuthErrorResult<Identity> {
        self.establish(role, matric_code, email, true)
    }

    pub fn signup(&self, matric_code: &str, email: &str, role: Role) -> AuthErrorResult<Identity> {
        if role.is_admin() && !self.enforce_admin_code_on_signup {
            warn!("Signup claimed ADMIN without the admin code check");
        }
        self.establish(role, matric_code, email, self.enforce_admin_code_on_signup)
    }

    fn establish(
        &self,
        role: Role,
        matric_code: &str,
        email: &str,
        check_claim: bool,
    ) -> AuthErrorResult<Identity> {
        if role.is_guest() {
            return Err(AuthError::invalid_role(role));
        }

        if check_claim && self.policy.can_claim(role, matric_code) == Decision::Deny {
            // Only failed claims count toward the quota
            if let Err(e) = self.rate_limiter.check() {
                warn!("Admin claim throttled: {e}");
                self.notifier.notify(Notice::error(e.user_message()));
                return Err(e);
            }

            warn!("Admin claim denied: matric code does not match");
            self.notifier.notify(Notice::error(ADMIN_DENIED_MESSAGE));
            return Err(AuthError::authorization_denied(role));
        }

        let identity = Identity::generate(matric_code, email, role)?;

        if let Err(e) = self.store.set(identity.clone()) {
            let e = AuthError::from(e);
            self.notifier.notify(Notice::retryable_error(e.user_message()));
            return Err(e);
        }

        info!("Logged in as {role}");
        Ok(identity)
    }

    /// Return to GUEST. Logging out with no session is not an error.
    pub fn logout(&self) -> AuthErrorResult<()> {
        if let Err(e) = self.store.clear() {
            let e = AuthError::from(e);
            self.notifier.notify(Notice::retryable_error(e.user_message()));
            return Err(e);
        }
        Ok(())
    }

    /// Ask the reset service to email a reset link.
    ///
    /// Bounded by the configured timeout and abandoned as soon as `abort`
    /// fires. The outcome is also published as a notice.
    pub async fn request_password_reset(
        &self,
        email: &str,
        abort: &AbortSignal,
    ) -> AuthErrorResult<()> {
        let email = email.trim();
        if !is_plausible_email(email) {
            let e = AuthError::invalid_email(email);
            self.notifier.notify(Notice::error(e.user_message()));
            return Err(e);
        }

        let outcome = tokio::select! {
            biased;
            _ = abort.aborted() => Err(AuthError::reset_cancelled()),
            result = tokio::time::timeout(self.reset_timeout, self.reset_service.request_reset(email)) => {
                match result {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(failure)) => Err(AuthError::reset_failed(failure)),
                    Err(_) => Err(AuthError::reset_timed_out(self.reset_timeout.as_secs())),
                }
            }
        };

        match &outcome {
            Ok(()) => {
                info!("Password reset requested");
                self.notifier.notify(Notice::success(RESET_SENT_MESSAGE));
            }
            Err(e) => {
                warn!("Password reset failed: {e}");
                let notice = if e.is_retryable() {
                    Notice::retryable_error(e.user_message())
                } else {
                    Notice::error(e.user_message())
                };
                self.notifier.notify(notice);
            }
        }

        outcome
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
