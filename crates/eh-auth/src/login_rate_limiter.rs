use crate::{AuthError, Result as AuthErrorResult};

use std::num::NonZeroU32;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

const WINDOW_SECS: u64 = 60;

/// Throttles failed ADMIN claims so the admin code cannot be guessed at speed
pub struct LoginRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    max_per_minute: u32,
}

impl LoginRateLimiter {
    pub fn per_minute(max_per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(max_per_minute).unwrap_or(NonZeroU32::MIN));

        Self {
            limiter: RateLimiter::direct(quota),
            max_per_minute,
        }
    }

    /// Consume one attempt, failing once the quota is exhausted
    #[track_caller]
    pub fn check(&self) -> AuthErrorResult<()> {
        self.limiter
            .check()
            .map_err(|_| AuthError::rate_limit_exceeded(self.max_per_minute, WINDOW_SECS))
    }
}
