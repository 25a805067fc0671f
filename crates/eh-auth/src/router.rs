use crate::RouteGuard;

use eh_core::{RedirectTarget, Route};
use eh_storage::SessionStore;

use std::sync::Arc;

use log::debug;

/// Receives redirects issued while resolving a navigation
pub trait Navigator: Send + Sync {
    fn redirect(&self, target: RedirectTarget);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<V> {
    Rendered { route: Route, view: V },
    Redirected { target: RedirectTarget },
}

impl<V> Navigation<V> {
    pub fn view(&self) -> Option<&V> {
        match self {
            Self::Rendered { view, .. } => Some(view),
            Self::Redirected { .. } => None,
        }
    }

    pub fn redirect_target(&self) -> Option<RedirectTarget> {
        match self {
            Self::Rendered { .. } => None,
            Self::Redirected { target } => Some(*target),
        }
    }
}

/// Maps paths to routes and guards every one of them.
///
/// The session is read once per navigation, before anything renders, so a
/// protected view is never built for a session that may not see it.
pub struct Router {
    store: Arc<SessionStore>,
    guard: RouteGuard,
    navigator: Arc<dyn Navigator>,
}

impl Router {
    pub fn new(store: Arc<SessionStore>, guard: RouteGuard, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            guard,
            navigator,
        }
    }

    /// Resolve `path`, calling `render` only when the guard lets the view
    /// through. Unknown paths redirect home.
    pub fn navigate<V>(&self, path: &str, render: impl FnOnce(Route) -> V) -> Navigation<V> {
        let Some(route) = Route::from_path(path) else {
            debug!("Unknown path '{path}', redirecting home");
            return self.redirect(RedirectTarget::Home);
        };

        let session = self.store.session();
        let state = self.guard.evaluate(&session, route.class());
        match state.redirect_target() {
            None => Navigation::Rendered {
                route,
                view: render(route),
            },
            Some(target) => {
                debug!("Guard redirected {route} ({}) to {target}", session.role());
                self.redirect(target)
            }
        }
    }

    fn redirect<V>(&self, target: RedirectTarget) -> Navigation<V> {
        self.navigator.redirect(target);
        Navigation::Redirected { target }
    }
}
