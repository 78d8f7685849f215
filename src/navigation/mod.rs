//! Route table and the session-aware guard in front of it.

use std::fmt;

/// A view the user can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Search,
    Profile,
}

impl Route {
    /// Map a path to a route. Unknown paths land on the dashboard.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed.trim_start_matches('/') {
            "" => Route::Root,
            "login" => Route::Login,
            "register" => Route::Register,
            "dashboard" => Route::Dashboard,
            "search" => Route::Search,
            "profile" => Route::Profile,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Search => "/search",
            Route::Profile => "/profile",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Profile)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Resolve `path` to the route actually shown, applying redirects.
///
/// `/` goes to the dashboard and guarded routes send anonymous users to
/// the login page.
pub fn resolve(path: &str, is_authenticated: bool) -> Route {
    match Route::parse(path) {
        Route::Root => Route::Dashboard,
        route if route.requires_auth() && !is_authenticated => Route::Login,
        route => route,
    }
}

/// Navigation entries offered for the current session state.
pub fn menu(is_authenticated: bool) -> Vec<Route> {
    if is_authenticated {
        vec![Route::Dashboard, Route::Search, Route::Profile]
    } else {
        vec![Route::Dashboard, Route::Search, Route::Login, Route::Register]
    }
}

/// Something that can move the user to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator for headless front ends: records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = %route, "Navigate");
    }
}
