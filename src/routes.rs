//! Static route table and the before-each navigation guard.
//!
//! STATE MACHINE
//! =============
//! Each declared route is a state. For every navigation attempt the guard:
//! 1. records the target's name and title in the navigation store,
//! 2. redirects to Login when the target requires auth and no token is
//!    persisted,
//! 3. otherwise lets the navigation proceed.
//!
//! Redirects are navigations too, so the guard runs again on the redirect
//! target. `components::guarded` renders whatever [`evaluate`] decides.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::handle::StateHandle;
use crate::state::navigation::NavigationState;
use crate::util::storage::{KeyValueStore, read_token};

pub const LOGIN: &str = "Login";
pub const HOME: &str = "Home";
pub const SETTINGS: &str = "Settings";

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/settings";

/// View bound to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
    Settings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub title: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

impl RouteDef {
    /// Title recorded by the guard: the declared title, else the route name.
    pub fn display_title(&self) -> &'static str {
        self.meta.title.unwrap_or(self.name)
    }
}

pub static ROUTES: [RouteDef; 3] = [
    RouteDef {
        path: LOGIN_PATH,
        name: LOGIN,
        view: View::Login,
        meta: RouteMeta { requires_auth: false, title: None },
    },
    RouteDef {
        path: HOME_PATH,
        name: HOME,
        view: View::Home,
        meta: RouteMeta { requires_auth: true, title: Some("Consciousness Projection Home") },
    },
    RouteDef {
        path: SETTINGS_PATH,
        name: SETTINGS,
        view: View::Settings,
        meta: RouteMeta { requires_auth: true, title: Some("System Console") },
    },
];

/// Strip query and fragment, and a trailing slash on non-root paths.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

pub fn resolve(path: &str) -> Option<&'static RouteDef> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Evaluate the guard for one navigation attempt.
///
/// `target` is `None` for paths that match no declared route; those skip the
/// navigation-store update and proceed.
pub fn before_each<N>(target: Option<&RouteDef>, navigation: &N, store: &dyn KeyValueStore) -> GuardDecision
where
    N: StateHandle<NavigationState>,
{
    let Some(route) = target else {
        return GuardDecision::Proceed;
    };
    navigation.write_state(|nav| nav.update_route(route.name, route.display_title()));

    if route.meta.requires_auth && read_token(store).is_none() {
        log::debug!("guard: {} requires auth, redirecting to {LOGIN_PATH}", route.name);
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    GuardDecision::Proceed
}

/// What a routed view should render for a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Render(View),
    Redirect(&'static str),
    NotFound,
}

/// Resolve `path` and run the guard on it.
pub fn evaluate<N>(path: &str, navigation: &N, store: &dyn KeyValueStore) -> RouteOutcome
where
    N: StateHandle<NavigationState>,
{
    let route = resolve(path);
    match (before_each(route, navigation, store), route) {
        (GuardDecision::Redirect(to), _) => RouteOutcome::Redirect(to),
        (GuardDecision::Proceed, Some(route)) => RouteOutcome::Render(route.view),
        (GuardDecision::Proceed, None) => RouteOutcome::NotFound,
    }
}
