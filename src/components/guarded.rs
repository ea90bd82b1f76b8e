//! Route-guard wrapper for routed views.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::app::AppServices;
use crate::pages::{home::HomePage, login::LoginPage, settings::SettingsPage};
use crate::routes::{self, RouteOutcome, View};
use crate::state::navigation::NavigationState;

/// Runs the before-each guard for `path`, then renders the route's view or
/// redirects. Evaluation completes before the page is built; a redirect
/// target renders through another `Guarded`, so the guard runs again there.
#[component]
pub fn Guarded(path: &'static str) -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let services = expect_context::<AppServices>();

    match routes::evaluate(path, &navigation, services.storage.as_ref()) {
        RouteOutcome::Render(view) => page(view),
        RouteOutcome::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        RouteOutcome::NotFound => "Page not found.".into_any(),
    }
}

fn page(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Home => view! { <HomePage/> }.into_any(),
        View::Settings => view! { <SettingsPage/> }.into_any(),
    }
}
