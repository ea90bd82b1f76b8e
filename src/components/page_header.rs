//! Top bar with the current page title and navigation links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{HOME_PATH, SETTINGS_PATH};
use crate::state::navigation::NavigationState;
use crate::state::session::SessionState;

#[component]
pub fn PageHeader() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let title = move || navigation.with(|n| n.page_title().to_owned());
    let show_links = move || session.with(SessionState::is_authenticated);

    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <Show when=show_links>
                <nav class="page-header__links">
                    <Show when=move || navigation.with(NavigationState::should_show_home)>
                        <A href=HOME_PATH>"Home"</A>
                    </Show>
                    <Show when=move || navigation.with(NavigationState::should_show_settings)>
                        <A href=SETTINGS_PATH>"Settings"</A>
                    </Show>
                </nav>
            </Show>
        </header>
    }
}
