//! Settings page: session controls.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let services = expect_context::<crate::app::AppServices>();
    let navigate = leptos_router::hooks::use_navigate();

    let username = move || session.with(|s| s.profile.username.clone());

    let mount_store = services.session.clone();
    leptos::task::spawn_local(async move {
        mount_store.fetch_profile().await;
    });

    let refresh_store = services.session.clone();
    let on_refresh = move |_| {
        let store = refresh_store.clone();
        leptos::task::spawn_local(async move {
            store.refresh_profile().await;
        });
    };

    let on_logout = move |_| {
        services.session.logout();
        navigate(crate::routes::LOGIN_PATH, leptos_router::NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <section class="settings-card">
                <h2>"Session"</h2>
                <p class="settings-card__user">"Signed in as " {username}</p>
                <div class="settings-card__actions">
                    <button class="btn" on:click=on_refresh>
                        "Refresh profile"
                    </button>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Sign out"
                    </button>
                </div>
            </section>
        </div>
    }
}
