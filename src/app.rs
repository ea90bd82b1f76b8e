//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{guarded::Guarded, notice_stack::NoticeStack, page_header::PageHeader};
use crate::config::AppConfig;
use crate::net::client::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::routes::{HOME_PATH, LOGIN_PATH, SETTINGS_PATH};
use crate::state::navigation::NavigationState;
use crate::state::session::{SessionState, SessionStore};
use crate::util::notify::NoticeBoard;
use crate::util::redirect::LocationRedirector;
use crate::util::storage::{KeyValueStore, LocalStorage};

pub type AppSession = SessionStore<RwSignal<SessionState>>;

/// Non-reactive collaborators shared through context.
#[derive(Clone)]
pub struct AppServices {
    pub storage: Arc<dyn KeyValueStore>,
    pub session: AppSession,
}

/// Root application component.
///
/// Builds every store once and provides it to the tree; nothing below reads
/// global state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let storage: Arc<dyn KeyValueStore> = Arc::new(LocalStorage);
    let notices = NoticeBoard::new();
    let navigation = RwSignal::new(NavigationState::default());
    let session = RwSignal::new(SessionState::restore(storage.as_ref()));

    let api = ApiClient::new(
        config.api,
        Arc::new(BrowserTransport),
        Arc::clone(&storage),
        Arc::new(notices),
        Arc::new(LocationRedirector),
    );
    let store = SessionStore::new(session, api, Arc::clone(&storage), Arc::new(notices));

    provide_context(notices);
    provide_context(navigation);
    provide_context(session);
    provide_context(AppServices { storage, session: store });

    view! {
        <Title text=move || navigation.with(|n| n.page_title().to_owned())/>

        <Router>
            <PageHeader/>
            <NoticeStack/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded path=LOGIN_PATH/> }
                    />
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded path=HOME_PATH/> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <Guarded path=SETTINGS_PATH/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
