use super::*;
use crate::net::error::SESSION_EXPIRED_MESSAGE;
use crate::net::transport::Method;
use crate::routes::{self, HOME_PATH, LOGIN_PATH, RouteOutcome, SETTINGS_PATH, View};
use crate::state::navigation::NavigationState;
use crate::test_helpers::{Harness, profile_body, respond, token_body};
use crate::util::notify::NoticeLevel;
use crate::util::storage::MemoryStore;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

type CellStore = SessionStore<Rc<RefCell<SessionState>>>;

fn session(h: &Harness) -> CellStore {
    let state = Rc::new(RefCell::new(SessionState::restore(h.store.as_ref())));
    SessionStore::new(state, h.client.clone(), h.dyn_store(), h.dyn_notifier())
}

fn creds() -> Credentials {
    Credentials { username: "neo".to_owned(), password: "zion".to_owned() }
}

fn snapshot(store: &CellStore) -> SessionState {
    store.state().borrow().clone()
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_picks_up_persisted_token() {
    let store = MemoryStore::with_entry(TOKEN_KEY, "Bearer xyz");
    let state = SessionState::restore(&store);
    assert_eq!(state.token.as_deref(), Some("Bearer xyz"));
    assert!(state.is_authenticated());
    assert_eq!(state.profile, UserProfile::sentinel());
}

#[test]
fn restore_without_token_is_logged_out() {
    let state = SessionState::restore(&MemoryStore::new());
    assert!(!state.is_authenticated());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_stores_token_in_memory_and_storage() {
    let h = Harness::new(vec![respond(200, token_body())]);
    let store = session(&h);
    assert!(block_on(store.login(&creds())));
    assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("Bearer abcd1234"));
    assert_eq!(snapshot(&store).token.as_deref(), Some("Bearer abcd1234"));
}

#[test]
fn login_failure_commits_nothing() {
    let h = Harness::new(vec![respond(400, r#"{"detail":"Incorrect username or password"}"#)]);
    let store = session(&h);
    assert!(!block_on(store.login(&creds())));
    assert_eq!(h.store.get(TOKEN_KEY), None);
    assert_eq!(snapshot(&store).token, None);
    assert_eq!(h.notifier.messages(), ["Incorrect username or password"]);
}

#[test]
fn login_network_failure_returns_false() {
    let h = Harness::new(vec![]);
    let store = session(&h);
    assert!(!block_on(store.login(&creds())));
    assert!(h.store.is_empty());
}

#[test]
fn login_with_malformed_success_body_commits_nothing() {
    let h = Harness::new(vec![respond(200, r#"{"token_type":"Bearer"}"#)]);
    let store = session(&h);
    assert!(!block_on(store.login(&creds())));
    assert!(h.store.is_empty());
    assert_eq!(snapshot(&store).token, None);
}

#[test]
fn requests_after_login_carry_new_token() {
    let h = Harness::new(vec![respond(200, token_body()), respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.login(&creds()));
    block_on(store.fetch_profile());
    let sent = h.transport.requests();
    assert_eq!(sent[0].header("Authorization"), None);
    assert_eq!(sent[1].header("Authorization"), Some("Bearer abcd1234"));
}

// =============================================================
// fetch_profile
// =============================================================

#[test]
fn fetch_profile_replaces_sentinel() {
    let h = Harness::new(vec![respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.fetch_profile());
    let profile = snapshot(&store).profile;
    assert_eq!(profile.username, "neo");
    assert_eq!(profile.level, 7);
    assert_eq!(profile.skills[0].name, "Kung Fu");
}

#[test]
fn fetch_profile_twice_calls_backend_once() {
    let h = Harness::new(vec![respond(200, profile_body()), respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.fetch_profile());
    block_on(store.fetch_profile());
    assert_eq!(h.transport.request_count(), 1);
    assert_eq!(h.transport.requests()[0].method, Method::Get);
}

#[test]
fn refresh_profile_bypasses_loaded_check() {
    let h = Harness::new(vec![respond(200, profile_body()), respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.fetch_profile());
    block_on(store.refresh_profile());
    assert_eq!(h.transport.request_count(), 2);
}

#[test]
fn fetch_profile_failure_keeps_prior_profile() {
    let h = Harness::new(vec![respond(200, profile_body()), respond(500, "")]);
    let store = session(&h);
    block_on(store.fetch_profile());
    let loaded = snapshot(&store).profile;
    block_on(store.refresh_profile());
    assert_eq!(snapshot(&store).profile, loaded);
}

#[test]
fn fetch_profile_failure_keeps_sentinel_and_retries_next_time() {
    let h = Harness::new(vec![respond(500, ""), respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.fetch_profile());
    assert_eq!(snapshot(&store).profile, UserProfile::sentinel());
    block_on(store.fetch_profile());
    assert_eq!(snapshot(&store).profile.username, "neo");
}

#[test]
fn fetch_profile_unauthorized_expires_session() {
    let h = Harness::with_store(MemoryStore::with_entry(TOKEN_KEY, "Bearer stale"), vec![respond(401, "")]);
    let store = session(&h);
    block_on(store.fetch_profile());
    assert_eq!(h.store.get(TOKEN_KEY), None);
    assert_eq!(h.redirector.targets(), ["/login"]);
    assert_eq!(h.notifier.messages(), [SESSION_EXPIRED_MESSAGE]);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_resets_everything_and_notifies() {
    let h = Harness::new(vec![respond(200, token_body()), respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.login(&creds()));
    block_on(store.fetch_profile());

    store.logout();

    let state = snapshot(&store);
    assert_eq!(state.token, None);
    assert_eq!(state.profile, UserProfile::sentinel());
    assert_eq!(h.store.get(TOKEN_KEY), None);
    let notices = h.notifier.notices();
    assert_eq!(notices.last().unwrap().level, NoticeLevel::Success);
    assert_eq!(notices.last().unwrap().message, LOGGED_OUT_MESSAGE);
    assert_eq!(h.transport.request_count(), 2);
}

#[test]
fn fetch_after_logout_hits_backend_again() {
    let h = Harness::new(vec![respond(200, profile_body()), respond(200, profile_body())]);
    let store = session(&h);
    block_on(store.fetch_profile());
    store.logout();
    block_on(store.fetch_profile());
    assert_eq!(h.transport.request_count(), 2);
}

#[test]
fn logout_when_logged_out_still_succeeds() {
    let h = Harness::new(vec![]);
    let store = session(&h);
    store.logout();
    assert_eq!(h.notifier.messages(), [LOGGED_OUT_MESSAGE]);
    assert_eq!(h.transport.request_count(), 0);
}

// =============================================================
// session and guard together
// =============================================================

fn nav() -> Rc<RefCell<NavigationState>> {
    Rc::new(RefCell::new(NavigationState::default()))
}

#[test]
fn login_then_protected_route_renders() {
    let h = Harness::new(vec![respond(200, token_body())]);
    let store = session(&h);
    let nav = nav();
    assert_eq!(routes::evaluate(HOME_PATH, &nav, h.store.as_ref()), RouteOutcome::Redirect(LOGIN_PATH));

    assert!(block_on(store.login(&creds())));
    assert_eq!(routes::evaluate(HOME_PATH, &nav, h.store.as_ref()), RouteOutcome::Render(View::Home));
    assert_eq!(routes::evaluate(SETTINGS_PATH, &nav, h.store.as_ref()), RouteOutcome::Render(View::Settings));
    assert!(nav.borrow().is_settings());
}

#[test]
fn logout_then_protected_route_redirects_to_login() {
    let h = Harness::new(vec![respond(200, token_body())]);
    let store = session(&h);
    let nav = nav();
    assert!(block_on(store.login(&creds())));
    assert_eq!(routes::evaluate(SETTINGS_PATH, &nav, h.store.as_ref()), RouteOutcome::Render(View::Settings));

    store.logout();
    assert_eq!(routes::evaluate(SETTINGS_PATH, &nav, h.store.as_ref()), RouteOutcome::Redirect(LOGIN_PATH));
    assert_eq!(routes::evaluate(LOGIN_PATH, &nav, h.store.as_ref()), RouteOutcome::Render(View::Login));
    assert_eq!(nav.borrow().page_title(), "Login");
}
