//! Home page: the signed-in user's profile card.

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let store = expect_context::<crate::app::AppServices>().session;
    leptos::task::spawn_local(async move {
        store.fetch_profile().await;
    });

    view! {
        <div class="home-page">
            {move || session.with(|s| view! { <ProfileCard profile=s.profile.clone()/> })}
        </div>
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let attributes = profile
        .attributes
        .into_iter()
        .map(|attr| {
            view! {
                <li class="profile-card__attribute">
                    <span class="profile-card__label">{attr.label}</span>
                    <span class="profile-card__bar" style=format!("background:{}", attr.color)>
                        {attr.value}
                    </span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let skills = profile
        .skills
        .into_iter()
        .map(|skill| {
            view! {
                <li class="profile-card__skill">
                    <span>{skill.name}</span>
                    <span class="profile-card__skill-level">{skill.level}</span>
                    <span class="profile-card__skill-type">{skill.kind}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="profile-card">
            <img class="profile-card__avatar" src=profile.avatar_url alt="avatar"/>
            <h2 class="profile-card__name">{profile.username}</h2>
            <p class="profile-card__title">{profile.title}</p>
            <dl class="profile-card__stats">
                <dt>"Level"</dt>
                <dd>{profile.level}</dd>
                <dt>"EXP"</dt>
                <dd>{profile.exp}</dd>
                <dt>"Cash"</dt>
                <dd>{profile.cash}</dd>
            </dl>
            <ul class="profile-card__attributes">{attributes}</ul>
            <ul class="profile-card__skills">{skills}</ul>
        </section>
    }
}
