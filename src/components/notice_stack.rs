//! Toast stack rendering queued notices.

use leptos::prelude::*;

use crate::util::notify::NoticeBoard;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let board = expect_context::<NoticeBoard>();
    let state = board.state();

    view! {
        <div class="notice-stack" role="status">
            {move || {
                state
                    .get()
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let id = entry.id;
                        let class = format!("notice notice--{}", entry.notice.level.css_modifier());
                        view! {
                            <div class=class>
                                <span class="notice__message">{entry.notice.message}</span>
                                <button class="notice__close" on:click=move |_| board.dismiss(id)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
