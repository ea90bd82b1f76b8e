//! User-facing toast notices.
//!
//! DESIGN
//! ======
//! Producers (HTTP interceptor, session store) only see the [`Notifier`]
//! trait. The app wires in [`NoticeBoard`], a signal-backed queue rendered by
//! `components::notice_stack`. Every notice is also mirrored to the log.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// Oldest notices are dropped past this many visible entries.
pub const MAX_VISIBLE_NOTICES: usize = 4;

/// Auto-dismiss delay for browser notices.
#[cfg(feature = "csr")]
const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// CSS modifier used by the notice stack.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Sink for notices shown to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// A notice tagged with a queue-unique id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Visible notice queue.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub entries: Vec<QueuedNotice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(QueuedNotice { id, notice });
        if self.entries.len() > MAX_VISIBLE_NOTICES {
            let overflow = self.entries.len() - MAX_VISIBLE_NOTICES;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// Signal-backed [`Notifier`] provided to the component tree.
#[derive(Clone, Copy, Debug)]
pub struct NoticeBoard {
    state: RwSignal<NoticeState>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self { state: RwSignal::new(NoticeState::default()) }
    }

    pub fn state(&self) -> RwSignal<NoticeState> {
        self.state
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        log_notice(&notice);
        let Some(id) = self.state.try_update(|s| s.push(notice)) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let state = self.state;
            gloo_timers::callback::Timeout::new(NOTICE_TTL_MS, move || {
                state.update(|s| s.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}

fn log_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => log::info!("notice: {}", notice.message),
        NoticeLevel::Error => log::warn!("error notice: {}", notice.message),
    }
}
