//! Active route name and display title.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the route guard, once per navigation, before the target
//! view renders. The header reads it to label the page and hide links to the
//! page already shown.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::routes::{HOME, SETTINGS};

pub const INITIAL_TITLE: &str = "Loading page...";
pub const UNNAMED_TITLE: &str = "Unnamed page";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current_route: String,
    pub current_title: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { current_route: String::new(), current_title: INITIAL_TITLE.to_owned() }
    }
}

impl NavigationState {
    /// Overwrite both fields; an empty `title` falls back to [`UNNAMED_TITLE`].
    pub fn update_route(&mut self, name: &str, title: &str) {
        name.clone_into(&mut self.current_route);
        let title = if title.is_empty() { UNNAMED_TITLE } else { title };
        title.clone_into(&mut self.current_title);
    }

    pub fn is_home(&self) -> bool {
        self.current_route == HOME
    }

    pub fn is_settings(&self) -> bool {
        self.current_route == SETTINGS
    }

    /// Header shows its "home" link everywhere except Home.
    pub fn should_show_home(&self) -> bool {
        !self.is_home()
    }

    pub fn should_show_settings(&self) -> bool {
        !self.is_settings()
    }

    pub fn page_title(&self) -> &str {
        &self.current_title
    }
}
