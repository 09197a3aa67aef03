use super::super::Model;
use super::super::Msg;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::html::Scope;
use yew::prelude::*;

const THEME_KEY: &str = "flamescope.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn load() -> Self {
        LocalStorage::get(THEME_KEY).unwrap_or_default()
    }

    pub fn store(self) {
        if let Err(e) = LocalStorage::set(THEME_KEY, self) {
            log::warn!("Could not persist theme preference: {}", e);
        }
    }

    /// Adds or removes `dark-mode` on `<body>`.
    pub fn apply(self) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            log::warn!("No document body, theme not applied");
            return;
        };

        let result = match self {
            Theme::Dark => body.class_list().add_1("dark-mode"),
            Theme::Light => body.class_list().remove_1("dark-mode"),
        };
        if let Err(e) = result {
            log::warn!("Failed to switch theme: {:?}", e);
        }
    }
}

pub fn render_theme_toggle(theme: Theme, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={ if theme == Theme::Light { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
        >
            { if theme == Theme::Light {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg" alt="Sun Icon" class="toggle-icon" /> }
            } else {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg" alt="Moon Icon" class="toggle-icon" /> }
            }}
        </button>
    }
}
