use super::super::{Model, Msg};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::html::Scope;
use yew::prelude::*;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn load() -> Self {
        LocalStorage::get(THEME_KEY).unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn persist(self) {
        if let Err(err) = LocalStorage::set(THEME_KEY, self) {
            log::warn!("Could not store theme: {}", err);
        }
    }

    /// Mirrors the theme onto `<body class="dark-mode">`.
    pub fn apply(self) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };

        let classes = body.class_list();
        let outcome = match self {
            Theme::Dark => classes.add_1("dark-mode"),
            Theme::Light => classes.remove_1("dark-mode"),
        };
        if let Err(err) = outcome {
            log::warn!("Could not apply theme: {:?}", err);
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
