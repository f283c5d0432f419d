use std::cell::Cell;
use std::rc::Rc;
use web_sys::{window, Document, Storage};
use yew::prelude::*;

use super::dom;
use crate::error::SetupError;
use crate::theme::{resolve_theme, Theme, THEME_ATTRIBUTE, THEME_KEY};

const TOGGLE_ICON: &str = "🌙";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
            log::warn!("could not persist theme preference");
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub initial: Theme,
    pub on_change: Callback<Theme>,
}

/// Theme switch button. It ships hidden until the light palette is finished.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let initial = props.initial;
    let theme = use_state(move || initial);

    let on_toggle = {
        let theme = theme.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme(next);
            theme.set(next);
            on_change.emit(next);
        })
    };

    html! {
        <button
            class="theme-toggle"
            type="button"
            style="display: none"
            aria-label="Toggle theme"
            onclick={on_toggle}
        >
            {TOGGLE_ICON}
        </button>
    }
}

/// Resolves and applies the theme at startup and mounts the toggle.
pub struct ThemeManager {
    current: Rc<Cell<Theme>>,
}

impl ThemeManager {
    pub fn new(document: &Document) -> Result<Self, SetupError> {
        let stored = read_stored_theme();
        let theme = resolve_theme(
            stored.as_deref(),
            dom::matches_media("(prefers-color-scheme: light)"),
        );
        apply_theme(theme);

        let current = Rc::new(Cell::new(theme));
        let mount = document.create_element("div")?;
        mount.set_class_name("theme-toggle-root");
        dom::body(document)?.append_child(&mount)?;

        let on_change = {
            let current = Rc::clone(&current);
            Callback::from(move |next: Theme| {
                current.set(next);
                log::info!("theme switched to {}", next.as_str());
            })
        };
        yew::Renderer::<ThemeToggle>::with_root_and_props(
            mount,
            ThemeToggleProps {
                initial: theme,
                on_change,
            },
        )
        .render();

        log::debug!(
            "theme resolved to {} (stored: {})",
            theme.as_str(),
            stored.as_deref().unwrap_or("none")
        );
        Ok(Self { current })
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }
}
