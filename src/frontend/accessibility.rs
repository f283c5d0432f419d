use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Document, HtmlElement, KeyboardEvent};

use super::dom;
use crate::error::SetupError;

/// Dispatched on `document` when the mobile menu should close.
pub const CLOSE_MOBILE_MENU_EVENT: &str = "closeMobileMenu";

const KEYBOARD_MODE_CLASS: &str = "keyboard-navigation";
const FOCUS_VISIBLE_CLASS: &str = "focus-visible";
const MENU_OPEN_CLASS: &str = "mobile-menu-open";
const MOBILE_MENU_ID: &str = "nav-links";
const MOBILE_TOGGLE_ID: &str = "mobile-menu-toggle";
const HERO_ID: &str = "hero";
const MAIN_CONTENT_ID: &str = "main-content";
const FOCUSABLE_SELECTOR: &str =
    "a, button, input, textarea, select, [tabindex]:not([tabindex=\"-1\"])";

pub struct AccessibilityEnhancer {
    keyboard_mode: Rc<Cell<bool>>,
    _listeners: Vec<EventListener>,
}

impl AccessibilityEnhancer {
    pub fn new(document: &Document) -> Result<Self, SetupError> {
        let body = dom::body(document)?;
        let keyboard_mode = Rc::new(Cell::new(false));
        let mut listeners = Vec::new();

        {
            let body = body.clone();
            let keyboard_mode = Rc::clone(&keyboard_mode);
            let key_document = document.clone();
            listeners.push(EventListener::new(document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match event.key().as_str() {
                    "Tab" => {
                        keyboard_mode.set(true);
                        dom::add_class(&body, KEYBOARD_MODE_CLASS);
                    }
                    "Escape" => request_menu_close(&key_document),
                    _ => {}
                }
            }));
        }

        {
            let body = body.clone();
            let keyboard_mode = Rc::clone(&keyboard_mode);
            listeners.push(EventListener::new(document, "mousedown", move |_| {
                keyboard_mode.set(false);
                dom::remove_class(&body, KEYBOARD_MODE_CLASS);
            }));
        }

        label_mobile_toggle(document)?;
        insert_skip_link(document, &body)?;

        if let Some(hero) = document.get_element_by_id(HERO_ID) {
            hero.set_id(MAIN_CONTENT_ID);
        }

        for element in dom::query_all::<HtmlElement>(document, FOCUSABLE_SELECTOR)? {
            let focused = element.clone();
            let blurred = element.clone();
            listeners.push(EventListener::new(&element, "focus", move |_| {
                dom::add_class(&focused, FOCUS_VISIBLE_CLASS);
            }));
            listeners.push(EventListener::new(&element, "blur", move |_| {
                dom::remove_class(&blurred, FOCUS_VISIBLE_CLASS);
            }));
        }

        Ok(Self {
            keyboard_mode,
            _listeners: listeners,
        })
    }

    pub fn keyboard_mode(&self) -> bool {
        self.keyboard_mode.get()
    }
}

fn request_menu_close(document: &Document) {
    let menu_open = document
        .get_element_by_id(MOBILE_MENU_ID)
        .is_some_and(|menu| menu.class_list().contains(MENU_OPEN_CLASS));
    if !menu_open {
        return;
    }

    match CustomEvent::new(CLOSE_MOBILE_MENU_EVENT) {
        Ok(event) => {
            let _ = document.dispatch_event(&event);
        }
        Err(error) => log::warn!("could not create {CLOSE_MOBILE_MENU_EVENT} event: {error:?}"),
    }
}

fn label_mobile_toggle(document: &Document) -> Result<(), SetupError> {
    if let Some(toggle) = document.get_element_by_id(MOBILE_TOGGLE_ID) {
        toggle.set_attribute("aria-label", "Open navigation menu")?;
        toggle.set_attribute("aria-expanded", "false")?;
    }
    Ok(())
}

fn insert_skip_link(document: &Document, body: &HtmlElement) -> Result<(), SetupError> {
    let skip_link = document.create_element("a")?;
    skip_link.set_attribute("href", &format!("#{MAIN_CONTENT_ID}"))?;
    skip_link.set_class_name("skip-link sr-only");
    skip_link.set_text_content(Some("Skip to main content"));
    body.insert_before(&skip_link, body.first_child().as_ref())?;
    Ok(())
}
