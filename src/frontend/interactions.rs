use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::dom;
use crate::config::SiteConfig;
use crate::effects::{HoverEffect, HOVER_EFFECTS, RIPPLE_SELECTOR, TILT_SELECTOR};
use crate::error::SetupError;
use crate::geometry::{Ripple, Tilt};

/// Pointer feedback: hover tables, button ripples and card tilt.
pub struct InteractiveEffects {
    listeners: Vec<EventListener>,
}

impl InteractiveEffects {
    pub fn new(document: &Document, config: &SiteConfig) -> Result<Self, SetupError> {
        let mut listeners = Vec::new();

        for effect in HOVER_EFFECTS {
            for element in dom::query_all::<HtmlElement>(document, effect.selector)? {
                listeners.extend(bind_hover(&element, effect));
            }
        }

        for button in dom::query_all::<HtmlElement>(document, RIPPLE_SELECTOR)? {
            let target = button.clone();
            let lifetime = config.ripple_duration_ms;
            listeners.push(EventListener::new(&button, "click", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    spawn_ripple(&target, event, lifetime);
                }
            }));
        }

        let divisor = f64::from(config.tilt_divisor);
        for card in dom::query_all::<HtmlElement>(document, TILT_SELECTOR)? {
            let target = card.clone();
            listeners.push(EventListener::new(&card, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let tilt = Tilt::from_pointer(
                    dom::client_rect(&target),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    divisor,
                );
                let transform = tilt.transform();
                dom::set_styles(&target, &[("transform", transform.as_str())]);
            }));
        }

        Ok(Self { listeners })
    }

    pub fn bound_listeners(&self) -> usize {
        self.listeners.len()
    }
}

fn bind_hover(element: &HtmlElement, effect: &'static HoverEffect) -> [EventListener; 2] {
    let entered = element.clone();
    let left = element.clone();

    [
        EventListener::new(element, "mouseenter", move |_| {
            apply_hover(&entered, effect, true);
        }),
        EventListener::new(element, "mouseleave", move |_| {
            apply_hover(&left, effect, false);
        }),
    ]
}

fn apply_hover(element: &HtmlElement, effect: &HoverEffect, entering: bool) {
    dom::set_styles(element, if entering { effect.enter } else { effect.leave });

    for part in effect.parts {
        if let Some(child) = dom::query_within(element, part.selector) {
            dom::set_styles(&child, if entering { part.enter } else { part.leave });
        }
    }
}

fn spawn_ripple(button: &HtmlElement, event: &MouseEvent, lifetime_ms: u32) {
    let Some(document) = button.owner_document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };

    let geometry = Ripple::centered(
        dom::client_rect(button),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );
    let _ = ripple.set_attribute("style", &geometry.css_text(lifetime_ms));
    dom::set_styles(button, &[("position", "relative"), ("overflow", "hidden")]);

    if button.append_child(&ripple).is_ok() {
        Timeout::new(lifetime_ms, move || ripple.remove()).forget();
    }
}
