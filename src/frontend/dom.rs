use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::error::SetupError;
use crate::gate::{DebounceGate, ThrottleGate};
use crate::geometry::Rect;
use crate::motion::ScrollTween;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::MissingApi("window"))
}

pub fn document() -> Result<Document, SetupError> {
    window()?
        .document()
        .ok_or(SetupError::MissingApi("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, SetupError> {
    document.body().ok_or(SetupError::MissingApi("document.body"))
}

pub fn root_element(document: &Document) -> Result<Element, SetupError> {
    document
        .document_element()
        .ok_or(SetupError::MissingApi("document.documentElement"))
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn required_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, SetupError> {
    by_id(document, id).ok_or(SetupError::MissingElement(id))
}

/// All matches of `selector` that are of type `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, SetupError> {
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn query_within(element: &Element, selector: &str) -> Option<HtmlElement> {
    element
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|found| found.dyn_into::<HtmlElement>().ok())
}

pub fn set_styles(element: &HtmlElement, rules: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in rules {
        let _ = style.set_property(property, value);
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn matches_media(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn is_in_viewport(element: &Element) -> bool {
    let (width, height) = viewport_size();
    client_rect(element).fits_viewport(width, height)
}

/// Runs `callback` on the leading call, then drops calls until `limit_ms` has passed.
pub fn throttle<F>(limit_ms: u32, mut callback: F) -> impl FnMut(&Event)
where
    F: FnMut(&Event) + 'static,
{
    let mut gate = ThrottleGate::new(limit_ms);
    move |event: &Event| {
        if gate.admit(js_sys::Date::now()) {
            callback(event);
        }
    }
}

/// Runs `callback` once `wait_ms` after the most recent call.
pub fn debounce<F>(wait_ms: u32, callback: F) -> impl FnMut(&Event)
where
    F: FnMut() + 'static,
{
    let callback = Rc::new(RefCell::new(callback));
    let gate = Rc::new(RefCell::new(DebounceGate::default()));
    let mut pending: Option<Timeout> = None;
    move |_event: &Event| {
        let ticket = gate.borrow_mut().call();
        let callback = Rc::clone(&callback);
        let gate = Rc::clone(&gate);
        let timeout = Timeout::new(wait_ms, move || {
            if gate.borrow_mut().settle(ticket) {
                (&mut *callback.borrow_mut())();
            }
        });
        drop(pending.replace(timeout));
    }
}

/// Calls `tick` every `interval_ms` until it breaks.
pub fn repeat_every<F>(interval_ms: u32, tick: F)
where
    F: FnMut() -> ControlFlow<()> + 'static,
{
    schedule_tick(interval_ms, Rc::new(RefCell::new(tick)));
}

fn schedule_tick<F>(interval_ms: u32, tick: Rc<RefCell<F>>)
where
    F: FnMut() -> ControlFlow<()> + 'static,
{
    Timeout::new(interval_ms, move || {
        let flow = (&mut *tick.borrow_mut())();
        if flow.is_continue() {
            schedule_tick(interval_ms, tick);
        }
    })
    .forget();
}

/// Eased window scrolling. Starting a new scroll cancels the one in flight.
#[derive(Clone, Default)]
pub struct SmoothScroller {
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl SmoothScroller {
    pub fn scroll_to(&self, target: &HtmlElement, duration_ms: u32, nav_offset: f64) {
        let destination = f64::from(target.offset_top()) - nav_offset;
        let tween = ScrollTween::new(scroll_offset(), destination, f64::from(duration_ms));
        log::debug!(
            "smooth scroll to #{} ({destination}px over {duration_ms}ms)",
            target.id()
        );
        schedule_frame(Rc::clone(&self.frame), tween);
    }
}

fn schedule_frame(slot: Rc<RefCell<Option<AnimationFrame>>>, mut tween: ScrollTween) {
    let next_slot = Rc::clone(&slot);
    let handle = request_animation_frame(move |timestamp| {
        let sample = tween.sample(timestamp);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, sample.offset);
        }

        if sample.finished {
            next_slot.borrow_mut().take();
        } else {
            schedule_frame(next_slot, tween);
        }
    });
    *slot.borrow_mut() = Some(handle);
}
