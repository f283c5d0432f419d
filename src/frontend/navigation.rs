use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use super::dom::{self, SmoothScroller};
use super::observe::VisibilityObserver;
use crate::config::SiteConfig;
use crate::error::SetupError;
use crate::nav::{anchor_href, exceeds_breakpoint, fragment_target, NavState};
use crate::trigger::ObserverOptions;

const NAV_ID: &str = "navbar";
const MOBILE_TOGGLE_ID: &str = "mobile-menu-toggle";
const MOBILE_MENU_ID: &str = "nav-links";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const SECTION_SELECTOR: &str = "section[id]";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

const SCROLLED_CLASS: &str = "nav-scrolled";
const ACTIVE_CLASS: &str = "active";
const MENU_OPEN_CLASS: &str = "mobile-menu-open";
const TOGGLE_ACTIVE_CLASS: &str = "mobile-menu-active";
const SCROLLED_BACKGROUND: &str = "rgba(10, 10, 10, 0.95)";
const RESTING_BACKGROUND: &str = "rgba(10, 10, 10, 0.9)";

struct MobileMenu {
    toggle: HtmlElement,
    menu: HtmlElement,
}

struct NavShared {
    nav: HtmlElement,
    links: Vec<HtmlElement>,
    mobile: Option<MobileMenu>,
    body: HtmlElement,
    state: RefCell<NavState>,
    scroller: SmoothScroller,
    scroll_duration_ms: u32,
    nav_offset: f64,
    breakpoint: f64,
}

impl NavShared {
    fn apply_scrolled(&self, scrolled: bool) {
        if scrolled {
            dom::add_class(&self.nav, SCROLLED_CLASS);
            dom::set_styles(&self.nav, &[("background", SCROLLED_BACKGROUND)]);
        } else {
            dom::remove_class(&self.nav, SCROLLED_CLASS);
            dom::set_styles(&self.nav, &[("background", RESTING_BACKGROUND)]);
        }
    }

    fn handle_scroll(&self) {
        let changed = self.state.borrow_mut().update_scroll(dom::scroll_offset());
        if changed {
            let scrolled = self.state.borrow().is_scrolled();
            self.apply_scrolled(scrolled);
        }
    }

    fn highlight(&self, section_id: &str) {
        if !self.state.borrow_mut().activate(section_id) {
            return;
        }

        let href = anchor_href(section_id);
        for link in &self.links {
            dom::remove_class(link, ACTIVE_CLASS);
        }
        if let Some(link) = self
            .links
            .iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
        {
            dom::add_class(link, ACTIVE_CLASS);
        }
        log::debug!("scroll-spy: #{section_id} is current");
    }

    fn toggle_menu(&self) {
        if self.mobile.is_none() {
            return;
        }
        self.state.borrow_mut().toggle_menu();
        self.render_menu();
    }

    fn close_menu(&self) {
        let was_open = self.state.borrow_mut().close_menu();
        self.render_menu();
        if was_open {
            log::debug!("mobile menu closed");
        }
    }

    fn render_menu(&self) {
        let Some(mobile) = &self.mobile else {
            return;
        };
        let state = self.state.borrow();
        let open = state.menu_open();
        let _ = mobile.menu.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
        let _ = mobile
            .toggle
            .class_list()
            .toggle_with_force(TOGGLE_ACTIVE_CLASS, open);
        let _ = mobile
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        let overflow = if state.scroll_locked() { "hidden" } else { "" };
        let _ = self.body.style().set_property("overflow", overflow);
    }

    fn scroll_to(&self, target: &HtmlElement, duration_ms: u32) {
        self.scroller.scroll_to(target, duration_ms, self.nav_offset);
    }
}

/// Nav bar styling, scroll-spy, in-page anchor scrolling and the mobile menu.
pub struct Navigation {
    shared: Rc<NavShared>,
    _spy: Option<VisibilityObserver>,
    _listeners: Vec<EventListener>,
}

impl Navigation {
    pub fn new(document: &Document, config: &SiteConfig) -> Result<Self, SetupError> {
        let window = dom::window()?;
        let nav: HtmlElement = dom::required_by_id(document, NAV_ID)?;
        let links = dom::query_all::<HtmlElement>(document, NAV_LINK_SELECTOR)?;
        let mobile = match (
            dom::by_id::<HtmlElement>(document, MOBILE_TOGGLE_ID),
            dom::by_id::<HtmlElement>(document, MOBILE_MENU_ID),
        ) {
            (Some(toggle), Some(menu)) => Some(MobileMenu { toggle, menu }),
            _ => {
                log::debug!("no mobile menu on this page");
                None
            }
        };

        let shared = Rc::new(NavShared {
            nav,
            links,
            mobile,
            body: dom::body(document)?,
            state: RefCell::new(NavState::new(f64::from(config.scrolled_threshold_px))),
            scroller: SmoothScroller::default(),
            scroll_duration_ms: config.scroll_duration_ms,
            nav_offset: f64::from(config.nav_offset_px),
            breakpoint: f64::from(config.mobile_breakpoint_px),
        });

        let mut listeners = Vec::new();

        shared.state.borrow_mut().update_scroll(dom::scroll_offset());
        shared.apply_scrolled(shared.state.borrow().is_scrolled());

        let on_scroll = {
            let shared = Rc::clone(&shared);
            dom::throttle(config.scroll_throttle_ms, move |_| shared.handle_scroll())
        };
        listeners.push(EventListener::new(&window, "scroll", on_scroll));

        let on_resize = {
            let shared = Rc::clone(&shared);
            dom::debounce(config.resize_debounce_ms, move || {
                let (width, _) = dom::viewport_size();
                if exceeds_breakpoint(width, shared.breakpoint) {
                    shared.close_menu();
                }
            })
        };
        listeners.push(EventListener::new(&window, "resize", on_resize));

        let spy = Self::watch_sections(document, &shared)?;
        listeners.extend(Self::bind_anchors(document, &shared)?);

        if let Some(mobile) = &shared.mobile {
            let toggle_shared = Rc::clone(&shared);
            listeners.push(EventListener::new(&mobile.toggle, "click", move |_| {
                toggle_shared.toggle_menu();
            }));

            let outside_shared = Rc::clone(&shared);
            listeners.push(EventListener::new(document, "click", move |event| {
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|node| outside_shared.nav.contains(Some(&node)));
                if !inside {
                    outside_shared.close_menu();
                }
            }));
        }

        Self::jump_to_initial_fragment(document, &shared, config.initial_jump_delay_ms);

        Ok(Self {
            shared,
            _spy: spy,
            _listeners: listeners,
        })
    }

    fn watch_sections(
        document: &Document,
        shared: &Rc<NavShared>,
    ) -> Result<Option<VisibilityObserver>, SetupError> {
        let sections = dom::query_all::<Element>(document, SECTION_SELECTOR)?;
        if sections.is_empty() {
            return Ok(None);
        }

        // Ids are captured now so later id rewrites keep matching the nav links.
        let ids = sections.iter().map(Element::id).collect::<Vec<_>>();
        let watched = sections.clone();
        let spy_shared = Rc::clone(shared);
        let observer = VisibilityObserver::new(ObserverOptions::SCROLL_SPY, move |batch, _| {
            for (element, intersecting) in batch {
                if !*intersecting {
                    continue;
                }
                if let Some(index) = watched.iter().position(|section| section == element) {
                    spy_shared.highlight(&ids[index]);
                }
            }
        })?;

        for section in &sections {
            observer.observe(section);
        }

        Ok(Some(observer))
    }

    fn bind_anchors(
        document: &Document,
        shared: &Rc<NavShared>,
    ) -> Result<Vec<EventListener>, SetupError> {
        let anchors = dom::query_all::<HtmlElement>(document, ANCHOR_SELECTOR)?;
        let mut listeners = Vec::with_capacity(anchors.len());

        for anchor in anchors {
            let Some(href) = anchor.get_attribute("href") else {
                continue;
            };
            let Some(target) =
                fragment_target(&href).and_then(|id| dom::by_id::<HtmlElement>(document, id))
            else {
                continue;
            };

            let shared = Rc::clone(shared);
            listeners.push(EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    shared.scroll_to(&target, shared.scroll_duration_ms);
                    shared.close_menu();
                },
            ));
        }

        Ok(listeners)
    }

    fn jump_to_initial_fragment(document: &Document, shared: &Rc<NavShared>, delay_ms: u32) {
        let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) else {
            return;
        };
        let Some(target) =
            fragment_target(&hash).and_then(|id| dom::by_id::<HtmlElement>(document, id))
        else {
            return;
        };
        log::debug!(
            "initial fragment #{} (in view before offset: {})",
            target.id(),
            dom::is_in_viewport(&target)
        );

        let shared = Rc::clone(shared);
        Timeout::new(delay_ms, move || shared.scroll_to(&target, 0)).forget();
    }

    pub fn close_mobile_menu(&self) {
        self.shared.close_menu();
    }

    pub fn menu_open(&self) -> bool {
        self.shared.state.borrow().menu_open()
    }

    pub fn active_section(&self) -> Option<String> {
        self.shared
            .state
            .borrow()
            .active_section()
            .map(ToString::to_string)
    }
}
