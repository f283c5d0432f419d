mod accessibility;
mod dom;
mod interactions;
mod loading;
mod navigation;
mod observe;
mod performance;
mod reveal;
mod status;
mod theme;

use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Document;

use self::accessibility::{AccessibilityEnhancer, CLOSE_MOBILE_MENU_EVENT};
use self::interactions::InteractiveEffects;
use self::loading::LoadingAnimations;
use self::navigation::Navigation;
use self::performance::PerformanceOptimizer;
use self::reveal::ScrollAnimations;
use self::status::{ConnectionStatus, ConnectionStatusProps};
use self::theme::ThemeManager;
use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::SetupError;

const INJECTED_STYLES: &str = include_str!("frontend/injected.css");
const LOADED_CLASS: &str = "loaded";

thread_local! {
    static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

#[derive(Default)]
struct Startup {
    started: usize,
    failed: Vec<&'static str>,
}

impl Startup {
    /// Builds one component; a failure is logged and leaves the others untouched.
    fn construct<T>(
        &mut self,
        name: &'static str,
        build: impl FnOnce() -> Result<T, SetupError>,
    ) -> Option<T> {
        match build() {
            Ok(component) => {
                self.started += 1;
                log::debug!("{name} ready");
                Some(component)
            }
            Err(error) => {
                self.failed.push(name);
                log::error!("{name} failed to start: {error}");
                None
            }
        }
    }
}

/// Every controller on the page, kept alive for the page's lifetime.
struct Portfolio {
    navigation: Option<Rc<Navigation>>,
    scroll_animations: Option<ScrollAnimations>,
    interactions: Option<InteractiveEffects>,
    loading: Option<LoadingAnimations>,
    performance: Option<PerformanceOptimizer>,
    accessibility: Option<AccessibilityEnhancer>,
    theme: Option<ThemeManager>,
    _listeners: Vec<EventListener>,
}

impl Portfolio {
    fn start(document: &Document, config: &SiteConfig) -> Self {
        let mut startup = Startup::default();

        let navigation = startup
            .construct("navigation", || Navigation::new(document, config))
            .map(Rc::new);
        let scroll_animations =
            startup.construct("scroll animations", || ScrollAnimations::new(document, config));
        let interactions = startup.construct("interactive effects", || {
            InteractiveEffects::new(document, config)
        });
        let loading =
            startup.construct("loading animations", || LoadingAnimations::new(document, config));
        let performance = startup.construct("performance optimizer", || {
            PerformanceOptimizer::new(document, config)
        });
        let accessibility =
            startup.construct("accessibility", || AccessibilityEnhancer::new(document));
        let theme = startup.construct("theme manager", || ThemeManager::new(document));
        startup.construct("connection status", || {
            mount_connection_status(document, config.status_banner_ms)
        });

        let mut listeners = Vec::new();
        if let Some(navigation) = &navigation {
            let navigation = Rc::clone(navigation);
            listeners.push(EventListener::new(document, CLOSE_MOBILE_MENU_EVENT, move |_| {
                if navigation.menu_open() {
                    navigation.close_mobile_menu();
                }
            }));
        }
        if let Ok(window) = dom::window() {
            listeners.push(EventListener::new(&window, "pagehide", |_| {
                PORTFOLIO.with(|slot| {
                    if let Some(portfolio) = slot.borrow().as_ref() {
                        portfolio.log_session_summary();
                    }
                });
            }));
        }

        if let Ok(body) = dom::body(document) {
            dom::add_class(&body, LOADED_CLASS);
        }

        if startup.failed.is_empty() {
            log::info!("portfolio interactions ready ({} components)", startup.started);
        } else {
            log::warn!(
                "portfolio interactions partially ready: {} started, failed: {}",
                startup.started,
                startup.failed.join(", ")
            );
        }

        Self {
            navigation,
            scroll_animations,
            interactions,
            loading,
            performance,
            accessibility,
            theme,
            _listeners: listeners,
        }
    }

    fn log_session_summary(&self) {
        if let Some(navigation) = &self.navigation {
            log::debug!(
                "navigation: active section {:?}, menu open {}",
                navigation.active_section(),
                navigation.menu_open()
            );
        }
        if let Some(animations) = &self.scroll_animations {
            log::debug!(
                "scroll reveal: {}/{} revealed",
                animations.revealed(),
                animations.targets()
            );
        }
        if let Some(interactions) = &self.interactions {
            log::debug!("interactive effects: {} listeners", interactions.bound_listeners());
        }
        if let Some(loading) = &self.loading {
            log::debug!(
                "loading: {} counters started, subtitle of {} chars",
                loading.counters_started(),
                loading.typed_chars()
            );
        }
        if let Some(performance) = &self.performance {
            log::debug!(
                "performance: {} lazy images loaded, reduced motion {}, low performance {}",
                performance.images_loaded(),
                performance.reduced_motion(),
                performance.low_performance()
            );
        }
        if let Some(accessibility) = &self.accessibility {
            log::debug!("accessibility: keyboard mode {}", accessibility.keyboard_mode());
        }
        if let Some(theme) = &self.theme {
            log::debug!("theme: {}", theme.current().as_str());
        }
    }
}

fn load_config(document: &Document) -> (SiteConfig, Vec<String>) {
    let source = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&source)
}

fn inject_styles(document: &Document) -> Result<(), SetupError> {
    let head = document
        .head()
        .ok_or(SetupError::MissingApi("document.head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(INJECTED_STYLES));
    head.append_child(&style)?;
    Ok(())
}

fn mount_connection_status(document: &Document, lifetime_ms: u32) -> Result<(), SetupError> {
    let mount = document.create_element("div")?;
    mount.set_class_name("connection-status-root");
    dom::body(document)?.append_child(&mount)?;
    yew::Renderer::<ConnectionStatus>::with_root_and_props(
        mount,
        ConnectionStatusProps { lifetime_ms },
    )
    .render();
    Ok(())
}

fn start() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("portfolio interactions cannot start: {error}");
            return;
        }
    };

    let (config, warnings) = load_config(&document);
    log::set_max_level(config.log_level.filter());
    for warning in &warnings {
        log::warn!("{warning}");
    }

    if let Err(error) = inject_styles(&document) {
        log::warn!("animation styles were not injected: {error}");
    }

    let portfolio = Portfolio::start(&document, &config);
    PORTFOLIO.with(|slot| *slot.borrow_mut() = Some(portfolio));
}

pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger was already initialised".into());
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("portfolio interactions cannot start: {error}");
            return;
        }
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}
