use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use super::dom;
use super::observe::OnceObserver;
use crate::config::SiteConfig;
use crate::error::SetupError;
use crate::motion::stagger_delay;
use crate::trigger::ObserverOptions;

const REVEAL_SELECTOR: &str = ".project-card, .skill-badge, .contact-method";
const READY_CLASS: &str = "animate-ready";
const REVEALED_CLASS: &str = "animate-in";

/// One-shot, staggered reveal of content blocks as they scroll into view.
pub struct ScrollAnimations {
    observer: OnceObserver,
    targets: usize,
}

impl ScrollAnimations {
    pub fn new(document: &Document, config: &SiteConfig) -> Result<Self, SetupError> {
        let targets = dom::query_all::<Element>(document, REVEAL_SELECTOR)?;
        for target in &targets {
            dom::add_class(target, READY_CLASS);
        }

        let count = targets.len();
        let stride = config.reveal_stagger_ms;
        let observer = OnceObserver::watch(targets, ObserverOptions::REVEAL, move |trigger, element| {
            let element = element.clone();
            Timeout::new(stagger_delay(trigger.position, stride), move || {
                dom::add_class(&element, REVEALED_CLASS);
            })
            .forget();
        })?;

        log::debug!("watching {count} elements for scroll reveal");
        Ok(Self {
            observer,
            targets: count,
        })
    }

    pub fn revealed(&self) -> usize {
        self.observer.fired()
    }

    pub fn targets(&self) -> usize {
        self.targets
    }
}
