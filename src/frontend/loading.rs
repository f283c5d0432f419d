use gloo::timers::callback::Timeout;
use std::ops::ControlFlow;
use web_sys::{Document, Element, HtmlElement};

use super::dom;
use super::observe::OnceObserver;
use crate::config::SiteConfig;
use crate::error::SetupError;
use crate::motion::{parse_counter_target, stagger_delay, CounterAnimation, TypingEffect};
use crate::trigger::ObserverOptions;

const HERO_SELECTOR: &str = ".fade-in, .fade-in-delay, .fade-in-delay-2, .fade-in-delay-3";
const COUNTER_SELECTOR: &str = ".experience-number";
const SUBTITLE_SELECTOR: &str = ".hero-subtitle";

/// First-paint animations: hero fade-ins, experience counters and the subtitle
/// typing effect.
pub struct LoadingAnimations {
    counters: Option<OnceObserver>,
    typed_chars: usize,
}

impl LoadingAnimations {
    pub fn new(document: &Document, config: &SiteConfig) -> Result<Self, SetupError> {
        reveal_hero(document, config.hero_stagger_ms)?;
        let counters = watch_counters(document, config)?;
        let typed_chars = start_typing(document, config)?;

        Ok(Self {
            counters,
            typed_chars,
        })
    }

    pub fn counters_started(&self) -> usize {
        self.counters.as_ref().map_or(0, OnceObserver::fired)
    }

    pub fn typed_chars(&self) -> usize {
        self.typed_chars
    }
}

fn reveal_hero(document: &Document, stride_ms: u32) -> Result<(), SetupError> {
    for (index, element) in dom::query_all::<HtmlElement>(document, HERO_SELECTOR)?
        .into_iter()
        .enumerate()
    {
        Timeout::new(stagger_delay(index, stride_ms), move || {
            dom::set_styles(&element, &[("opacity", "1"), ("transform", "translateY(0)")]);
        })
        .forget();
    }
    Ok(())
}

fn watch_counters(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<OnceObserver>, SetupError> {
    let mut elements = Vec::new();
    let mut targets = Vec::new();

    for counter in dom::query_all::<Element>(document, COUNTER_SELECTOR)? {
        let text = counter.text_content().unwrap_or_default();
        match parse_counter_target(&text) {
            Ok(target) => {
                elements.push(counter);
                targets.push(target);
            }
            Err(reason) => log::warn!("skipping counter {text:?}: {reason}"),
        }
    }

    if elements.is_empty() {
        return Ok(None);
    }

    let steps = config.counter_steps;
    let interval_ms = config.counter_interval_ms;
    let observer = OnceObserver::watch(
        elements,
        ObserverOptions::ANY_VISIBILITY,
        move |trigger, element| {
            let mut counter = CounterAnimation::new(targets[trigger.target], steps);
            let element = element.clone();
            dom::repeat_every(interval_ms, move || {
                element.set_text_content(Some(counter.advance().as_str()));
                if counter.is_finished() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
        },
    )?;

    Ok(Some(observer))
}

/// Clears the subtitle and schedules it to be typed back; returns its length.
fn start_typing(document: &Document, config: &SiteConfig) -> Result<usize, SetupError> {
    let Some(subtitle) = document.query_selector(SUBTITLE_SELECTOR)? else {
        return Ok(0);
    };

    let text = subtitle.text_content().unwrap_or_default();
    subtitle.set_text_content(Some(""));

    let mut typing = TypingEffect::new(&text);
    let length = typing.len();
    if typing.is_complete() {
        return Ok(0);
    }

    let interval_ms = config.typing_interval_ms;
    Timeout::new(config.typing_delay_ms, move || {
        dom::repeat_every(interval_ms, move || {
            if typing.advance().is_some() {
                subtitle.set_text_content(Some(typing.typed()));
            }
            if typing.is_complete() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    })
    .forget();

    Ok(length)
}
