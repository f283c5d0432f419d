use web_sys::{Document, Element, HtmlImageElement};

use super::dom;
use super::observe::OnceObserver;
use crate::config::{is_low_core_count, SiteConfig};
use crate::error::SetupError;
use crate::trigger::ObserverOptions;

const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";
const LAZY_CLASS: &str = "lazy";
const REDUCE_MOTION_CLASS: &str = "reduce-motion";
const LOW_PERFORMANCE_CLASS: &str = "low-performance";

/// Deferred images, preload hints and one-time environment flags.
pub struct PerformanceOptimizer {
    lazy_images: Option<OnceObserver>,
    reduced_motion: bool,
    low_performance: bool,
}

impl PerformanceOptimizer {
    pub fn new(document: &Document, config: &SiteConfig) -> Result<Self, SetupError> {
        let lazy_images = watch_lazy_images(document)?;
        inject_preload_hints(document, config)?;

        let root = dom::root_element(document)?;
        let reduced_motion = dom::matches_media("(prefers-reduced-motion: reduce)");
        if reduced_motion {
            dom::add_class(&root, REDUCE_MOTION_CLASS);
        }

        let low_performance = is_low_core_count(dom::window()?.navigator().hardware_concurrency());
        if low_performance {
            dom::add_class(&root, LOW_PERFORMANCE_CLASS);
        }

        log::debug!("environment: reduced_motion={reduced_motion} low_performance={low_performance}");
        Ok(Self {
            lazy_images,
            reduced_motion,
            low_performance,
        })
    }

    pub fn images_loaded(&self) -> usize {
        self.lazy_images.as_ref().map_or(0, OnceObserver::fired)
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn low_performance(&self) -> bool {
        self.low_performance
    }
}

fn load_image(image: &HtmlImageElement) {
    if let Some(source) = image.get_attribute("data-src") {
        image.set_src(&source);
    }
    dom::remove_class(image, LAZY_CLASS);
}

fn watch_lazy_images(document: &Document) -> Result<Option<OnceObserver>, SetupError> {
    let images = dom::query_all::<HtmlImageElement>(document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(None);
    }

    let targets = images
        .iter()
        .map(|image| Element::clone(image))
        .collect::<Vec<_>>();
    match OnceObserver::watch(targets, ObserverOptions::ANY_VISIBILITY, move |trigger, _| {
        load_image(&images[trigger.target]);
    }) {
        Ok(observer) => Ok(Some(observer)),
        Err(error) => {
            log::warn!("visibility observer unavailable, loading images eagerly: {error}");
            for image in dom::query_all::<HtmlImageElement>(document, LAZY_IMAGE_SELECTOR)? {
                load_image(&image);
            }
            Ok(None)
        }
    }
}

fn inject_preload_hints(document: &Document, config: &SiteConfig) -> Result<(), SetupError> {
    let head = document
        .head()
        .ok_or(SetupError::MissingApi("document.head"))?;

    for hint in config.preload_hints() {
        let link = document.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("href", &hint.href)?;
        link.set_attribute("as", hint.kind.as_str())?;
        link.set_attribute("crossorigin", "anonymous")?;
        head.append_child(&link)?;
    }

    Ok(())
}
