use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SetupError;
use crate::trigger::{ObserverOptions, OneShotLedger, Trigger};

type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl VisibilityObserver {
    pub fn new<F>(options: ObserverOptions, mut on_batch: F) -> Result<Self, SetupError>
    where
        F: FnMut(&[(Element, bool)], &IntersectionObserver) + 'static,
    {
        let callback = BatchCallback::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()))
                .collect::<Vec<_>>();
            on_batch(&batch, &observer);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches a fixed list of targets and fires `on_trigger` the first time each one
/// becomes visible, unobserving it right away.
pub struct OnceObserver {
    _inner: VisibilityObserver,
    ledger: Rc<RefCell<OneShotLedger>>,
}

impl OnceObserver {
    pub fn watch<F>(
        targets: Vec<Element>,
        options: ObserverOptions,
        mut on_trigger: F,
    ) -> Result<Self, SetupError>
    where
        F: FnMut(Trigger, &Element) + 'static,
    {
        let ledger = Rc::new(RefCell::new(OneShotLedger::new(targets.len())));
        let watched = targets.clone();
        let batch_ledger = Rc::clone(&ledger);

        let inner = VisibilityObserver::new(options, move |batch, observer| {
            let entries = batch.iter().filter_map(|(element, intersecting)| {
                watched
                    .iter()
                    .position(|target| target == element)
                    .map(|index| (index, *intersecting))
            });
            let triggers = batch_ledger.borrow_mut().admit(entries);

            for trigger in triggers {
                let element = &watched[trigger.target];
                observer.unobserve(element);
                on_trigger(trigger, element);
            }

            if batch_ledger.borrow().is_exhausted() {
                observer.disconnect();
            }
        })?;

        for target in &targets {
            inner.observe(target);
        }

        Ok(Self {
            _inner: inner,
            ledger,
        })
    }

    pub fn fired(&self) -> usize {
        self.ledger.borrow().fired_count()
    }
}
