//! `web-sys` implementation of the page host.
//!
//! Browser failures on individual DOM calls are logged at `warn` and
//! otherwise ignored: a broken class toggle must not take the rest of the
//! page down with it. Listener closures are leaked on purpose since they
//! live exactly as long as the page.

use js_sys::{Array, Date, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
    Window,
};

use crate::dom::{
    DomElement, EventHandler, EventKind, IntersectionHandler, ObserverAction, PageEvent, PageHost, ScrollHandler,
};
use crate::error::PageError;

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

fn storage_error(err: &JsValue) -> PageError {
    PageError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// The live browser page.
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Capture the global window and document, if running in a browser.
    pub fn from_global() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn storage(&self) -> Result<Storage, PageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PageError::Storage("localStorage not available".into())),
            Err(err) => Err(storage_error(&err)),
        }
    }

    fn has_global(&self, name: &str) -> bool {
        Reflect::get(self.window.as_ref(), &JsValue::from_str(name)).is_ok_and(|value| value.is_function())
    }
}

impl PageHost for WebPage {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("bad selector {selector:?}: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("bad selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn theme_root(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn read_preference(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage()?.get_item(key).map_err(|err| storage_error(&err))
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?.set_item(key, value).map_err(|err| storage_error(&err))
    }

    fn current_year(&self) -> i32 {
        i32::try_from(Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn with_view_transition(&self, update: Box<dyn FnOnce()>) {
        let document: &JsValue = self.document.as_ref();
        let start = Reflect::get(document, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());
        let Some(start) = start else {
            update();
            return;
        };
        if let Err(err) = start.call1(document, &Closure::once_into_js(update)) {
            log::warn!("startViewTransition failed: {err:?}");
        }
    }

    fn listen(&self, target: &Element, kind: EventKind, handler: EventHandler<Element>) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
            let page_event = PageEvent::new(target);
            handler(&page_event);
            if page_event.is_default_prevented() {
                event.prevent_default();
            }
        });
        let target: &EventTarget = target.as_ref();
        warn_on_err(
            kind.as_str(),
            target.add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref()),
        );
        callback.forget();
    }

    fn listen_scroll(&self, handler: ScrollHandler) {
        let window = self.window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            handler(window.scroll_y().unwrap_or(0.0));
        });
        warn_on_err(
            "scroll",
            self.window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
        );
        callback.forget();
    }

    fn observe_intersections(&self, targets: &[Element], threshold: f64, handler: IntersectionHandler<Element>) -> bool {
        if !self.has_global("IntersectionObserver") {
            return false;
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if handler(&target, entry.is_intersecting()) == ObserverAction::Unobserve {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver construction failed: {err:?}");
                return false;
            }
        };
        callback.forget();

        for target in targets {
            observer.observe(target);
        }
        true
    }
}

impl DomElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        warn_on_err("classList.add", self.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        warn_on_err("classList.remove", self.class_list().remove_1(class));
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("classList.toggle failed: {err:?}");
                self.has_class(class)
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        warn_on_err("setAttribute", Element::set_attribute(self, name, value));
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_displayed(&self, displayed: bool) {
        let Some(el) = self.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        if displayed {
            if let Err(err) = style.remove_property("display") {
                log::warn!("style.removeProperty failed: {err:?}");
            }
        } else {
            warn_on_err("style.setProperty", style.set_property("display", "none"));
        }
    }

    fn is_displayed(&self) -> bool {
        self.dyn_ref::<HtmlElement>()
            .and_then(|el| el.style().get_property_value("display").ok())
            .is_none_or(|display| display != "none")
    }

    fn matches(&self, selector: &str) -> bool {
        Element::matches(self, selector).unwrap_or(false)
    }

    fn query(&self, selector: &str) -> Option<Self> {
        match self.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("bad selector {selector:?}: {err:?}");
                None
            }
        }
    }

    fn field_value(&self, name: &str) -> Option<String> {
        let control = DomElement::query(self, &format!("[name=\"{name}\"]"))?;
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        None
    }

    fn reset_form(&self) {
        if let Some(form) = self.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}
