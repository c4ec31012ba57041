//! Host capabilities the page behaviors are written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never reach for `window`/`document` globals. They receive a
//! [`PageHost`] and only touch the page through it, which lets the browser
//! build plug in `web-sys` while tests run against an in-memory fake DOM.
//!
//! Handler registration is explicit: a behavior asks the host to call it back
//! on a click, submit, scroll, or intersection change. Handlers run to
//! completion on the single-threaded event loop.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::PageError;

/// A page element as seen by the behaviors.
///
/// Mutators are infallible from the caller's point of view; host
/// implementations log failures instead of surfacing them.
pub trait DomElement: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Force `class` present or absent.
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Suppress (`false`) or restore (`true`) rendering via inline `display`.
    fn set_displayed(&self, displayed: bool);
    fn is_displayed(&self) -> bool;

    fn matches(&self, selector: &str) -> bool;
    /// First descendant matching `selector`.
    fn query(&self, selector: &str) -> Option<Self>;

    /// Current value of the form control named `name` inside this element.
    fn field_value(&self, name: &str) -> Option<String>;
    /// Restore every control of this form to its initial value.
    fn reset_form(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

/// Event delivered to a registered handler.
///
/// `prevent_default` is recorded here and applied by the host once the
/// handler returns.
#[derive(Debug)]
pub struct PageEvent<E> {
    target: Option<E>,
    default_prevented: Cell<bool>,
}

impl<E> PageEvent<E> {
    pub fn new(target: Option<E>) -> Self {
        Self { target, default_prevented: Cell::new(false) }
    }

    /// Element the event was dispatched to (not necessarily the listener's).
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// What an intersection callback wants done with the entry's target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverAction {
    Keep,
    Unobserve,
}

pub type EventHandler<E> = Box<dyn Fn(&PageEvent<E>)>;
pub type ScrollHandler = Box<dyn Fn(f64)>;
pub type IntersectionHandler<E> = Rc<dyn Fn(&E, bool) -> ObserverAction>;

/// Document and window capabilities.
pub trait PageHost: 'static {
    type Element: DomElement;

    /// First element in the document matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Element carrying the theme class (`<body>`).
    fn theme_root(&self) -> Option<Self::Element>;

    fn read_preference(&self, key: &str) -> Result<Option<String>, PageError>;
    fn write_preference(&self, key: &str, value: &str) -> Result<(), PageError>;

    /// Calendar year on the viewer's local clock.
    fn current_year(&self) -> i32;

    /// Smoothly scroll the viewport back to offset 0.
    fn scroll_to_top(&self);

    /// Run `update` as one animated view transition when supported,
    /// otherwise immediately.
    fn with_view_transition(&self, update: Box<dyn FnOnce()>);

    fn listen(&self, target: &Self::Element, kind: EventKind, handler: EventHandler<Self::Element>);
    /// Call `handler` with the vertical scroll offset on every window scroll.
    fn listen_scroll(&self, handler: ScrollHandler);

    /// Observe `targets` for visibility at `threshold`.
    ///
    /// Returns `false` without registering anything when the host has no
    /// intersection observation capability.
    fn observe_intersections(
        &self,
        targets: &[Self::Element],
        threshold: f64,
        handler: IntersectionHandler<Self::Element>,
    ) -> bool;
}
