//! In-memory page used by unit tests.
//!
//! An arena of nodes with just enough selector support for the page contract
//! (`tag`, `#id`, `.class`, `[attr]`, `[attr="value"]`, compounded without
//! combinators). Events bubble from the target to the root so delegated
//! listeners behave as in a browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::dom::{
    DomElement, EventHandler, EventKind, IntersectionHandler, ObserverAction, PageEvent, PageHost, ScrollHandler,
};
use crate::error::PageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

const HTML: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    default_value: String,
    display_none: bool,
}

#[derive(Debug)]
struct Dom {
    nodes: Vec<Node>,
}

impl Dom {
    fn new() -> Self {
        let html = Node { tag: "html".into(), children: vec![BODY], ..Node::default() };
        let body = Node { tag: "body".into(), parent: Some(HTML), ..Node::default() };
        Self { nodes: vec![html, body] }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn append(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node { tag: tag.to_ascii_lowercase(), parent: Some(parent), ..Node::default() };
        for (name, value) in attrs {
            match *name {
                "class" => node.classes = value.split_whitespace().map(str::to_owned).collect(),
                "value" => {
                    node.value = (*value).to_owned();
                    node.default_value = (*value).to_owned();
                }
                _ => {
                    node.attrs.insert((*name).to_owned(), (*value).to_owned());
                }
            }
        }
        self.nodes.push(node);
        self.node_mut(parent).children.push(id);
        id
    }

    /// Descendants of `root` in document order, excluding `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    /// `id` followed by each ancestor up to the root.
    fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = vec![id];
        let mut cur = id;
        while let Some(parent) = self.node(cur).parent {
            out.push(parent);
            cur = parent;
        }
        out
    }

    fn matches(&self, id: NodeId, selector: &Compound) -> bool {
        let node = self.node(id);
        if selector.tag.as_ref().is_some_and(|tag| !tag.eq_ignore_ascii_case(&node.tag)) {
            return false;
        }
        if selector.id.as_ref().is_some_and(|want| node.attrs.get("id") != Some(want)) {
            return false;
        }
        if !selector.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        selector.attrs.iter().all(|(name, want)| match (self.attribute(id, name), want) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(have), Some(want)) => &have == want,
        })
    }

    fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let node = self.node(id);
        match name {
            "class" if !node.classes.is_empty() => Some(node.classes.join(" ")),
            "class" => None,
            _ => node.attrs.get(name).cloned(),
        }
    }

    fn query_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let compound = Compound::parse(selector);
        self.descendants(root).into_iter().filter(|id| self.matches(*id, &compound)).collect()
    }
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    fn parse(selector: &str) -> Self {
        let chars: Vec<char> = selector.trim().chars().collect();
        let mut out = Self::default();
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '#' => {
                    i += 1;
                    out.id = Some(read_ident(&chars, &mut i));
                }
                '.' => {
                    i += 1;
                    out.classes.push(read_ident(&chars, &mut i));
                }
                '[' => {
                    let start = i + 1;
                    let end = chars[start..].iter().position(|c| *c == ']').map_or(chars.len(), |p| start + p);
                    let inner: String = chars[start..end].iter().collect();
                    out.attrs.push(match inner.split_once('=') {
                        Some((name, value)) => {
                            (name.trim().to_owned(), Some(value.trim().trim_matches(['"', '\'']).to_owned()))
                        }
                        None => (inner.trim().to_owned(), None),
                    });
                    i = end + 1;
                }
                _ => {
                    let tag = read_ident(&chars, &mut i);
                    if tag.is_empty() {
                        i += 1;
                    } else {
                        out.tag = Some(tag);
                    }
                }
            }
        }
        out
    }
}

fn read_ident(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && (chars[*i].is_alphanumeric() || chars[*i] == '-' || chars[*i] == '_') {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

/// Handle to one node of a [`FakePage`].
#[derive(Clone, Debug)]
pub struct FakeElement {
    dom: Rc<RefCell<Dom>>,
    id: NodeId,
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dom, &other.dom) && self.id == other.id
    }
}

impl FakeElement {
    /// Append a child element and return it.
    pub fn append(&self, tag: &str, attrs: &[(&str, &str)]) -> FakeElement {
        let id = self.dom.borrow_mut().append(self.id, tag, attrs);
        FakeElement { dom: Rc::clone(&self.dom), id }
    }

    /// Type into a form control, as a user would.
    pub fn set_value(&self, value: &str) {
        self.dom.borrow_mut().node_mut(self.id).value = value.to_owned();
    }

    pub fn value(&self) -> String {
        self.dom.borrow().node(self.id).value.clone()
    }
}

impl DomElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.dom.borrow().node(self.id).classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.node_mut(self.id).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.dom.borrow_mut().node_mut(self.id).classes.retain(|c| c != class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.dom.borrow().attribute(self.id, name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.dom.borrow_mut().node_mut(self.id).attrs.insert(name.to_owned(), value.to_owned());
    }

    fn text(&self) -> String {
        self.dom.borrow().node(self.id).text.clone()
    }

    fn set_text(&self, text: &str) {
        self.dom.borrow_mut().node_mut(self.id).text = text.to_owned();
    }

    fn set_displayed(&self, displayed: bool) {
        self.dom.borrow_mut().node_mut(self.id).display_none = !displayed;
    }

    fn is_displayed(&self) -> bool {
        !self.dom.borrow().node(self.id).display_none
    }

    fn matches(&self, selector: &str) -> bool {
        self.dom.borrow().matches(self.id, &Compound::parse(selector))
    }

    fn query(&self, selector: &str) -> Option<Self> {
        let id = self.dom.borrow().query_all(self.id, selector).into_iter().next()?;
        Some(FakeElement { dom: Rc::clone(&self.dom), id })
    }

    fn field_value(&self, name: &str) -> Option<String> {
        let control = self.query(&format!("[name=\"{name}\"]"))?;
        Some(control.value())
    }

    fn reset_form(&self) {
        let mut dom = self.dom.borrow_mut();
        for id in dom.descendants(self.id) {
            let node = dom.node_mut(id);
            node.value = node.default_value.clone();
        }
    }
}

struct Listener {
    node: NodeId,
    kind: EventKind,
    handler: Rc<dyn Fn(&PageEvent<FakeElement>)>,
}

struct Observation {
    id: usize,
    node: NodeId,
    threshold: f64,
    handler: IntersectionHandler<FakeElement>,
}

/// Fake document + window implementing [`PageHost`].
pub struct FakePage {
    dom: Rc<RefCell<Dom>>,
    storage: RefCell<HashMap<String, String>>,
    storage_broken: Cell<bool>,
    body_parsed: Cell<bool>,
    year: Cell<i32>,
    scroll_offset: Cell<f64>,
    smooth_scrolls: Cell<usize>,
    view_transitions: Cell<bool>,
    transitions_run: Cell<usize>,
    observers_supported: Cell<bool>,
    next_observation: Cell<usize>,
    listeners: RefCell<Vec<Listener>>,
    scroll_listeners: RefCell<Vec<Rc<dyn Fn(f64)>>>,
    observations: RefCell<Vec<Observation>>,
}

impl FakePage {
    /// Empty `<html><body></body></html>` with working storage and an
    /// intersection observer, but no view transitions.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            dom: Rc::new(RefCell::new(Dom::new())),
            storage: RefCell::new(HashMap::new()),
            storage_broken: Cell::new(false),
            body_parsed: Cell::new(true),
            year: Cell::new(2024),
            scroll_offset: Cell::new(0.0),
            smooth_scrolls: Cell::new(0),
            view_transitions: Cell::new(false),
            transitions_run: Cell::new(0),
            observers_supported: Cell::new(true),
            next_observation: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            scroll_listeners: RefCell::new(Vec::new()),
            observations: RefCell::new(Vec::new()),
        })
    }

    pub fn body(&self) -> FakeElement {
        FakeElement { dom: Rc::clone(&self.dom), id: BODY }
    }

    // ---- storage ----

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn set_stored(&self, key: &str, value: &str) {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    /// Make every storage access fail, as in a sandboxed or private context.
    pub fn break_storage(&self) {
        self.storage_broken.set(true);
    }

    // ---- environment ----

    pub fn set_year(&self, year: i32) {
        self.year.set(year);
    }

    pub fn enable_view_transitions(&self) {
        self.view_transitions.set(true);
    }

    pub fn transitions_run(&self) -> usize {
        self.transitions_run.get()
    }

    /// Simulate a script running from `<head>`, before `<body>` is parsed.
    pub fn set_body_parsed(&self, parsed: bool) {
        self.body_parsed.set(parsed);
    }

    pub fn disable_observers(&self) {
        self.observers_supported.set(false);
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    pub fn smooth_scrolls(&self) -> usize {
        self.smooth_scrolls.get()
    }

    // ---- event dispatch ----

    /// Dispatch `kind` at `target`, bubbling to the root.
    pub fn dispatch(&self, target: &FakeElement, kind: EventKind) -> PageEvent<FakeElement> {
        let event = PageEvent::new(Some(target.clone()));
        let path = self.dom.borrow().path_to_root(target.id);
        for node in path {
            let handlers: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .filter(|l| l.node == node && l.kind == kind)
                .map(|l| Rc::clone(&l.handler))
                .collect();
            for handler in handlers {
                handler(&event);
            }
        }
        event
    }

    pub fn click(&self, target: &FakeElement) -> PageEvent<FakeElement> {
        self.dispatch(target, EventKind::Click)
    }

    pub fn submit(&self, form: &FakeElement) -> PageEvent<FakeElement> {
        self.dispatch(form, EventKind::Submit)
    }

    /// Move the viewport and fire window scroll listeners.
    pub fn scroll_to(&self, offset: f64) {
        self.scroll_offset.set(offset);
        let handlers: Vec<_> = self.scroll_listeners.borrow().iter().map(Rc::clone).collect();
        for handler in handlers {
            handler(offset);
        }
    }

    /// Report that `ratio` of `target` is now inside the viewport.
    pub fn intersect(&self, target: &FakeElement, ratio: f64) {
        let active: Vec<_> = self
            .observations
            .borrow()
            .iter()
            .filter(|o| o.node == target.id)
            .map(|o| (o.id, o.threshold, Rc::clone(&o.handler)))
            .collect();
        for (id, threshold, handler) in active {
            let intersecting = ratio > 0.0 && ratio >= threshold;
            if handler(target, intersecting) == ObserverAction::Unobserve {
                self.observations.borrow_mut().retain(|o| o.id != id);
            }
        }
    }

    pub fn is_observed(&self, target: &FakeElement) -> bool {
        self.observations.borrow().iter().any(|o| o.node == target.id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len() + self.scroll_listeners.borrow().len()
    }
}

impl PageHost for FakePage {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let ids = self.dom.borrow().query_all(HTML, selector);
        ids.into_iter().map(|id| FakeElement { dom: Rc::clone(&self.dom), id }).collect()
    }

    fn theme_root(&self) -> Option<FakeElement> {
        self.body_parsed.get().then(|| self.body())
    }

    fn read_preference(&self, key: &str) -> Result<Option<String>, PageError> {
        if self.storage_broken.get() {
            return Err(PageError::Storage("access denied".into()));
        }
        Ok(self.stored(key))
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.storage_broken.get() {
            return Err(PageError::Storage("quota exceeded".into()));
        }
        self.set_stored(key, value);
        Ok(())
    }

    fn current_year(&self) -> i32 {
        self.year.get()
    }

    fn scroll_to_top(&self) {
        self.smooth_scrolls.set(self.smooth_scrolls.get() + 1);
        self.scroll_to(0.0);
    }

    fn with_view_transition(&self, update: Box<dyn FnOnce()>) {
        if self.view_transitions.get() {
            self.transitions_run.set(self.transitions_run.get() + 1);
        }
        update();
    }

    fn listen(&self, target: &FakeElement, kind: EventKind, handler: EventHandler<FakeElement>) {
        self.listeners.borrow_mut().push(Listener { node: target.id, kind, handler: Rc::from(handler) });
    }

    fn listen_scroll(&self, handler: ScrollHandler) {
        self.scroll_listeners.borrow_mut().push(Rc::from(handler));
    }

    fn observe_intersections(
        &self,
        targets: &[FakeElement],
        threshold: f64,
        handler: IntersectionHandler<FakeElement>,
    ) -> bool {
        if !self.observers_supported.get() {
            return false;
        }
        let mut observations = self.observations.borrow_mut();
        for target in targets {
            let id = self.next_observation.get();
            self.next_observation.set(id + 1);
            observations.push(Observation { id, node: target.id, threshold, handler: Rc::clone(&handler) });
        }
        true
    }
}
