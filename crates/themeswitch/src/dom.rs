//! Minimal in-memory page model.
//!
//! The controller only ever touches a handful of things on a page: marker
//! classes on the root element, a toggle control found by id (with a label
//! child), and `<meta>` entries in the head. [`Document`] models exactly
//! that, so the controller can be driven and inspected without a browser.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// A document shared between the controller, its consumers and the caller.
pub type SharedDocument = Rc<RefCell<Document>>;

/// A page element: classes, attributes, inline style, text and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Adds a class, returning the element for chaining.
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets the text content, returning the element for chaining.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child, returning the element for chaining.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Adds `class` when `on` is true, removes it otherwise.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an inline style property. An empty value removes it.
    pub fn set_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.style.remove(property);
        } else {
            self.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Finds the first descendant carrying `class`, depth first.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| {
            if child.has_class(class) {
                Some(child)
            } else {
                child.find_by_class(class)
            }
        })
    }

    /// Mutable variant of [`Element::find_by_class`].
    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_by_class_mut(class) {
                return Some(found);
            }
        }
        None
    }
}

/// The page: a root element, elements addressable by id, and head metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
    elements: BTreeMap<String, Element>,
    meta: BTreeMap<String, String>,
}

impl Document {
    /// Creates an empty document with an `html` root.
    pub fn new() -> Self {
        Self {
            root: Element::new("html"),
            elements: BTreeMap::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Wraps the document for sharing.
    pub fn shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Registers `element` under `id`, replacing any previous element.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) -> Option<Element> {
        self.elements.insert(id.into(), element)
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Returns the `content` of `<meta name="...">`, if the tag exists.
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    /// Creates or updates a `<meta>` tag.
    pub fn set_meta(&mut self, name: &str, content: impl Into<String>) {
        self.meta.insert(name.to_string(), content.into());
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_helpers() {
        let mut el = Element::new("div").with_class("a");
        assert!(el.has_class("a"));

        el.set_class("b", true);
        el.set_class("a", false);
        assert_eq!(el.classes().collect::<Vec<_>>(), vec!["b"]);

        // Removing twice is harmless
        el.remove_class("a");
        assert!(!el.has_class("a"));
    }

    #[test]
    fn test_style_empty_value_removes() {
        let mut el = Element::new("button");
        el.set_style("transform", "rotate(360deg)");
        assert_eq!(el.style("transform"), Some("rotate(360deg)"));
        el.set_style("transform", "");
        assert_eq!(el.style("transform"), None);
    }

    #[test]
    fn test_find_by_class_is_depth_first() {
        let mut el = Element::new("button")
            .with_child(Element::new("span").with_child(Element::new("em").with_class("label")))
            .with_child(Element::new("span").with_class("label").with_text("second"));

        assert_eq!(el.find_by_class("label").unwrap().tag(), "em");
        el.find_by_class_mut("label").unwrap().set_text("first");
        assert_eq!(el.find_by_class("label").unwrap().text(), "first");
        assert!(el.find_by_class("missing").is_none());
    }

    #[test]
    fn test_document_elements_and_meta() {
        let mut doc = Document::new();
        assert_eq!(doc.root().tag(), "html");
        assert!(doc.get_element_by_id("x").is_none());

        doc.insert("x", Element::new("button"));
        doc.get_element_by_id_mut("x")
            .unwrap()
            .set_attribute("aria-pressed", "true");
        assert_eq!(
            doc.get_element_by_id("x").unwrap().attribute("aria-pressed"),
            Some("true")
        );
        assert!(doc.remove("x").is_some());

        assert_eq!(doc.meta("theme-color"), None);
        doc.set_meta("theme-color", "#fff");
        assert_eq!(doc.meta("theme-color"), Some("#fff"));
    }
}
