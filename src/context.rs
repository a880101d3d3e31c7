//! Page context shared by every controller.
//!
//! Holds the window, document and configuration, plus the small DOM helpers
//! the controllers use to look elements up and restyle them. Lookups never
//! fail loudly: a missing element is `None` and the caller decides whether
//! that disables it.

use std::rc::Rc;

use showreel_core::config::CONFIG_ELEMENT_ID;
use showreel_core::{ShowreelConfig, ShowreelError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Window, document and configuration for the running page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<ShowreelConfig>,
}

impl PageContext {
    pub fn new(window: Window, document: Document, config: ShowreelConfig) -> Self {
        Self {
            window,
            document,
            config: Rc::new(config),
        }
    }

    /// First element matching `selector`.
    pub fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "invalid selector");
                None
            }
        }
    }

    /// First element matching `selector`, cast to `T`.
    pub fn query_as<T: JsCast>(&self, selector: &str) -> Option<T> {
        self.query(selector).and_then(|el| el.dyn_into::<T>().ok())
    }

    /// Element with id `id`, cast to `T`.
    pub fn by_id<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<T>().ok())
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                tracing::warn!(selector, error = ?e, "invalid selector");
                Vec::new()
            }
        }
    }

    /// Every element matching `selector` that is an `HtmlElement`.
    pub fn query_all_html(&self, selector: &str) -> Vec<HtmlElement> {
        self.query_all(selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    /// Viewport width and height in CSS pixels.
    pub fn viewport(&self) -> (f64, f64) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (width, height)
    }
}

/// Text of the optional configuration block.
pub fn read_config_block(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

/// Convert a rejected DOM call into a [`ShowreelError`].
pub fn dom_err(err: JsValue) -> ShowreelError {
    ShowreelError::Dom(format!("{:?}", err))
}

/// Collect a `NodeList` into its element members.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First descendant of `root` matching `selector`, cast to `T`.
pub fn query_within<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Set or clear an inline style property. An empty value removes it.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(e) = result {
        tracing::debug!(property, error = ?e, "style rejected");
    }
}

/// Add or remove a class.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        tracing::debug!(class, error = ?e, "class change rejected");
    }
}
