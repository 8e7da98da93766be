//! Small DOM helpers shared by the controllers.

use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, Node, NodeList};

pub(crate) fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn event_node(event: &Event) -> Option<Node> {
    event.target().and_then(|target| target.dyn_into::<Node>().ok())
}

/// Whether `node` sits inside any of `roots`.
pub(crate) fn inside(node: Option<&Node>, roots: &[&Element]) -> bool {
    node.is_some_and(|node| roots.iter().any(|root| root.contains(Some(node))))
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        warn!(class, error = ?err, "failed to toggle class");
    }
}

pub(crate) fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        warn!(attribute = name, error = ?err, "failed to set attribute");
    }
}

#[cfg(test)]
mod tests {
    use gloo::utils::document;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn div() -> Element {
        document()
            .create_element("div")
            .expect("create element")
    }

    #[wasm_bindgen_test]
    fn set_class_toggles_the_class() {
        let element = div();
        set_class(&element, "is-open", true);
        assert!(element.class_list().contains("is-open"));
        set_class(&element, "is-open", false);
        assert!(!element.class_list().contains("is-open"));
    }

    #[wasm_bindgen_test]
    fn rejected_writes_are_logged_not_raised() {
        let element = div();
        set_class(&element, "", true);
        set_attribute(&element, "bad name", "x");
        assert_eq!(element.class_list().length(), 0);
        assert!(element.get_attribute("bad name").is_none());

        set_attribute(&element, "aria-expanded", "true");
        assert_eq!(element.get_attribute("aria-expanded").as_deref(), Some("true"));
    }
}
