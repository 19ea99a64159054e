use crate::logger::Logger;
use roomwatch_core::{FilterOutcome, Filterable, apply_filter};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

/// Element taking part in a list filter.
pub struct FilterTarget(HtmlElement);

impl Filterable for FilterTarget {
    fn rendered_text(&self) -> Option<String> {
        Some(self.0.inner_text())
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "" } else { "none" };
        let _ = self.0.style().set_property("display", display);
    }
}

/// HTML elements currently carrying `class_name`. Non-HTML elements are skipped.
pub fn elements_with_class(class_name: &str) -> Vec<FilterTarget> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        Logger::warn("no document, nothing to filter");
        return Vec::new();
    };

    let collection = document.get_elements_by_class_name(class_name);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(FilterTarget)
        .collect()
}

/// Shows the elements of `class_name` whose text contains `query`, hides the rest.
pub fn filter_by_query(query: Option<&str>, class_name: &str) -> FilterOutcome {
    let outcome = apply_filter(query, elements_with_class(class_name));
    Logger::debug(&format!(
        "filter .{}: {} shown, {} hidden",
        class_name, outcome.shown, outcome.hidden
    ));
    outcome
}

pub fn filter_input(input: &HtmlInputElement, class_name: &str) -> FilterOutcome {
    let query = input.value();
    filter_by_query(Some(query.as_str()), class_name)
}
