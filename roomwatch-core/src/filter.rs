//! Case-insensitive substring filtering over a set of renderable items.

/// An item whose visibility follows a text query.
pub trait Filterable {
    /// Text as rendered to the user. `None` is treated as empty.
    fn rendered_text(&self) -> Option<String>;

    fn set_visible(&self, visible: bool);
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn rendered_text(&self) -> Option<String> {
        (**self).rendered_text()
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub shown: usize,
    pub hidden: usize,
}

/// Whether `text` contains `query`, ignoring case.
pub fn matches(query: &str, text: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Shows every item whose text contains `query` and hides the rest.
///
/// A missing query is the empty query, which matches everything.
pub fn apply_filter<I>(query: Option<&str>, items: I) -> FilterOutcome
where
    I: IntoIterator,
    I::Item: Filterable,
{
    let query = query.unwrap_or_default();
    let mut outcome = FilterOutcome::default();

    for item in items {
        let visible = matches(query, &item.rendered_text().unwrap_or_default());
        item.set_visible(visible);

        if visible {
            outcome.shown += 1;
        } else {
            outcome.hidden += 1;
        }
    }

    outcome
}
