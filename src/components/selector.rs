use crate::query::QueryState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

/// A controlled single-value selector built from query data.
///
/// The selection is owned by the page; the selector only reports changes
/// through the `on_change` callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<V> {
    options: Vec<SelectOption<V>>,
    selected: Option<V>,
    placeholder: String,
}

impl<V: Clone + PartialEq> Selector<V> {
    pub fn new(options: Vec<SelectOption<V>>, placeholder: impl Into<String>) -> Self {
        Self {
            options,
            selected: None,
            placeholder: placeholder.into(),
        }
    }

    pub fn from_items<T>(
        items: &[T],
        value: impl Fn(&T) -> V,
        label: impl Fn(&T) -> String,
        placeholder: impl Into<String>,
    ) -> Self {
        let options = items
            .iter()
            .map(|item| SelectOption {
                value: value(item),
                label: label(item),
            })
            .collect();
        Self::new(options, placeholder)
    }

    /// Options from a query. Until data arrives the selector is empty and the
    /// placeholder reflects the state.
    pub fn from_state<T>(
        state: &QueryState<Vec<T>>,
        value: impl Fn(&T) -> V,
        label: impl Fn(&T) -> String,
        placeholder: impl Into<String>,
    ) -> Self {
        match state {
            QueryState::Success(items) => Self::from_items(items, value, label, placeholder),
            QueryState::Loading => Self::new(Vec::new(), "Loading..."),
            QueryState::Disabled => Self::new(Vec::new(), placeholder),
            QueryState::Error(_) => Self::new(Vec::new(), "Failed to load options"),
        }
    }

    /// Starts with `selected` when it is one of the options.
    pub fn with_selected(mut self, selected: Option<V>) -> Self {
        self.selected = selected.filter(|v| self.contains(v));
        self
    }

    pub fn contains(&self, value: &V) -> bool {
        self.options.iter().any(|o| &o.value == value)
    }

    /// Selects `value`. The callback fires only for a known option that differs
    /// from the current selection.
    pub fn select<F: FnOnce(&V)>(&mut self, value: V, on_change: F) -> bool {
        if !self.contains(&value) || self.selected.as_ref() == Some(&value) {
            return false;
        }
        on_change(&value);
        self.selected = Some(value);
        true
    }

    /// Clears the selection, returning the previous value.
    pub fn clear(&mut self) -> Option<V> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&V> {
        self.selected.as_ref()
    }

    pub fn selected_label(&self) -> Option<&str> {
        let selected = self.selected.as_ref()?;
        self.options
            .iter()
            .find(|o| &o.value == selected)
            .map(|o| o.label.as_str())
    }

    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
