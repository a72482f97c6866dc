use std::fmt::Display;

/// Search text, one optional filter value and the page, as owned by a list page.
///
/// Changing the search or the filter returns to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListFilters<F> {
    filter_param: &'static str,
    search: String,
    filter: Option<F>,
    page: u32,
}

impl<F: Clone + PartialEq> ListFilters<F> {
    /// `filter_param` is the query parameter name for the filter value.
    pub fn new(filter_param: &'static str) -> Self {
        Self {
            filter_param,
            search: String::new(),
            filter: None,
            page: 1,
        }
    }

    /// Returns whether anything changed.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into().trim().to_string();
        if search == self.search {
            return false;
        }
        self.search = search;
        self.page = 1;
        true
    }

    pub fn set_filter(&mut self, filter: Option<F>) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.filter = None;
        self.page = 1;
    }

    pub fn search(&self) -> Option<&str> {
        (!self.search.is_empty()).then_some(self.search.as_str())
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_filtered(&self) -> bool {
        self.search().is_some() || self.filter.is_some()
    }
}

impl<F: Clone + PartialEq + Display> ListFilters<F> {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", self.page.to_string())];
        if let Some(search) = self.search() {
            query.push(("search", search.to_string()));
        }
        if let Some(filter) = &self.filter {
            query.push((self.filter_param, filter.to_string()));
        }
        query
    }
}
