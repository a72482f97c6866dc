use smartedu_core::PaginationMeta;

/// One rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page { number: u32, current: bool },
    Ellipsis,
}

/// Pagination controls driven by server-provided metadata.
///
/// Page changes go through the `on_page_change` callback, which is only
/// invoked for pages within `[1, total_pages]` that the `has_next` /
/// `has_previous` flags allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    meta: PaginationMeta,
}

impl Pagination {
    pub fn new(meta: PaginationMeta) -> Self {
        Self { meta }
    }

    pub fn meta(&self) -> &PaginationMeta {
        &self.meta
    }

    pub fn current(&self) -> u32 {
        self.meta.page
    }

    pub fn can_go_to(&self, page: u32) -> bool {
        let current = self.meta.page;
        if page < 1 || page > self.meta.total_pages || page == current {
            return false;
        }
        if page > current {
            self.meta.has_next
        } else {
            self.meta.has_previous
        }
    }

    /// Requests `page`. Returns whether the callback fired.
    pub fn go_to<F: FnOnce(u32)>(&self, page: u32, on_page_change: F) -> bool {
        if !self.can_go_to(page) {
            return false;
        }
        on_page_change(page);
        true
    }

    pub fn next<F: FnOnce(u32)>(&self, on_page_change: F) -> bool {
        match self.meta.page.checked_add(1) {
            Some(page) => self.go_to(page, on_page_change),
            None => false,
        }
    }

    pub fn previous<F: FnOnce(u32)>(&self, on_page_change: F) -> bool {
        match self.meta.page.checked_sub(1) {
            Some(page) => self.go_to(page, on_page_change),
            None => false,
        }
    }

    /// Page numbers to render: first, last, and `window` pages around the
    /// current one, with ellipses over gaps.
    pub fn controls(&self, window: u32) -> Vec<PageControl> {
        let total = self.meta.total_pages;
        if total == 0 {
            return Vec::new();
        }

        let current = self.meta.page.clamp(1, total);
        let start = current.saturating_sub(window).max(1);
        let end = current.saturating_add(window).min(total);

        let mut controls = Vec::new();
        let page = |number: u32| PageControl::Page {
            number,
            current: number == current,
        };

        if start > 1 {
            controls.push(page(1));
            if start > 2 {
                controls.push(PageControl::Ellipsis);
            }
        }
        controls.extend((start..=end).map(page));
        if end < total {
            if end < total - 1 {
                controls.push(PageControl::Ellipsis);
            }
            controls.push(page(total));
        }
        controls
    }

    /// e.g. "Showing 11-20 of 45".
    pub fn summary(&self) -> String {
        if self.meta.total == 0 {
            return "No results".to_string();
        }
        let limit = u64::from(self.meta.limit.max(1));
        let first = u64::from(self.meta.page.saturating_sub(1)) * limit + 1;
        let last = (first + limit - 1).min(self.meta.total);
        format!("Showing {}-{} of {}", first, last, self.meta.total)
    }
}
