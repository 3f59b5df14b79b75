use payloads::{Pagination, QueryFormData};
use yewdux::prelude::*;

/// The record type whose results are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Donations,
    Raids,
    Streams,
}

impl ResultView {
    pub const ALL: [ResultView; 3] =
        [ResultView::Donations, ResultView::Raids, ResultView::Streams];

    pub fn label(&self) -> &'static str {
        match self {
            ResultView::Donations => "Donations",
            ResultView::Raids => "Raids",
            ResultView::Streams => "Streams",
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Search form ===
    pub query: QueryFormData,
    pub active_view: ResultView,

    // === Written by the fetch hook of the active view ===
    pub pagination: Option<Pagination>,
    pub is_loading: bool,
}

impl State {
    /// Applies a submitted search. A different user or channel starts over
    /// from the first page.
    pub fn submit_query(&mut self, query: QueryFormData) {
        if self.query.is_new_search(&query) {
            self.pagination = None;
        }
        self.query = query;
    }

    pub fn select_view(&mut self, view: ResultView) {
        if self.active_view != view {
            self.pagination = None;
            self.active_view = view;
        }
    }

    pub fn update_pagination(&mut self, pagination: Option<Pagination>) {
        self.pagination = pagination;
    }

    pub fn set_is_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Moves to `page`, keeping the last known page metadata.
    pub fn set_page(&mut self, page: u64) {
        let mut pagination = self
            .pagination
            .unwrap_or_else(|| Pagination::at_page(Pagination::FIRST_PAGE));
        pagination.page = page.max(Pagination::FIRST_PAGE);
        self.pagination = Some(pagination);
    }

    pub fn previous_page(&mut self) {
        let page = self.current_page();
        self.set_page(page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        let page = self.current_page();
        self.set_page(page + 1);
    }

    fn current_page(&self) -> u64 {
        self.pagination
            .map_or(Pagination::FIRST_PAGE, |pagination| pagination.page)
    }

    /// Pagination to put in the next request URL.
    ///
    /// The first page is the backend default and is left out, so storing the
    /// first response's metadata does not change the URL and refetch.
    pub fn requested_pagination(&self) -> Option<Pagination> {
        self.pagination
            .filter(|pagination| pagination.page > Pagination::FIRST_PAGE)
    }
}
