pub mod data_display;
pub mod donations_results;
pub mod error_panel;
pub mod loading_indicator;
pub mod pagination_controls;
pub mod raids_results;
pub mod search_form;
pub mod streams_results;
pub mod view_tabs;

pub use data_display::{
    Column, ColumnError, DataDisplay, DataDisplayProps, DisplayMode, Keyed,
    optional_text,
};
pub use donations_results::DonationsResults;
pub use error_panel::ErrorPanel;
pub use loading_indicator::LoadingIndicator;
pub use pagination_controls::PaginationControls;
pub use raids_results::RaidsResults;
pub use search_form::SearchForm;
pub use streams_results::StreamsResults;
pub use view_tabs::ViewTabs;
