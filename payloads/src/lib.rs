pub mod api_client;
pub mod query;
pub mod responses;
pub mod url_builder;

pub use api_client::{APIClient, ClientError};
pub use query::{Identifier, ParamNames, QueryFormData};
pub use responses::{Envelope, Pagination};
pub use url_builder::{FetchUrl, UrlBuilder};
