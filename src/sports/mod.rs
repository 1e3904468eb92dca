//! Sports discovery from the NCAA navigation page.

pub mod fetcher;
pub mod gender_resolver;
pub mod models;
pub mod parser;
pub mod service;

pub use fetcher::{HtmlFetcher, ReqwestHtmlFetcher};
pub use gender_resolver::{DefaultGenderResolver, GenderResolver};
pub use models::{Gender, Season, Sport};
pub use parser::parse_sports;
pub use service::{NcaaSportsService, filter_sports, sort_sports};
