pub mod client;
pub mod date_logic;
pub mod http_client;
pub mod urls;

pub use client::CasablancaClient;
pub use date_logic::{format_date_offset, format_date_offset_from, today_date_string};
pub use http_client::{create_http_client_with_timeout, fetch_json, fetch_text};
pub use urls::*;
