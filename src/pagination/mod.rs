mod config;
mod params;
mod urls;

pub use config::{PAGE_LIMIT, PaginationConfig};
pub use params::{PaginationParameters, RequestContext, resolve_pagination};
pub use urls::{get_limit, get_page, get_search, page_to_offset};
