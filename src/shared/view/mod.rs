pub mod derived;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod sort;

pub use derived::DerivedView;
pub use pagination::{Page, Pagination, DEFAULT_PAGE_SIZE};
pub use search::{search, search_refs, Searchable};
pub use selection::{filter_selected, Selection};
pub use sort::{sort_by_date_desc, sort_by_order};
