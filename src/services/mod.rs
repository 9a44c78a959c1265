mod contact_list;
mod pagination;

pub use contact_list::{ContactListService, ListSnapshot};
pub use pagination::{MAX_RECORDS, PAGE_SIZE, PaginationSimulator};
