pub mod entry_list;
pub mod footer_bar;
pub mod query_bar;
pub mod status_bar;
