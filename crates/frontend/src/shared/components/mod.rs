pub mod page_header;
pub mod stat_card;
pub mod table;
pub mod ui;
