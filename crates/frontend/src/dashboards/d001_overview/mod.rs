pub mod ui;

pub use ui::OverviewPage;
