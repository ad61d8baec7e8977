pub mod ui;

pub use ui::ReportsPage;
