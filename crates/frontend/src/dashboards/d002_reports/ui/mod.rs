mod dashboard;

pub use dashboard::ReportsPage;
