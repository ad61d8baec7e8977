pub mod d001_overview;
pub mod d002_reports;
