pub mod components;
pub mod form_utils;
pub mod icons;
pub mod list_utils;
pub mod storage;
