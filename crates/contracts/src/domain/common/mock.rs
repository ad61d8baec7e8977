use chrono::NaiveDate;

/// Дата для мок-данных; некорректная дата превращается в `NaiveDate::MIN`
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
