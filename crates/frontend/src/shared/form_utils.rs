//! Встроенные формы списочных экранов: что открыто и разбор полей ввода

use chrono::NaiveDate;

/// Формат `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Открытая на экране форма
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    New,
    Edit(String),
}

impl FormTarget {
    /// Ключ редактируемой записи; `None` для новой
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::New => None,
            Self::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Действие для лога мутации
    pub fn action(&self) -> String {
        match self {
            Self::New => "add".to_string(),
            Self::Edit(id) => format!("update {}", id),
        }
    }
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_date_input(raw: &str, label: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| format!("Invalid {}: {}", label, raw))
}

/// Сумма или процент; пустое поле = 0
pub fn parse_amount_input(raw: &str, label: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid {}: {}", label, raw))
}

/// Целое неотрицательное количество; пустое поле = 0
pub fn parse_count_input(raw: &str, label: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| format!("Invalid {}: {}", label, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_target() {
        assert_eq!(FormTarget::New.id(), None);
        assert_eq!(FormTarget::New.action(), "add");
        let edit = FormTarget::Edit("CUST003".into());
        assert_eq!(edit.id(), Some("CUST003"));
        assert!(edit.is_edit());
        assert_eq!(edit.action(), "update CUST003");
    }

    #[test]
    fn test_date_input() {
        let day = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        assert_eq!(format_date_input(day), "2023-07-01");
        assert_eq!(parse_date_input("2023-07-01", "start date"), Ok(day));
        assert_eq!(
            parse_date_input("01.07.2023", "start date"),
            Err("Invalid start date: 01.07.2023".to_string())
        );
    }

    #[test]
    fn test_number_inputs() {
        assert_eq!(parse_amount_input(" 12.5 ", "discount"), Ok(12.5));
        assert_eq!(parse_amount_input("", "discount"), Ok(0.0));
        assert!(parse_amount_input("abc", "discount").is_err());
        assert!(parse_amount_input("inf", "discount").is_err());
        assert_eq!(parse_count_input("40", "stock"), Ok(40));
        assert_eq!(
            parse_count_input("-1", "stock"),
            Err("Invalid stock: -1".to_string())
        );
    }
}
