//! Форматирование чисел для таблиц: индийская группировка разрядов (12,34,567)

/// Вставляет разделители: последние три цифры, далее группы по две
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Число с заданным количеством знаков после точки и индийской группировкой
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234567.891, 2), "12,34,567.89");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    let grouped = group_indian(integer_part);
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Целое число с индийской группировкой
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Сумма в рупиях: целые без дробной части, иначе два знака
///
/// ```rust,ignore
/// assert_eq!(format_rupees(123456.0), "₹1,23,456");
/// ```
pub fn format_rupees(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    let formatted = format_number_with_decimals(value, decimals);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-₹{}", rest),
        None => format!("₹{}", formatted),
    }
}

/// Процент с одним знаком
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(123456.0), "₹1,23,456");
        assert_eq!(format_rupees(2500.0), "₹2,500");
        assert_eq!(format_rupees(30.0), "₹30");
        assert_eq!(format_rupees(0.0), "₹0");
        assert_eq!(format_rupees(1234.5), "₹1,234.50");
        assert_eq!(format_rupees(-950.0), "-₹950");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "12,34,567.89");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(797000.0), "7,97,000");
        assert_eq!(format_number_int(12345678.0), "1,23,45,678");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(-1000.0), "-1,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(6.2136), "6.2%");
    }
}
