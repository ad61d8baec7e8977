use chrono::NaiveDate;
use std::cmp::Ordering;

/// Значение поля записи, по которому списки ищут, фильтруют и сортируют
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Текстовое представление (для поиска, фильтров и выпадающих списков)
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Целые числа без ".0": "110", но "12.5"
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

impl FieldValue {
    /// Порядок видов при сравнении разных типов: текст < число < дата
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
        }
    }
}

/// Сравнение значений двух записей по одному полю.
///
/// Полный порядок: отсутствующее значение меньше любого присутствующего,
/// значения разных видов упорядочены по виду, числа сравниваются через
/// `total_cmp` (NaN больше любого числа).
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.total_cmp(y),
        (Some(FieldValue::Date(x)), Some(FieldValue::Date(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.kind_rank().cmp(&y.kind_rank()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from(110.0).as_text(), "110");
        assert_eq!(FieldValue::from(12.5).as_text(), "12.5");
        assert_eq!(FieldValue::from("Cheese").as_text(), "Cheese");
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(FieldValue::from(date).as_text(), "2023-06-15");
    }

    #[test]
    fn test_compare_same_type() {
        let a = FieldValue::from("Amit");
        let b = FieldValue::from("Rahul");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);

        // lexicographic, not case-folded: uppercase sorts before lowercase
        let upper = FieldValue::from("Zeta");
        let lower = FieldValue::from("alpha");
        assert_eq!(compare_values(Some(&upper), Some(&lower)), Ordering::Less);

        // numeric, not lexicographic
        let small = FieldValue::from(950.0);
        let big = FieldValue::from(1250.0);
        assert_eq!(compare_values(Some(&small), Some(&big)), Ordering::Less);
    }

    #[test]
    fn test_compare_missing_and_mismatch() {
        let v = FieldValue::from(1.0);
        assert_eq!(compare_values(None, Some(&v)), Ordering::Less);
        assert_eq!(compare_values(Some(&v), None), Ordering::Greater);
        assert_eq!(compare_values(None, None), Ordering::Equal);

        let t = FieldValue::from("1");
        assert_eq!(compare_values(Some(&t), Some(&v)), Ordering::Less);
        assert_eq!(compare_values(Some(&v), Some(&t)), Ordering::Greater);

        let nan = FieldValue::from(f64::NAN);
        assert_eq!(compare_values(Some(&nan), Some(&v)), Ordering::Greater);
        assert_eq!(compare_values(Some(&nan), Some(&nan)), Ordering::Equal);
    }

    #[test]
    fn test_compare_is_total_over_mixed_values() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let values = vec![
            Some(FieldValue::from(f64::NAN)),
            Some(FieldValue::from(date)),
            None,
            Some(FieldValue::from("milk")),
            Some(FieldValue::from(-1.0)),
            Some(FieldValue::from(f64::NAN)),
            Some(FieldValue::from("curd")),
            Some(FieldValue::from(3.0)),
        ];

        // антисимметричность и транзитивность на всех тройках
        for a in &values {
            for b in &values {
                let ab = compare_values(a.as_ref(), b.as_ref());
                assert_eq!(ab, compare_values(b.as_ref(), a.as_ref()).reverse());
                for c in &values {
                    let bc = compare_values(b.as_ref(), c.as_ref());
                    if ab != Ordering::Greater && bc != Ordering::Greater {
                        assert_ne!(compare_values(a.as_ref(), c.as_ref()), Ordering::Greater);
                    }
                }
            }
        }

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| compare_values(a.as_ref(), b.as_ref()));
        let texts: Vec<String> = sorted
            .iter()
            .map(|v| v.as_ref().map(|v| v.as_text()).unwrap_or_default())
            .collect();
        assert_eq!(texts, vec!["", "curd", "milk", "-1", "3", "NaN", "NaN", "2023-06-15"]);
    }
}
