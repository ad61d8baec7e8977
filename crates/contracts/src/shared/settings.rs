//! Настройки панели администратора и статический список ролей

use crate::domain::common::validation::validate_email;
use serde::{Deserialize, Serialize};

/// Ключ хранения настроек в localStorage
pub const SETTINGS_STORAGE_KEY: &str = "dairy_admin_settings_v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl BackupFrequency {
    pub const ALL: [BackupFrequency; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub notification_email: String,
    pub sms_notifications: bool,
    pub email_notifications: bool,
    pub backup_frequency: BackupFrequency,
    /// Минуты бездействия до выхода
    pub auto_logout: u32,
    pub currency: String,
    pub language: String,
    /// Ставка налога, %
    pub tax_rate: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notification_email: "admin@dairy.com".into(),
            sms_notifications: true,
            email_notifications: true,
            backup_frequency: BackupFrequency::Daily,
            auto_logout: 30,
            currency: "INR".into(),
            language: "en".into(),
            tax_rate: 5.0,
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> Result<(), String> {
        validate_email(&self.notification_email)?;
        if !(0.0..=100.0).contains(&self.tax_rate) {
            return Err("Tax rate must be between 0 and 100".into());
        }
        if self.auto_logout == 0 {
            return Err("Auto logout time must be greater than zero".into());
        }
        Ok(())
    }

    /// Восстановление из JSON; неизвестные поля игнорируются, отсутствующие берутся по умолчанию
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Cannot read settings: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Cannot write settings: {}", e))
    }
}

/// Роль пользователя с набором прав
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub name: String,
    pub permissions: Vec<String>,
}

impl Role {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == "all" || p == permission)
    }
}

pub fn default_roles() -> Vec<Role> {
    let role = |id: u32, name: &str, permissions: &[&str]| Role {
        id,
        name: name.into(),
        permissions: permissions.iter().map(|p| (*p).to_string()).collect(),
    };
    vec![
        role(1, "Admin", &["all"]),
        role(
            2,
            "Manager",
            &["view_all", "edit_products", "edit_orders", "view_reports"],
        ),
        role(
            3,
            "Staff",
            &["view_products", "view_orders", "update_order_status"],
        ),
        role(
            4,
            "Delivery",
            &["view_assigned_orders", "update_delivery_status"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let s = AppSettings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.currency, "INR");
        assert_eq!(s.tax_rate, 5.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut s = AppSettings::default();
        s.notification_email = "admin.dairy.com".into();
        assert!(s.validate().is_err());

        let mut s = AppSettings::default();
        s.tax_rate = 120.0;
        assert!(s.validate().is_err());

        let mut s = AppSettings::default();
        s.auto_logout = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults() {
        let json = AppSettings::default().to_json().unwrap();
        assert!(json.contains("\"notificationEmail\""));
        assert!(json.contains("\"backupFrequency\":\"daily\""));

        let partial = AppSettings::from_json(r#"{"taxRate": 12.5, "backupFrequency": "weekly"}"#)
            .unwrap();
        assert_eq!(partial.tax_rate, 12.5);
        assert_eq!(partial.backup_frequency, BackupFrequency::Weekly);
        assert_eq!(partial.auto_logout, 30);

        assert!(AppSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_roles() {
        let roles = default_roles();
        assert_eq!(roles.len(), 4);
        assert!(roles[0].has_permission("edit_products"));
        assert!(roles[1].has_permission("view_reports"));
        assert!(!roles[2].has_permission("view_reports"));
        assert_eq!(BackupFrequency::from_str_opt("monthly"), Some(BackupFrequency::Monthly));
        assert_eq!(BackupFrequency::from_str_opt("hourly"), None);
    }
}
