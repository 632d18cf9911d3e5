//! System setting domain model and value normalization.

use entity::sea_orm_active_enums::SettingValueType;
use serde_json::Value;

use crate::model::setting::SettingDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub value_type: SettingValueType,
}

impl Setting {
    pub fn from_entity(entity: entity::system_setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            value_type: entity.value_type,
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            key: self.key,
            value: self.value,
            value_type: self.value_type,
        }
    }
}

/// Converts a JSON value into its stored text form and type tag.
///
/// Strings are stored as-is, booleans as `true`/`false`, integral numbers
/// without a decimal point, everything else as compact JSON.
pub fn normalize_value(value: &Value) -> (String, SettingValueType) {
    match value {
        Value::String(s) => (s.clone(), SettingValueType::String),
        Value::Bool(b) => (b.to_string(), SettingValueType::Bool),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i.to_string(), SettingValueType::Int)
            } else if let Some(u) = n.as_u64() {
                (u.to_string(), SettingValueType::Int)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        ((f as i64).to_string(), SettingValueType::Int)
                    }
                    _ => (n.to_string(), SettingValueType::Json),
                }
            }
        }
        other => (other.to_string(), SettingValueType::Json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_strings_verbatim() {
        assert_eq!(
            normalize_value(&json!("Maimang Poetry Club")),
            ("Maimang Poetry Club".to_string(), SettingValueType::String)
        );
    }

    #[test]
    fn stores_booleans_as_words() {
        assert_eq!(
            normalize_value(&json!(true)),
            ("true".to_string(), SettingValueType::Bool)
        );
        assert_eq!(
            normalize_value(&json!(false)),
            ("false".to_string(), SettingValueType::Bool)
        );
    }

    #[test]
    fn drops_decimals_from_integral_numbers() {
        assert_eq!(normalize_value(&json!(20)), ("20".to_string(), SettingValueType::Int));
        assert_eq!(normalize_value(&json!(20.0)), ("20".to_string(), SettingValueType::Int));
        assert_eq!(normalize_value(&json!(-3)), ("-3".to_string(), SettingValueType::Int));
        assert_eq!(
            normalize_value(&json!(2.5)),
            ("2.5".to_string(), SettingValueType::Json)
        );
    }

    #[test]
    fn encodes_collections_as_json() {
        assert_eq!(
            normalize_value(&json!(["poetry", "prose"])),
            ("[\"poetry\",\"prose\"]".to_string(), SettingValueType::Json)
        );
        assert_eq!(
            normalize_value(&json!({"max": 5})),
            ("{\"max\":5}".to_string(), SettingValueType::Json)
        );
    }
}
