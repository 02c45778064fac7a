use crate::domain::a003_doctor::aggregate::DoctorId;
use crate::domain::common::aggregate_id::int_aggregate_id;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

int_aggregate_id!(
    /// Уникальный идентификатор настройки комиссии
    CommissionSettingId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Настройка комиссии врача
///
/// Все поля кроме `id` терпимы к отсутствию в ответе сервера.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionSetting {
    pub id: CommissionSettingId,

    #[serde(default)]
    pub doctor_id: Option<DoctorId>,

    #[serde(rename = "type", default)]
    pub commission_type: String,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub calculation_type: String,
}

impl CommissionSetting {
    /// Собрать запись из DTO и выданного сервером ID
    pub fn from_dto(id: CommissionSettingId, dto: &CommissionSettingDto) -> Self {
        Self {
            id,
            doctor_id: Some(dto.doctor_id),
            commission_type: dto.commission_type.clone(),
            source: dto.source.clone(),
            value: dto.value,
            calculation_type: dto.calculation_type.clone(),
        }
    }

    /// Значение для отображения в таблице
    pub fn value_display(&self) -> String {
        match self.value {
            Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
            Some(v) => format!("{}", v),
            None => "-".to_string(),
        }
    }
}

impl AggregateRoot for CommissionSetting {
    type Id = CommissionSettingId;
    type Dto = CommissionSettingDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "commission-settings"
    }

    fn element_name() -> &'static str {
        "Commission"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления настройки комиссии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommissionSettingDto {
    pub doctor_id: DoctorId,
    #[serde(rename = "type", default)]
    pub commission_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub calculation_type: String,
}

impl CommissionSettingDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if let Some(v) = self.value {
            if !v.is_finite() {
                return Err("Value must be a number".into());
            }
            if v < 0.0 {
                return Err("Value cannot be negative".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_uses_wire_name() {
        let json = r#"{"id":3,"doctor_id":12,"type":"visit","source":"clinic","value":15,"calculation_type":"percent"}"#;
        let c: CommissionSetting = serde_json::from_str(json).unwrap();
        assert_eq!(c.commission_type, "visit");
        assert_eq!(c.doctor_id, Some(DoctorId::new(12)));
        assert_eq!(c.value_display(), "15");
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let c: CommissionSetting = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(c.doctor_id, None);
        assert_eq!(c.source, "");
        assert_eq!(c.value_display(), "-");
    }

    #[test]
    fn test_dto_requires_doctor_and_rejects_unknown_fields() {
        assert!(serde_json::from_str::<CommissionSettingDto>(r#"{"type":"x"}"#).is_err());
        assert!(
            serde_json::from_str::<CommissionSettingDto>(r#"{"doctor_id":1,"extra":true}"#)
                .is_err()
        );
        let dto: CommissionSettingDto = serde_json::from_str(r#"{"doctor_id":1}"#).unwrap();
        assert_eq!(dto.value, None);
    }

    #[test]
    fn test_negative_value_is_invalid() {
        let dto = CommissionSettingDto {
            doctor_id: DoctorId::new(1),
            commission_type: String::new(),
            source: String::new(),
            value: Some(-1.0),
            calculation_type: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
