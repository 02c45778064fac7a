use crate::shared::session::FormDraft;
use contracts::domain::a002_commission_setting::aggregate::{
    CommissionSetting, CommissionSettingDto,
};
use contracts::domain::a003_doctor::aggregate::DoctorId;
use contracts::domain::common::AggregateId;

/// Черновик формы комиссии. Поля хранятся так, как их ввёл пользователь.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommissionDraft {
    /// Значение `<select>`; пустая строка означает "врач не выбран"
    pub doctor_id: String,
    pub commission_type: String,
    pub source: String,
    pub value: String,
    pub calculation_type: String,
}

impl FormDraft for CommissionDraft {
    type Entity = CommissionSetting;

    fn from_entity(entity: &CommissionSetting) -> Self {
        Self {
            doctor_id: entity
                .doctor_id
                .map(|id| id.as_string())
                .unwrap_or_default(),
            commission_type: entity.commission_type.clone(),
            source: entity.source.clone(),
            value: entity.value.map(|v| v.to_string()).unwrap_or_default(),
            calculation_type: entity.calculation_type.clone(),
        }
    }

    fn to_dto(&self) -> Result<CommissionSettingDto, String> {
        let doctor_id = DoctorId::from_string(self.doctor_id.trim())
            .map_err(|_| "Please select a doctor".to_string())?;

        let value = match self.value.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| "Value must be a number".to_string())?,
            ),
        };

        let dto = CommissionSettingDto {
            doctor_id,
            commission_type: self.commission_type.trim().to_string(),
            source: self.source.trim().to_string(),
            value,
            calculation_type: self.calculation_type.trim().to_string(),
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_commission_setting::aggregate::CommissionSettingId;

    #[test]
    fn test_doctor_is_required() {
        let draft = CommissionDraft {
            commission_type: "OPD".into(),
            value: "10".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_dto(), Err("Please select a doctor".to_string()));
    }

    #[test]
    fn test_value_must_be_numeric() {
        let draft = CommissionDraft {
            doctor_id: "4".into(),
            value: "ten".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_dto(), Err("Value must be a number".to_string()));
    }

    #[test]
    fn test_empty_value_is_sent_as_absent() {
        let draft = CommissionDraft {
            doctor_id: "4".into(),
            source: " Walk-in ".into(),
            ..Default::default()
        };
        let dto = draft.to_dto().unwrap();
        assert_eq!(dto.doctor_id, DoctorId::new(4));
        assert_eq!(dto.value, None);
        assert_eq!(dto.source, "Walk-in");
    }

    #[test]
    fn test_draft_from_entity_round_trips_fields() {
        let entity = CommissionSetting {
            id: CommissionSettingId::new(5),
            doctor_id: Some(DoctorId::new(2)),
            commission_type: "Lab".into(),
            source: "Referral".into(),
            value: Some(12.5),
            calculation_type: "percentage".into(),
        };
        let draft = CommissionDraft::from_entity(&entity);

        assert_eq!(draft.doctor_id, "2");
        assert_eq!(draft.value, "12.5");
        assert_eq!(
            CommissionSetting::from_dto(entity.id, &draft.to_dto().unwrap()),
            entity
        );
    }
}
