use crate::domain::common::aggregate_id::int_aggregate_id;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

int_aggregate_id!(
    /// Уникальный идентификатор врача
    DoctorId
);

/// Врач. В админ-панели используется только как справочник для выбора
/// и отображения имени в настройках комиссий.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialization: Option<String>,
}

impl AggregateRoot for Doctor {
    type Id = DoctorId;
    type Dto = DoctorDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "doctors"
    }

    fn element_name() -> &'static str {
        "Doctor"
    }
}

/// DTO врача (используется бэкендом при начальном заполнении справочника)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DoctorDto {
    pub name: String,
    #[serde(default)]
    pub specialization: Option<String>,
}
