use crate::domain::common::aggregate_id::int_aggregate_id;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

int_aggregate_id!(
    /// Уникальный идентификатор бренда
    BrandId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Бренд
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    #[serde(default)]
    pub name: String,
}

impl Brand {
    pub fn new(id: BrandId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &BrandDto) {
        self.name = dto.name.trim().to_string();
    }
}

impl AggregateRoot for Brand {
    type Id = BrandId;
    type Dto = BrandDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "brands"
    }

    fn element_name() -> &'static str {
        "Brand"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления бренда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BrandDto {
    pub name: String,
}

impl BrandDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let dto = BrandDto {
            name: "   ".into(),
        };
        assert!(dto.validate().is_err());
        assert!(BrandDto {
            name: "Acme".into()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_dto_rejects_unknown_fields() {
        let err = serde_json::from_str::<BrandDto>(r#"{"name":"Acme","logo":"x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_brand_tolerates_missing_name() {
        let brand: Brand = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(brand.id, BrandId::new(1));
        assert_eq!(brand.name, "");
    }

    #[test]
    fn test_update_trims_name() {
        let mut brand = Brand::new(BrandId::new(5), "Old");
        brand.update(&BrandDto {
            name: "  X ".into(),
        });
        assert_eq!(brand.name, "X");
    }
}
