use crate::shared::session::FormDraft;
use contracts::domain::a001_brand::aggregate::{Brand, BrandDto};

/// Черновик формы бренда
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandDraft {
    pub name: String,
}

impl FormDraft for BrandDraft {
    type Entity = Brand;

    fn from_entity(entity: &Brand) -> Self {
        Self {
            name: entity.name.clone(),
        }
    }

    fn to_dto(&self) -> Result<BrandDto, String> {
        let dto = BrandDto {
            name: self.name.trim().to_string(),
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_brand::aggregate::BrandId;

    #[test]
    fn test_draft_copies_entity_fields() {
        let brand = Brand::new(BrandId::new(3), "Acme");
        let mut draft = BrandDraft::from_entity(&brand);
        draft.name.push_str(" Labs");

        assert_eq!(draft.name, "Acme Labs");
        assert_eq!(brand.name, "Acme");
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let draft = BrandDraft {
            name: "   ".into(),
        };
        assert_eq!(draft.to_dto(), Err("Name is required".to_string()));
    }

    #[test]
    fn test_name_is_trimmed_in_payload() {
        let draft = BrandDraft {
            name: "  Zeta ".into(),
        };
        assert_eq!(draft.to_dto().unwrap().name, "Zeta");
    }
}
