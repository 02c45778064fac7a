use crate::domain::a002_commission_setting::ui::details::CommissionDraft;
use crate::shared::list_utils::{apply_display_order, filter_list, DisplayOrder, Searchable};
use crate::shared::session::{DeleteSession, EditSession, NotifyTexts};
use crate::shared::store::LookupTable;
use contracts::domain::a002_commission_setting::aggregate::{
    CommissionSetting, CommissionSettingId,
};
use contracts::domain::a003_doctor::aggregate::Doctor;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const COMMISSION_TEXTS: NotifyTexts = NotifyTexts {
    created: "Commission added successfully",
    updated: "Commission updated successfully",
    deleted: "Commission deleted",
    mutation_failed: "Operation failed",
    delete_failed: "Delete failed",
};

/// Новые записи сверху: сервер отдаёт по возрастанию id
const COMMISSION_ORDER: DisplayOrder = DisplayOrder::Reversed;

impl Searchable<LookupTable<Doctor>> for CommissionSetting {
    fn search_fields(&self, doctors: &LookupTable<Doctor>) -> Vec<String> {
        vec![
            self.doctor_id.map(|id| id.as_string()).unwrap_or_default(),
            doctors.search_label(self.doctor_id),
            self.commission_type.clone(),
            self.source.clone(),
        ]
    }
}

#[derive(Clone, Copy)]
pub struct CommissionListState {
    pub query: RwSignal<String>,
    pub edit: RwSignal<EditSession<CommissionDraft>>,
    pub delete: RwSignal<DeleteSession<CommissionSettingId>>,
    pub expanded: RwSignal<Option<CommissionSettingId>>,
}

pub fn create_state() -> CommissionListState {
    CommissionListState {
        query: RwSignal::new(String::new()),
        edit: RwSignal::new(EditSession::default()),
        delete: RwSignal::new(DeleteSession::default()),
        expanded: RwSignal::new(None),
    }
}

pub fn visible_commissions(
    items: &[CommissionSetting],
    doctors: &LookupTable<Doctor>,
    query: &str,
) -> Vec<CommissionSetting> {
    apply_display_order(filter_list(items, doctors, query), COMMISSION_ORDER)
}

/// Тексты баннеров ошибок чтения: коллекция и справочник врачей
pub fn load_errors(collection: Option<String>, doctors: Option<String>) -> Vec<String> {
    let mut banners = Vec::new();
    if let Some(e) = collection {
        banners.push(format!("Error: {}", e));
    }
    if let Some(e) = doctors {
        banners.push(format!("Doctors could not be loaded: {}", e));
    }
    banners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AppError;
    use crate::shared::session::{submit_edit, EditMode};
    use crate::shared::test_support::{MockApi, RecordingNotifier};
    use crate::shared::store::{EntityStore, LookupStore};
    use contracts::domain::a002_commission_setting::aggregate::CommissionSettingDto;
    use contracts::domain::a003_doctor::aggregate::{DoctorDto, DoctorId};
    use std::sync::Arc;

    fn setting(id: i64, doctor: Option<i64>, kind: &str, source: &str) -> CommissionSetting {
        CommissionSetting {
            id: CommissionSettingId::new(id),
            doctor_id: doctor.map(DoctorId::new),
            commission_type: kind.to_string(),
            source: source.to_string(),
            value: Some(10.0),
            calculation_type: "percentage".to_string(),
        }
    }

    fn doctors() -> LookupTable<Doctor> {
        LookupTable::from_items(&[Doctor {
            id: DoctorId::new(7),
            name: "Dr. Meera Shah".to_string(),
            specialization: None,
        }])
    }

    fn ids(rows: &[CommissionSetting]) -> Vec<i64> {
        rows.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_search_uses_joined_doctor_name() {
        let items = vec![
            setting(1, Some(7), "OPD", "Walk-in"),
            setting(2, Some(8), "Lab", "Referral"),
        ];

        assert_eq!(ids(&visible_commissions(&items, &doctors(), "meera")), vec![1]);
        assert_eq!(ids(&visible_commissions(&items, &doctors(), "REFERRAL")), vec![2]);
    }

    #[test]
    fn test_missing_doctor_does_not_break_search() {
        let items = vec![setting(1, None, "OPD", ""), setting(2, Some(99), "Lab", "")];

        assert_eq!(ids(&visible_commissions(&items, &doctors(), "lab")), vec![2]);
        assert!(visible_commissions(&items, &doctors(), "unknown").is_empty());
    }

    #[test]
    fn test_rows_are_shown_newest_first() {
        let items = vec![
            setting(1, Some(7), "OPD", ""),
            setting(2, Some(7), "Lab", ""),
            setting(3, Some(7), "OPD", ""),
        ];

        assert_eq!(ids(&visible_commissions(&items, &doctors(), "")), vec![3, 2, 1]);
        assert_eq!(ids(&visible_commissions(&items, &doctors(), "opd")), vec![3, 1]);
    }

    #[tokio::test]
    async fn test_create_without_doctor_stays_local() {
        let _owner = {
            let owner = Owner::new();
            owner.set();
            owner
        };
        let api = Arc::new(MockApi::<CommissionSetting>::new(
            vec![],
            |id, dto: &CommissionSettingDto| {
                CommissionSetting::from_dto(id.unwrap_or(CommissionSettingId::new(1)), dto)
            },
        ));
        let store = EntityStore::new(api.clone());
        let notifier = RecordingNotifier::default();
        let state = create_state();

        state.edit.update(|s| s.open_new());
        state.edit.update(|s| {
            s.edit_draft(|d| {
                d.commission_type = "OPD".into();
                d.value = "15".into();
            })
        });

        let err = submit_edit(state.edit, &store, &notifier, &COMMISSION_TEXTS)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(api.calls().is_empty());
        assert!(notifier.is_empty());
        state.edit.with_untracked(|s| {
            assert_eq!(s.mode(), EditMode::CreatingNew);
            assert_eq!(s.validation_error(), Some("Please select a doctor"));
            assert_eq!(s.draft().commission_type, "OPD");
        });
    }

    #[tokio::test]
    async fn test_failed_doctor_lookup_is_reported() {
        let _owner = {
            let owner = Owner::new();
            owner.set();
            owner
        };
        let api = Arc::new(MockApi::<Doctor>::new(
            vec![Doctor {
                id: DoctorId::new(7),
                name: "Dr. Meera Shah".to_string(),
                specialization: None,
            }],
            |id, dto: &DoctorDto| Doctor {
                id: id.unwrap_or(DoctorId::new(1)),
                name: dto.name.clone(),
                specialization: dto.specialization.clone(),
            },
        ));
        let lookup = LookupStore::new(api.clone());
        api.fail_list(true);

        let err = lookup.fetch().await.unwrap_err();

        assert!(matches!(err, AppError::Fetch(_)));
        assert_eq!(lookup.error().as_deref(), Some("HTTP 503"));
        assert_eq!(
            load_errors(None, lookup.error()),
            vec!["Doctors could not be loaded: HTTP 503".to_string()]
        );
        let table = lookup.table_untracked();
        assert!(table.is_empty());
        assert_eq!(table.label(Some(DoctorId::new(7))), "Doctor #7");

        api.fail_list(false);
        lookup.fetch().await.unwrap();
        assert_eq!(lookup.error(), None);
        assert_eq!(lookup.table_untracked().label(Some(DoctorId::new(7))), "Dr. Meera Shah");
    }

    #[test]
    fn test_load_errors_lists_collection_first() {
        assert!(load_errors(None, None).is_empty());
        assert_eq!(
            load_errors(Some("HTTP 500".into()), Some("HTTP 503".into())),
            vec![
                "Error: HTTP 500".to_string(),
                "Doctors could not be loaded: HTTP 503".to_string()
            ]
        );
    }
}
