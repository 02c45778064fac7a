//! Справочник врачей: только чтение, используется экраном комиссий.

use crate::shared::store::Labeled;
use contracts::domain::a003_doctor::aggregate::Doctor;

impl Labeled for Doctor {
    fn label(&self) -> String {
        self.name.clone()
    }
}
