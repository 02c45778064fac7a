pub mod model;
pub mod view;

pub use model::CommissionDraft;
pub use view::CommissionSettingDetails;
