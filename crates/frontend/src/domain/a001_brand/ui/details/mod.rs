pub mod model;
pub mod view;

pub use model::BrandDraft;
pub use view::BrandDetails;
