pub mod api_utils;
pub mod error;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod session;
pub mod store;
pub mod toast;

#[cfg(test)]
pub mod test_support;
