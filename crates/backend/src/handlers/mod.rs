pub mod a001_brand;
pub mod a002_commission_setting;
pub mod a003_doctor;
pub mod system;
