pub mod home;
pub mod not_found;
pub mod store_detail;
pub mod stores;
pub mod try_on;
