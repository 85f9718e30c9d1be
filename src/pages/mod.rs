//! One thin page component per route in the table.

pub mod article_detail;
pub mod article_list;
pub mod forgot_password;
pub mod home;
pub mod info;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod wishlist;
