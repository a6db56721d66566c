//! HTTP request handlers

pub mod health;
pub mod post_page;
