//! Routes
//!
//! Route handlers organized by page.

pub mod artist;
pub mod health;
pub mod home;
pub mod map;
pub mod search;
