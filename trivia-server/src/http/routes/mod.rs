//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod play;
pub mod questions;
pub mod search;
