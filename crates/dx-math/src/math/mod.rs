//! Core math modules.

pub mod evidence;
pub mod precision;
