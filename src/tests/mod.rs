//! seisbulletin lib test modules
pub mod toolkit;

mod export;
mod gse;
mod hypo;
