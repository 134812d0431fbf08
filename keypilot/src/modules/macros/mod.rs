//! 宏存储模块

pub mod store;

pub use store::{MacroDocument, MacroStore};
