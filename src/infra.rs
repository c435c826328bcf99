//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the report pipeline,
//! including execution-document storage and i18n support.
//!
//! 此模块为报告管道提供基础设施服务，
//! 包括执行文档存储和国际化支持。

pub mod store;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
