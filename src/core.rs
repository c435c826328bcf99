//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the report pipeline:
//! the result model, the lifecycle-event recorder, and configuration.
//!
//! 此模块包含报告管道的核心功能：
//! 结果模型、生命周期事件记录器和配置。

pub mod config;
pub mod models;
pub mod recorder;

// Re-exports
pub use self::models::TestExecution;
pub use self::recorder::RunRecorder;
