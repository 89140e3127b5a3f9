//! # 输出工具
//!
//! - **pretty**: 报告的表格、JSON 与字符图输出

pub mod pretty;
