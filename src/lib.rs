// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 组装抓取、清洗、评分与报告四个阶段
pub mod application;

/// 配置模块
///
/// 处理流水线的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含记录模型、能力接口与各阶段服务
pub mod domain;

/// 引擎模块
///
/// 实现记录抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供情感分析与表格存储的默认实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;

pub use application::usecases::run_pipeline::XScraper;
pub use config::settings::{ScraperSettings, Settings};
pub use utils::errors::PipelineError;
