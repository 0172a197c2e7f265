// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含流水线的核心逻辑，包括：
/// - 领域模型（models）：各阶段之间传递的记录与汇总
/// - 仓库接口（repositories）：表格持久化抽象接口
/// - 服务（services）：抓取、清洗、评分与报告四个阶段
///
/// 外部能力（网络、评分引擎、文件系统）均通过特质注入，
/// 测试中可替换为确定性的实现。
pub mod models;
pub mod repositories;
pub mod services;
