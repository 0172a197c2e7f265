// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部能力的默认实现：
/// - 情感分析（sentiment）：基于词典的评分引擎
/// - 存储（storage）：本地 CSV 表格存储
pub mod sentiment;
pub mod storage;
