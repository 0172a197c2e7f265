// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了流水线各阶段之间传递的数据结构，包括：
/// - 记录（record）：原始、规范化、清洗后与评分后的记录
/// - 情感（sentiment）：情感标签、评分结果与汇总表
/// - 报告（report）：输出文件路径
///
/// 每个阶段接收上一阶段的表并返回一张新表，不在原表上修改。
pub mod record;
pub mod report;
pub mod sentiment;

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
