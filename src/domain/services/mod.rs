// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 流水线的四个阶段，严格按顺序执行：
/// - 记录抓取（record_fetcher）：调用数据源、截断并规范化
/// - 文本清洗（text_cleaner）：折叠空白并按长度过滤
/// - 情感评分（sentiment_scorer）：计算复合分数并判定标签
/// - 报告生成（report_generator）：写出明细表与汇总表
///
/// 每个阶段消费上一阶段的表并产出新表。
pub mod record_fetcher;
pub mod report_generator;
pub mod sentiment_scorer;
pub mod text_cleaner;
