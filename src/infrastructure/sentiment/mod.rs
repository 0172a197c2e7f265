// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 情感分析引擎
///
/// 默认的评分能力实现：基于词典的规则评分
pub mod lexicon;
pub mod lexicon_analyzer;
