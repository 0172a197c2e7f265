// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理抓取流水线的配置设置，包括数据源、批量大小、过滤阈值和输出位置
pub mod settings;
