// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 将各领域服务与外部能力组装为完整的抓取流水线
pub mod usecases;
