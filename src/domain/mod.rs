// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含：
/// - 领域模型（models）：菜单导出行、字段类型和查找结果
/// - 仓库接口（repositories）：导出目标抽象接口
/// - 服务（services）：导航、字段提取和翻译
pub mod models;
pub mod repositories;
pub mod services;
