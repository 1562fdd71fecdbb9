// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 菜单（menu）：导出行、输出表和统计
/// - 查找结果（outcome）：尽力而为查找的三态结果
pub mod menu;
pub mod outcome;
