// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含导出菜单的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含菜单实体、导航、提取和翻译服务以及导出接口
pub mod domain;

/// 引擎模块
///
/// 浏览器驱动抽象及其 Chromium 实现
pub mod engines;

/// 基础设施模块
///
/// 提供导出接口的 XLSX 实现
pub mod infrastructure;

/// 表示层模块
///
/// 命令行参数
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
