// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::EngineError;

/// 尽力而为的查找结果
///
/// 缺失是正常结果，失败只记录原因，二者都不会中断遍历
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 找到
    Found(T),
    /// 不存在
    Absent,
    /// 查找失败，可忽略
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// 缺失或失败的说明文字，用于日志
    pub fn describe_miss(&self) -> Option<String> {
        match self {
            Outcome::Found(_) => None,
            Outcome::Absent => Some("not found".to_string()),
            Outcome::Failed(reason) => Some(reason.clone()),
        }
    }
}

impl<T> From<Result<Option<T>, EngineError>> for Outcome<T> {
    fn from(result: Result<Option<T>, EngineError>) -> Self {
        match result {
            Ok(Some(value)) => Outcome::Found(value),
            Ok(None) => Outcome::Absent,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}
