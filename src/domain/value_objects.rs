#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISBNのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// 空のISBN
    Empty,
    /// ISBNに使用できない文字が含まれる
    InvalidCharacter,
}

/// ISBN - 書籍の正規識別子
///
/// 不変条件：空文字列・空白のみの値は存在しない。
/// 型システムでこの制約を強制し、不正な識別子がポート境界を
/// 越えられないようにする。チェックサム検証は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isbn(String);

impl Isbn {
    /// ISBNを検証して作成する
    ///
    /// # エラー
    /// - 空文字列・空白のみの場合は`IsbnError::Empty`
    /// - 数字・ハイフン・`X`以外の文字を含む場合は`IsbnError::InvalidCharacter`
    pub fn new(value: impl Into<String>) -> Result<Self, IsbnError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(IsbnError::Empty);
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == 'X' || c == 'x')
        {
            return Err(IsbnError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// 識別子の文字列表現
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
