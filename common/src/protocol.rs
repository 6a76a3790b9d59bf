//! 通信プロトコル定義
//!
//! Sensuエージェントがstdinに渡すイベントのうち、チェックが参照する部分だけを扱う。
//! 未知のフィールドは無視する。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CheckError;

/// オブジェクトメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// 名前
    #[serde(default)]
    pub name: String,
    /// 名前空間
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// ラベル
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// アノテーション（設定の上書きに使う）
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: HashMap<String, String>,
}

/// イベントのエンティティ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// メタデータ
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// エンティティ種別（"agent", "proxy" など）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub entity_class: String,
}

/// イベントのチェック定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// メタデータ
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// 実行コマンド
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
}

/// Sensuイベント
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// 発生時刻（UNIX秒）
    #[serde(default)]
    pub timestamp: i64,
    /// エンティティ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
    /// チェック
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<Check>,
}

impl Event {
    /// イベントとして使えるか検証する
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.timestamp <= 0 {
            return Err(CheckError::Event(
                "timestamp is missing or must be greater than zero".to_string(),
            ));
        }
        let entity = self
            .entity
            .as_ref()
            .ok_or_else(|| CheckError::Event("event must contain an entity".to_string()))?;
        if entity.metadata.name.trim().is_empty() {
            return Err(CheckError::Event(
                "entity name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// アノテーションを取得（チェック → エンティティの順）
    pub fn annotation(&self, key: &str) -> Option<&str> {
        let from_check = self
            .check
            .as_ref()
            .and_then(|c| c.metadata.annotations.get(key));
        let from_entity = self
            .entity
            .as_ref()
            .and_then(|e| e.metadata.annotations.get(key));
        from_check.or(from_entity).map(String::as_str)
    }
}
