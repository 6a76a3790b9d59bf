//! 共通型定義
//!
//! HealthState, HealthVerdict等のチェック結果型

use std::fmt;

/// チェック結果の状態
///
/// 終了コードへの対応付けはレポート層が持つ。この型自体は数値を持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthState {
    /// 正常
    Ok,
    /// 警告（入力不足など、呼び出し側で解消できる状態）
    Warning,
    /// 異常（対象またはプロキシに到達できない、応答が不正）
    Critical,
    /// 判定不能（レポート層の失敗）
    Unknown,
}

impl HealthState {
    /// 表示用ラベル
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Ok => "OK",
            HealthState::Warning => "WARNING",
            HealthState::Critical => "CRITICAL",
            HealthState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1回の実行につき1つだけ生成されるチェック結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthVerdict {
    /// 状態
    pub state: HealthState,
    /// 標準出力に書き出すメッセージ
    pub message: String,
}

impl HealthVerdict {
    /// 任意の状態で結果を作成
    pub fn new(state: HealthState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }

    /// OK結果を作成
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(HealthState::Ok, message)
    }
}
