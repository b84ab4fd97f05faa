// 呼び出しベンチマーク用のカスタムエラー型定義

use thiserror::Error;

/// 呼び出し機構そのものが返すエラー型
///
/// リフレクション・動的ディスパッチ・デリゲートの各経路で、
/// 呼び出し時の検証に失敗した場合に返される。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("メソッドが見つかりません: {type_name}::{method}")]
    MethodNotFound { type_name: String, method: String },

    #[error("未登録の型です: {type_name}")]
    UnknownType { type_name: String },

    #[error("引数の数が一致しません: {method} (期待値: {expected}, 実際: {actual})")]
    ArgumentCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("シグネチャ不一致: {method} の引数 {position} は {expected} である必要があります")]
    SignatureMismatch {
        method: String,
        position: usize,
        expected: String,
    },

    #[error("レシーバ型不一致: {method} は {expected} に対してのみ呼び出せます")]
    ReceiverMismatch { method: String, expected: String },

    #[error("戻り値型不一致: {method} の戻り値は {expected} ではありません")]
    ReturnTypeMismatch { method: String, expected: String },

    #[error("デリゲート束縛エラー: {method} を {requested} に束縛できません")]
    DelegateBindError { method: String, requested: String },
}

impl InvocationError {
    /// メソッド未発見エラーの作成
    pub fn method_not_found(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    /// 未登録型エラーの作成
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// 引数数不一致エラーの作成
    pub fn argument_count(method: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArgumentCountMismatch {
            method: method.into(),
            expected,
            actual,
        }
    }

    /// シグネチャ不一致エラーの作成
    pub fn signature_mismatch(
        method: impl Into<String>,
        position: usize,
        expected: impl Into<String>,
    ) -> Self {
        Self::SignatureMismatch {
            method: method.into(),
            position,
            expected: expected.into(),
        }
    }

    /// レシーバ型不一致エラーの作成
    pub fn receiver_mismatch(method: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::ReceiverMismatch {
            method: method.into(),
            expected: expected.into(),
        }
    }

    /// 戻り値型不一致エラーの作成
    pub fn return_type_mismatch(method: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::ReturnTypeMismatch {
            method: method.into(),
            expected: expected.into(),
        }
    }

    /// デリゲート束縛エラーの作成
    pub fn delegate_bind(method: impl Into<String>, requested: impl Into<String>) -> Self {
        Self::DelegateBindError {
            method: method.into(),
            requested: requested.into(),
        }
    }

    /// 呼び出し時の型検証で発生したエラーかどうか
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCountMismatch { .. }
                | Self::SignatureMismatch { .. }
                | Self::ReceiverMismatch { .. }
                | Self::ReturnTypeMismatch { .. }
        )
    }
}

/// ベンチマーク実行全体のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("結果不一致: {strategy} が {actual} を返しました (期待値: {expected})")]
    ResultMismatch {
        strategy: String,
        expected: i32,
        actual: i32,
    },

    #[error("戦略名が重複しています: {name}")]
    DuplicateStrategy { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("シリアライズエラー: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BenchError {
    /// 結果不一致エラーの作成
    pub fn result_mismatch(strategy: impl Into<String>, expected: i32, actual: i32) -> Self {
        Self::ResultMismatch {
            strategy: strategy.into(),
            expected,
            actual,
        }
    }

    /// 重複戦略エラーの作成
    pub fn duplicate_strategy(name: impl Into<String>) -> Self {
        Self::DuplicateStrategy { name: name.into() }
    }
}

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    /// 新しいバリデーションエラーを作成
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// ベンチマークの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
