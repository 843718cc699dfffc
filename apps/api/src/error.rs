//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ハンドラやユースケースは典型的なエラーをこの型で返し、変換は
//! `IntoResponse` 実装の一箇所だけで行う。下層のエラーをログに出すのも
//! この境界のみで、途中の層では握り潰しも再ラップもしない。
//!
//! 「テスト未入力」「テスト未受験」といった旧 API 由来のソフト失敗は
//! エラーではなく、ハンドラが 200 のメッセージ応答として直接返す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tourmate_domain::DomainError;

/// エラーレスポンス（RFC 7807 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 認証失敗（セッションなし・無効なセッション）
   #[error("認証されていません")]
   Unauthorized,

   /// 不正なリクエスト（ドメインバリデーション失敗）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// インフラエラー（データベース・Redis）
   #[error("インフラエラー: {0}")]
   Infra(#[from] tourmate_infra::InfraError),

   /// 内部エラー
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::Validation(msg),
         DomainError::NotFound { entity_type, id } => {
            ApiError::NotFound(format!("{entity_type}: {id}"))
         }
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, error_type, title, detail) = match &self {
         ApiError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "https://tourmate.example.com/errors/unauthorized",
            "Unauthorized",
            "ログインが必要です".to_string(),
         ),
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            "https://tourmate.example.com/errors/bad-request",
            "Bad Request",
            msg.clone(),
         ),
         ApiError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            "https://tourmate.example.com/errors/not-found",
            "Not Found",
            msg.clone(),
         ),
         ApiError::Infra(e) => {
            tracing::error!("インフラエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               "https://tourmate.example.com/errors/internal-error",
               "Internal Server Error",
               "内部エラーが発生しました".to_string(),
            )
         }
         ApiError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               "https://tourmate.example.com/errors/internal-error",
               "Internal Server Error",
               "内部エラーが発生しました".to_string(),
            )
         }
      };

      (
         status,
         Json(ErrorResponse {
            error_type: error_type.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail,
         }),
      )
         .into_response()
   }
}
