//! # 嗜好テスト API ハンドラ
//!
//! `/test` 配下の 3 エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! | ルート | 役割 |
//! |--------|------|
//! | `GET /test` | 疎通・認証確認（固定メッセージ） |
//! | `POST /test/post-test` | テスト回答の登録 |
//! | `GET /test/get-test` | 回答にマッチするハッシュタグの取得 |
//!
//! 「`test` フィールド未入力」「テスト未受験」は旧 API との互換で
//! 200 のメッセージ応答として返す。エラー（4xx/5xx）に変換されるのは
//! バリデーション失敗とインフラ障害のみ。

use std::sync::Arc;

use axum::{
   Extension,
   Json,
   extract::State,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tourmate_domain::{
   preference::TestAnswers,
   tour::{TourArea, TourCategory},
};

use crate::{
   error::ApiError,
   middleware::CurrentUser,
   usecase::{TestUseCaseImpl, TotalHashtag},
};

/// `GET /test` の固定メッセージ
const PING_MESSAGE: &str = "test";

/// `test` フィールド未入力時のメッセージ
const MISSING_TEST_MESSAGE: &str = "Input body - test";

/// テスト未受験時のメッセージ
const NOT_EXIST_TEST_MESSAGE: &str = "Not Exist Test";

/// ハッシュタグ取得成功時のメッセージ
const OK_MESSAGE: &str = "OK";

/// 嗜好テストハンドラーの State
pub struct TestState {
   pub usecase: TestUseCaseImpl,
}

/// メッセージのみのレスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
   pub message: String,
}

impl MessageResponse {
   fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }
}

/// `POST /test/post-test` のリクエストボディ
#[derive(Debug, Deserialize)]
pub struct PostTestBody {
   /// 未指定（キーなし・null）は「未入力」のソフト失敗として扱う
   pub test: Option<TestAnswersDto>,
}

/// テスト回答 DTO
#[derive(Debug, Deserialize)]
pub struct TestAnswersDto {
   #[serde(default)]
   pub place:   Vec<String>,
   #[serde(default)]
   pub concept: Vec<String>,
}

/// エリアハッシュタグ DTO
#[derive(Debug, Serialize)]
pub struct AreaDto {
   pub id:        i64,
   pub area_code: i32,
   pub area_name: String,
}

impl From<TourArea> for AreaDto {
   fn from(area: TourArea) -> Self {
      Self {
         id:        area.id(),
         area_code: area.area_code().as_i32(),
         area_name: area.area_name().to_string(),
      }
   }
}

/// カテゴリハッシュタグ DTO
#[derive(Debug, Serialize)]
pub struct CategoryDto {
   pub id:            i64,
   pub category_code: String,
   pub category_name: String,
}

impl From<TourCategory> for CategoryDto {
   fn from(category: TourCategory) -> Self {
      Self {
         id:            category.id(),
         category_code: category.category_code().as_str().to_string(),
         category_name: category.category_name().to_string(),
      }
   }
}

/// ハッシュタグ取得レスポンス
///
/// フィールド順（area, category, message）は旧 API のレスポンス形を保つ。
#[derive(Debug, Serialize)]
pub struct TotalHashtagResponse {
   pub area:     Vec<AreaDto>,
   pub category: Vec<CategoryDto>,
   pub message:  String,
}

impl From<TotalHashtag> for TotalHashtagResponse {
   fn from(hashtag: TotalHashtag) -> Self {
      Self {
         area:     hashtag.area.into_iter().map(AreaDto::from).collect(),
         category: hashtag.category.into_iter().map(CategoryDto::from).collect(),
         message:  OK_MESSAGE.to_string(),
      }
   }
}

/// 疎通確認
///
/// ## エンドポイント
/// GET /test
///
/// 認証ゲートを通過できることの確認に使う。レスポンスは固定。
pub async fn ping() -> Json<MessageResponse> {
   Json(MessageResponse::new(PING_MESSAGE))
}

/// テスト回答を登録する
///
/// ## エンドポイント
/// POST /test/post-test
///
/// `test` フィールドが無い場合はユースケースを呼ばずに
/// `Input body - test` を返す。
#[tracing::instrument(skip_all)]
pub async fn post_test(
   State(state): State<Arc<TestState>>,
   Extension(user): Extension<CurrentUser>,
   Json(body): Json<PostTestBody>,
) -> Result<Response, ApiError> {
   let Some(dto) = body.test else {
      return Ok(Json(MessageResponse::new(MISSING_TEST_MESSAGE)).into_response());
   };

   let answers = TestAnswers::new(dto.place, dto.concept)?;
   let message = state.usecase.enroll(user.id, answers).await?;

   Ok(Json(MessageResponse::new(message)).into_response())
}

/// 回答にマッチするハッシュタグを取得する
///
/// ## エンドポイント
/// GET /test/get-test
///
/// テスト未受験のユーザーには `Not Exist Test` を返す。
#[tracing::instrument(skip_all)]
pub async fn get_test(
   State(state): State<Arc<TestState>>,
   Extension(user): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
   let Some(hashtag) = state.usecase.total_hashtag(user.id).await? else {
      return Ok(Json(MessageResponse::new(NOT_EXIST_TEST_MESSAGE)).into_response());
   };

   Ok(Json(TotalHashtagResponse::from(hashtag)).into_response())
}
