//! # 認証ミドルウェア
//!
//! `session_id` Cookie をセッションストアで検証し、リクエストに
//! 認証済みユーザーを添付する。
//!
//! セッションの発行（ログイン）は外部の認証サービスの責務で、この
//! ミドルウェアは読み取りのみを行う。検証に通らないリクエストは
//! ハンドラ本体に到達しない。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = AuthState { session_manager };
//!
//! Router::new()
//!     .route("/test", get(ping))
//!     .layer(from_fn_with_state(auth_state, authenticate_user))
//! ```

use std::sync::Arc;

use axum::{
   body::Body,
   extract::{Request, State},
   middleware::Next,
   response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tourmate_domain::user::UserId;
use tourmate_infra::SessionManager;

use crate::error::ApiError;

/// Cookie 名
const SESSION_COOKIE_NAME: &str = "session_id";

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthState {
   pub session_manager: Arc<dyn SessionManager>,
}

/// リクエストスコープの認証済みユーザー
///
/// ミドルウェアが request extensions に挿入し、ハンドラが
/// `Extension<CurrentUser>` で取り出す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
   pub id: UserId,
}

/// 認証ミドルウェア
///
/// Cookie のセッション ID をセッションストアで照合し、認証済みユーザーを
/// リクエストに添付する。セッションが存在しない場合は 401 を返す。
/// セッションストア障害は 500 として上位のエラー境界に乗せる。
pub async fn authenticate_user(
   State(state): State<AuthState>,
   jar: CookieJar,
   mut request: Request<Body>,
   next: Next,
) -> Response {
   let Some(session_id) = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string()) else {
      return ApiError::Unauthorized.into_response();
   };

   let session = match state.session_manager.get(&session_id).await {
      Ok(Some(data)) => data,
      Ok(None) => return ApiError::Unauthorized.into_response(),
      Err(e) => return ApiError::Infra(e).into_response(),
   };

   request.extensions_mut().insert(CurrentUser {
      id: session.user_id(),
   });

   next.run(request).await
}
