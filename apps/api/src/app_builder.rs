//! # アプリケーション構築
//!
//! State の注入とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ルーターを `main` から切り出しているのは、統合テストが本物の
//! ルーター（認証ミドルウェア込み）に対して `oneshot` でリクエストを
//! 流せるようにするため。

use std::sync::Arc;

use axum::{
   Router,
   middleware::from_fn_with_state,
   routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
   handler::{TestState, get_test, health_check, ping, post_test},
   middleware::{AuthState, authenticate_user},
};

/// ルーターを構築する
///
/// `/test` 配下の 3 ルートは認証ミドルウェアを通し、`/health` は
/// ゲートの外に置く。
pub fn build_app(test_state: Arc<TestState>, auth_state: AuthState) -> Router {
   let test_routes = Router::new()
      .route("/test", get(ping))
      .route("/test/post-test", post(post_test))
      .route("/test/get-test", get(get_test))
      .with_state(test_state)
      .layer(from_fn_with_state(auth_state, authenticate_user));

   Router::new()
      .route("/health", get(health_check))
      .merge(test_routes)
      .layer(TraceLayer::new_for_http())
}
