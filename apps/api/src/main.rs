//! # TourMate API サーバー
//!
//! ツアーレコメンドアプリのバックエンド API。
//!
//! ## 役割
//!
//! - **嗜好テスト**: ユーザーの回答（place / concept の選択）を保存
//! - **ハッシュタグマッチング**: 回答にマッチするエリア・カテゴリを返す
//!
//! 認証（ログイン・セッション発行）は外部の認証サービスが担当し、
//! この API はセッション Cookie の検証のみを行う。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `REDIS_URL` | **Yes** | Redis 接続 URL（セッションストア） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p tourmate-api
//!
//! # 本番環境
//! API_PORT=3000 DATABASE_URL=postgres://... REDIS_URL=redis://... \
//!     cargo run -p tourmate-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tourmate_api::{
   app_builder::build_app,
   config::ApiConfig,
   handler::TestState,
   middleware::AuthState,
   usecase::TestUseCaseImpl,
};
use tourmate_infra::{
   RedisSessionManager,
   db,
   repository::{
      PostgresPreferenceTestRepository,
      PostgresTourAreaRepository,
      PostgresTourCategoryRepository,
      PostgresTourContentRepository,
      PostgresUserRepository,
   },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tourmate=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // セッションストア（Redis）へ接続
   let session_manager = RedisSessionManager::new(&config.redis_url)
      .await
      .expect("Redis 接続に失敗しました");
   tracing::info!("セッションストアに接続しました");

   // リポジトリを静的に列挙して構築し、ユースケースへ注入する
   let usecase = TestUseCaseImpl::new(
      Arc::new(PostgresUserRepository::new(pool.clone())),
      Arc::new(PostgresPreferenceTestRepository::new(pool.clone())),
      Arc::new(PostgresTourAreaRepository::new(pool.clone())),
      Arc::new(PostgresTourCategoryRepository::new(pool.clone())),
      Arc::new(PostgresTourContentRepository::new(pool)),
   );

   let test_state = Arc::new(TestState { usecase });
   let auth_state = AuthState {
      session_manager: Arc::new(session_manager),
   };

   // ルーター構築
   let app = build_app(test_state, auth_state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
