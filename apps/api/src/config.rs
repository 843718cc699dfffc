//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! 旧構成の「環境名で設定ファイルのエントリを選ぶ」方式は取らず、
//! すべて環境変数を直接読む。必須の値が欠けている場合は起動時に
//! 失敗させ、不完全な状態でリクエストを受け付けない。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続 URL
   pub database_url: String,
   /// Redis 接続 URL（セッションストア）
   pub redis_url: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   ///
   /// | 変数名 | 必須 | 説明 |
   /// |--------|------|------|
   /// | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
   /// | `API_PORT` | **Yes** | ポート番号 |
   /// | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
   /// | `REDIS_URL` | **Yes** | Redis 接続 URL |
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("API_PORT")
            .expect("API_PORT が設定されていません")
            .parse()
            .expect("API_PORT は有効なポート番号である必要があります"),
         database_url: env::var("DATABASE_URL").expect("DATABASE_URL が設定されていません"),
         redis_url: env::var("REDIS_URL").expect("REDIS_URL が設定されていません"),
      })
   }
}
