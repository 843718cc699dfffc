//! # セッション管理
//!
//! Redis を使用した認証セッションの管理を提供する。
//!
//! セッションの発行（ログイン）は外部の認証サービスが行う。この API は
//! 同じ Redis を参照し、リクエストに付与された `session_id` Cookie を
//! 検証してユーザーを特定する。
//!
//! ## Redis キー設計
//!
//! | キー | 値 | TTL |
//! |-----|-----|-----|
//! | `session:{session_id}` | SessionData (JSON) | 28800秒（8時間） |

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use tourmate_domain::user::UserId;
use uuid::Uuid;

use crate::InfraError;

/// セッションの有効期限（秒）
/// 8時間 = 28800秒
const SESSION_TTL_SECONDS: u64 = 28800;

/// セッションデータ
///
/// Redis に JSON 形式で保存されるセッション情報。
/// ログイン成功時に作成され、ログアウトまたは TTL 経過で削除される。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
   user_id: UserId,
   email: String,
   name: String,
   created_at: DateTime<Utc>,
}

impl SessionData {
   /// 新しいセッションデータを作成する
   ///
   /// `created_at` は現在時刻で初期化される。
   pub fn new(user_id: UserId, email: String, name: String) -> Self {
      Self {
         user_id,
         email,
         name,
         created_at: Utc::now(),
      }
   }

   pub fn user_id(&self) -> UserId {
      self.user_id
   }

   pub fn email(&self) -> &str {
      &self.email
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }
}

/// セッション管理トレイト
///
/// セッションの作成・取得・削除を行う。
/// 実装は Redis を使用する [`RedisSessionManager`] を参照。
#[async_trait]
pub trait SessionManager: Send + Sync {
   /// セッションを作成し、セッション ID を返す
   ///
   /// # 戻り値
   ///
   /// 生成されたセッション ID（UUID v4）
   async fn create(&self, data: &SessionData) -> Result<String, InfraError>;

   /// セッションを取得する
   ///
   /// # 戻り値
   ///
   /// セッションが存在すれば `Some(SessionData)`、なければ `None`
   async fn get(&self, session_id: &str) -> Result<Option<SessionData>, InfraError>;

   /// セッションを削除する
   ///
   /// 存在しないセッションを削除しても成功とする。
   async fn delete(&self, session_id: &str) -> Result<(), InfraError>;
}

/// Redis を使用したセッションマネージャ
pub struct RedisSessionManager {
   conn: ConnectionManager,
}

impl RedisSessionManager {
   /// 新しい RedisSessionManager を作成する
   ///
   /// # 引数
   ///
   /// - `redis_url`: Redis 接続 URL（例: `redis://localhost:6379`）
   pub async fn new(redis_url: &str) -> Result<Self, InfraError> {
      let client = redis::Client::open(redis_url)?;
      let conn = ConnectionManager::new(client).await?;
      Ok(Self { conn })
   }

   /// セッションキーを生成する
   fn session_key(session_id: &str) -> String {
      format!("session:{session_id}")
   }
}

#[async_trait]
impl SessionManager for RedisSessionManager {
   async fn create(&self, data: &SessionData) -> Result<String, InfraError> {
      // UUID v4 でセッション ID を生成（暗号論的に安全なランダム値）
      let session_id = Uuid::new_v4().to_string();
      let key = Self::session_key(&session_id);
      let json = serde_json::to_string(data)?;

      let mut conn = self.conn.clone();
      let _: () = conn.set_ex(&key, json, SESSION_TTL_SECONDS).await?;

      Ok(session_id)
   }

   async fn get(&self, session_id: &str) -> Result<Option<SessionData>, InfraError> {
      let key = Self::session_key(session_id);
      let mut conn = self.conn.clone();

      let result: Option<String> = conn.get(&key).await?;

      match result {
         Some(json) => {
            let data: SessionData = serde_json::from_str(&json)?;
            Ok(Some(data))
         }
         None => Ok(None),
      }
   }

   async fn delete(&self, session_id: &str) -> Result<(), InfraError> {
      let key = Self::session_key(session_id);
      let mut conn = self.conn.clone();
      let _: () = conn.del(&key).await?;
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_セッションデータはjsonラウンドトリップできる() {
      let data = SessionData::new(
         UserId::new(7),
         "user@example.com".to_string(),
         "ユーザーA".to_string(),
      );

      let json = serde_json::to_string(&data).unwrap();
      let restored: SessionData = serde_json::from_str(&json).unwrap();

      assert_eq!(restored.user_id(), UserId::new(7));
      assert_eq!(restored.email(), "user@example.com");
      assert_eq!(restored.name(), "ユーザーA");
   }

   #[test]
   fn test_セッションキーの形式() {
      assert_eq!(
         RedisSessionManager::session_key("abc-123"),
         "session:abc-123"
      );
   }

   #[test]
   fn test_session_managerトレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync + ?Sized>() {}
      assert_send_sync::<dyn SessionManager>();
      assert_send_sync::<RedisSessionManager>();
   }
}
