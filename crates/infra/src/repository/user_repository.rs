//! # UserRepository
//!
//! ユーザー情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **行→エンティティ変換**: 行構造体を経由してドメイン型へ復元する
//! - **読み取り専用**: ユーザーの作成・削除は外部の認証サービスが行う。
//!   `test_idx`（現在のテストへの参照）の更新は登録トランザクションの
//!   一部として [`PreferenceTestRepository`] 側が担う
//!
//! [`PreferenceTestRepository`]: crate::repository::PreferenceTestRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tourmate_domain::{
   preference::TestId,
   user::{Email, User, UserId},
};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
///
/// ユーザー情報の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait UserRepository: Send + Sync {
   /// ID でユーザーを検索
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(user))`: ユーザーが見つかった場合
   /// - `Ok(None)`: ユーザーが見つからない場合
   /// - `Err(_)`: データベースエラー
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;
}

/// `users` テーブルの行
#[derive(sqlx::FromRow)]
struct UserRow {
   id:         i64,
   email:      String,
   name:       String,
   test_idx:   Option<i64>,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl UserRow {
   fn into_domain(self) -> Result<User, InfraError> {
      Ok(User::from_db(
         UserId::new(self.id),
         Email::new(&self.email).map_err(|e| InfraError::unexpected(e.to_string()))?,
         self.name,
         self.test_idx.map(TestId::new),
         self.created_at,
         self.updated_at,
      ))
   }
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
   pool: PgPool,
}

impl PostgresUserRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
      let row = sqlx::query_as::<_, UserRow>(
         r#"
            SELECT
                id,
                email,
                name,
                test_idx,
                created_at,
                updated_at
            FROM users
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      let Some(row) = row else {
         return Ok(None);
      };

      Ok(Some(row.into_domain()?))
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresUserRepository>();
   }
}
