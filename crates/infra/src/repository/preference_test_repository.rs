//! # PreferenceTestRepository
//!
//! 嗜好テスト（`tests` テーブル）の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 ユーザー最大 1 テスト**: ユーザーは `users.test_idx` で自分の
//!   テスト行を指す。再受験時は行を積まず、既存行の回答を上書きする
//! - **登録はトランザクション**: テスト行の作成と `test_idx` の更新は
//!   ひとつのトランザクションで行い、片方だけが残る状態を作らない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tourmate_domain::{
   preference::{PreferenceTest, TestAnswers, TestId},
   user::UserId,
};

use crate::error::InfraError;

/// 嗜好テストリポジトリトレイト
#[async_trait]
pub trait PreferenceTestRepository: Send + Sync {
   /// ID で嗜好テストを検索
   async fn find_by_id(&self, id: TestId) -> Result<Option<PreferenceTest>, InfraError>;

   /// ユーザーの回答を登録する
   ///
   /// ユーザーが未受験なら `tests` 行を新規作成して `users.test_idx` を
   /// 向け、受験済みなら既存行の回答を上書きする。どちらの場合も
   /// 登録先のテスト ID を返す。
   ///
   /// 呼び出し側はユーザーの存在を確認済みであること。行が消えていた
   /// 場合は `InfraErrorKind::Unexpected` を返す。
   async fn enroll(&self, user_id: UserId, answers: &TestAnswers) -> Result<TestId, InfraError>;
}

/// `tests` テーブルの行
#[derive(sqlx::FromRow)]
struct PreferenceTestRow {
   id:         i64,
   place:      Vec<String>,
   concept:    Vec<String>,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl PreferenceTestRow {
   fn into_domain(self) -> Result<PreferenceTest, InfraError> {
      let answers = TestAnswers::new(self.place, self.concept)
         .map_err(|e| InfraError::unexpected(e.to_string()))?;

      Ok(PreferenceTest::from_db(
         TestId::new(self.id),
         answers,
         self.created_at,
         self.updated_at,
      ))
   }
}

/// PostgreSQL 実装の PreferenceTestRepository
#[derive(Debug, Clone)]
pub struct PostgresPreferenceTestRepository {
   pool: PgPool,
}

impl PostgresPreferenceTestRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl PreferenceTestRepository for PostgresPreferenceTestRepository {
   async fn find_by_id(&self, id: TestId) -> Result<Option<PreferenceTest>, InfraError> {
      let row = sqlx::query_as::<_, PreferenceTestRow>(
         r#"
            SELECT
                id,
                place,
                concept,
                created_at,
                updated_at
            FROM tests
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

   async fn enroll(&self, user_id: UserId, answers: &TestAnswers) -> Result<TestId, InfraError> {
      let mut tx = self.pool.begin().await?;

      // 同一ユーザーの並行登録を直列化するため行ロックを取る
      let current: Option<(Option<i64>,)> =
         sqlx::query_as("SELECT test_idx FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id.as_i64())
            .fetch_optional(&mut *tx)
            .await?;

      let Some((current_test,)) = current else {
         return Err(InfraError::unexpected(format!(
            "登録対象のユーザー行が存在しません: {user_id}"
         )));
      };

      let test_id = match current_test {
         Some(test_id) => {
            sqlx::query(
               r#"
                  UPDATE tests
                  SET place = $2, concept = $3, updated_at = NOW()
                  WHERE id = $1
                  "#,
            )
            .bind(test_id)
            .bind(answers.place())
            .bind(answers.concept())
            .execute(&mut *tx)
            .await?;

            test_id
         }
         None => {
            let (test_id,): (i64,) = sqlx::query_as(
               r#"
                  INSERT INTO tests (place, concept)
                  VALUES ($1, $2)
                  RETURNING id
                  "#,
            )
            .bind(answers.place())
            .bind(answers.concept())
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query("UPDATE users SET test_idx = $2, updated_at = NOW() WHERE id = $1")
               .bind(user_id.as_i64())
               .bind(test_id)
               .execute(&mut *tx)
               .await?;

            test_id
         }
      };

      tx.commit().await?;

      Ok(TestId::new(test_id))
   }
}
