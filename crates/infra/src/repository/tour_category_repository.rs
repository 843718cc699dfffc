//! # TourCategoryRepository
//!
//! 観光カテゴリマスタ（`tour_categories` テーブル）の読み取りを担当する
//! リポジトリ。エリアと同様、書き込みはバッチ取り込み側の責務。

use async_trait::async_trait;
use sqlx::PgPool;
use tourmate_domain::tour::{CategoryCode, TourCategory};

use crate::error::InfraError;

/// 観光カテゴリリポジトリトレイト
#[async_trait]
pub trait TourCategoryRepository: Send + Sync {
   /// 全カテゴリを行 ID 昇順で取得
   async fn find_all(&self) -> Result<Vec<TourCategory>, InfraError>;

   /// カテゴリ名の一致するカテゴリを行 ID 昇順で取得
   ///
   /// 存在しない名前は無視し、見つかったカテゴリのみ返す。
   /// 空の配列を渡した場合は空の Vec を返す。
   async fn find_by_names(&self, names: &[String]) -> Result<Vec<TourCategory>, InfraError>;
}

/// `tour_categories` テーブルの行
#[derive(sqlx::FromRow)]
struct TourCategoryRow {
   id:            i64,
   category_code: String,
   category_name: String,
}

impl TourCategoryRow {
   fn into_domain(self) -> TourCategory {
      TourCategory::from_db(
         self.id,
         CategoryCode::new(self.category_code),
         self.category_name,
      )
   }
}

/// PostgreSQL 実装の TourCategoryRepository
#[derive(Debug, Clone)]
pub struct PostgresTourCategoryRepository {
   pool: PgPool,
}

impl PostgresTourCategoryRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TourCategoryRepository for PostgresTourCategoryRepository {
   async fn find_all(&self) -> Result<Vec<TourCategory>, InfraError> {
      let rows = sqlx::query_as::<_, TourCategoryRow>(
         r#"
            SELECT
                id,
                category_code,
                category_name
            FROM tour_categories
            ORDER BY id
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(TourCategoryRow::into_domain).collect())
   }

   async fn find_by_names(&self, names: &[String]) -> Result<Vec<TourCategory>, InfraError> {
      if names.is_empty() {
         return Ok(Vec::new());
      }

      let rows = sqlx::query_as::<_, TourCategoryRow>(
         r#"
            SELECT
                id,
                category_code,
                category_name
            FROM tour_categories
            WHERE category_name = ANY($1)
            ORDER BY id
            "#,
      )
      .bind(names)
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(TourCategoryRow::into_domain).collect())
   }
}
