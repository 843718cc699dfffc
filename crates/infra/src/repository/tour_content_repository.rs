//! # TourContentRepository
//!
//! 観光コンテンツ（`tour_contents` テーブル）のハッシュタグ読み取りを担当する
//! リポジトリ。
//!
//! マッチングに必要なのはコンテンツ本体ではなく「どのエリア・カテゴリの組に
//! コンテンツが実在するか」だけなので、DISTINCT な組のみを返す。

use async_trait::async_trait;
use sqlx::PgPool;
use tourmate_domain::tour::{AreaCode, CategoryCode};

use crate::error::InfraError;

/// 観光コンテンツリポジトリトレイト
#[async_trait]
pub trait TourContentRepository: Send + Sync {
   /// 指定のエリア・カテゴリに該当するコンテンツのハッシュタグ組を取得
   ///
   /// 指定した `area_codes` と `category_codes` の直積のうち、実際に
   /// コンテンツが存在する `(area_code, category_code)` の組を重複なしで
   /// 返す。どちらかの配列が空の場合は空の Vec を返す。
   async fn find_tagged_pairs(
      &self,
      area_codes: &[AreaCode],
      category_codes: &[CategoryCode],
   ) -> Result<Vec<(AreaCode, CategoryCode)>, InfraError>;
}

/// PostgreSQL 実装の TourContentRepository
#[derive(Debug, Clone)]
pub struct PostgresTourContentRepository {
   pool: PgPool,
}

impl PostgresTourContentRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TourContentRepository for PostgresTourContentRepository {
   async fn find_tagged_pairs(
      &self,
      area_codes: &[AreaCode],
      category_codes: &[CategoryCode],
   ) -> Result<Vec<(AreaCode, CategoryCode)>, InfraError> {
      if area_codes.is_empty() || category_codes.is_empty() {
         return Ok(Vec::new());
      }

      let area_values: Vec<i32> = area_codes.iter().map(AreaCode::as_i32).collect();
      let category_values: Vec<String> = category_codes
         .iter()
         .map(|c| c.as_str().to_string())
         .collect();

      let rows: Vec<(i32, String)> = sqlx::query_as(
         r#"
            SELECT DISTINCT
                area_code,
                category_code
            FROM tour_contents
            WHERE area_code = ANY($1) AND category_code = ANY($2)
            "#,
      )
      .bind(&area_values)
      .bind(&category_values)
      .fetch_all(&self.pool)
      .await?;

      Ok(rows
         .into_iter()
         .map(|(area, category)| (AreaCode::new(area), CategoryCode::new(category)))
         .collect())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresTourContentRepository>();
   }
}
