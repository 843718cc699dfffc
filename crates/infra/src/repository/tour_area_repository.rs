//! # TourAreaRepository
//!
//! 観光エリアマスタ（`tour_areas` テーブル）の読み取りを担当するリポジトリ。
//!
//! マスタデータは別経路（バッチ取り込み）で投入されるため、この API からの
//! 書き込み操作は存在しない。

use async_trait::async_trait;
use sqlx::PgPool;
use tourmate_domain::tour::{AreaCode, TourArea};

use crate::error::InfraError;

/// 観光エリアリポジトリトレイト
#[async_trait]
pub trait TourAreaRepository: Send + Sync {
   /// 全エリアを行 ID 昇順で取得
   async fn find_all(&self) -> Result<Vec<TourArea>, InfraError>;

   /// エリア名の一致するエリアを行 ID 昇順で取得
   ///
   /// 存在しない名前は無視し、見つかったエリアのみ返す。
   /// 空の配列を渡した場合は空の Vec を返す。
   async fn find_by_names(&self, names: &[String]) -> Result<Vec<TourArea>, InfraError>;
}

/// `tour_areas` テーブルの行
#[derive(sqlx::FromRow)]
struct TourAreaRow {
   id:        i64,
   area_code: i32,
   area_name: String,
}

impl TourAreaRow {
   fn into_domain(self) -> TourArea {
      TourArea::from_db(self.id, AreaCode::new(self.area_code), self.area_name)
   }
}

/// PostgreSQL 実装の TourAreaRepository
#[derive(Debug, Clone)]
pub struct PostgresTourAreaRepository {
   pool: PgPool,
}

impl PostgresTourAreaRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TourAreaRepository for PostgresTourAreaRepository {
   async fn find_all(&self) -> Result<Vec<TourArea>, InfraError> {
      let rows = sqlx::query_as::<_, TourAreaRow>(
         r#"
            SELECT
                id,
                area_code,
                area_name
            FROM tour_areas
            ORDER BY id
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(TourAreaRow::into_domain).collect())
   }

   async fn find_by_names(&self, names: &[String]) -> Result<Vec<TourArea>, InfraError> {
      if names.is_empty() {
         return Ok(Vec::new());
      }

      let rows = sqlx::query_as::<_, TourAreaRow>(
         r#"
            SELECT
                id,
                area_code,
                area_name
            FROM tour_areas
            WHERE area_name = ANY($1)
            ORDER BY id
            "#,
      )
      .bind(names)
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(TourAreaRow::into_domain).collect())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresTourAreaRepository>();
   }
}
