//! # ツアーマスタ
//!
//! ハッシュタグマッチングの対象となるマスタデータを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`TourArea`] | エリア | 観光エリア（例: area_code 1 = 서울） |
//! | [`TourCategory`] | カテゴリ | 観光カテゴリ（例: A01010400 = 산） |
//! | [`TourContent`] | コンテンツ | エリアとカテゴリのタグを持つ観光コンテンツ |
//!
//! ハッシュタグとは、コンテンツに付与されたエリア・カテゴリの属性のこと。
//! ユーザーのテスト回答はこのハッシュタグに対してマッチングされる。
//!
//! エリアは整数の `area_code`、カテゴリは `"A01010400"` 形式の文字列
//! `category_code` を自然キーとして持ち、コンテンツは両方を参照する。

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// エリアコード（自然キー）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AreaCode(i32);

impl AreaCode {
   pub fn new(value: i32) -> Self {
      Self(value)
   }

   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

/// カテゴリコード（自然キー、例: `"A01010400"`）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct CategoryCode(String);

impl CategoryCode {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 観光エリア
///
/// `id` は表示用の行 ID（レスポンスにそのまま載る）。参照には
/// 自然キーの [`AreaCode`] を使用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourArea {
   id:        i64,
   area_code: AreaCode,
   area_name: String,
}

impl TourArea {
   /// データベースの行からエリアを復元する
   pub fn from_db(id: i64, area_code: AreaCode, area_name: String) -> Self {
      Self {
         id,
         area_code,
         area_name,
      }
   }

   pub fn id(&self) -> i64 {
      self.id
   }

   pub fn area_code(&self) -> AreaCode {
      self.area_code
   }

   pub fn area_name(&self) -> &str {
      &self.area_name
   }
}

/// 観光カテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourCategory {
   id:            i64,
   category_code: CategoryCode,
   category_name: String,
}

impl TourCategory {
   /// データベースの行からカテゴリを復元する
   pub fn from_db(id: i64, category_code: CategoryCode, category_name: String) -> Self {
      Self {
         id,
         category_code,
         category_name,
      }
   }

   pub fn id(&self) -> i64 {
      self.id
   }

   pub fn category_code(&self) -> &CategoryCode {
      &self.category_code
   }

   pub fn category_name(&self) -> &str {
      &self.category_name
   }
}

/// 観光コンテンツ
///
/// エリアとカテゴリのハッシュタグを 1 組ずつ持つ。マッチングでは
/// 「コンテンツが実在するエリア・カテゴリの組」だけが結果に残る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourContent {
   id:            i64,
   title:         String,
   area_code:     AreaCode,
   category_code: CategoryCode,
}

impl TourContent {
   /// データベースの行からコンテンツを復元する
   pub fn from_db(id: i64, title: String, area_code: AreaCode, category_code: CategoryCode) -> Self {
      Self {
         id,
         title,
         area_code,
         category_code,
      }
   }

   pub fn id(&self) -> i64 {
      self.id
   }

   pub fn title(&self) -> &str {
      &self.title
   }

   pub fn area_code(&self) -> AreaCode {
      self.area_code
   }

   pub fn category_code(&self) -> &CategoryCode {
      &self.category_code
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_エリアコードの等価比較ができる() {
      assert_eq!(AreaCode::new(39), AreaCode::new(39));
      assert_ne!(AreaCode::new(1), AreaCode::new(39));
   }

   #[test]
   fn test_カテゴリコードは文字列表現を保持する() {
      let code = CategoryCode::new("A01010400");
      assert_eq!(code.as_str(), "A01010400");
      assert_eq!(code.to_string(), "A01010400");
   }

   #[test]
   fn test_コンテンツは両方のハッシュタグを持つ() {
      let content = TourContent::from_db(
         1,
         "한라산 등반".to_string(),
         AreaCode::new(39),
         CategoryCode::new("A01010400"),
      );

      assert_eq!(content.area_code(), AreaCode::new(39));
      assert_eq!(content.category_code(), &CategoryCode::new("A01010400"));
   }
}
