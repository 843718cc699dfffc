//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`UserId`] は整数 ID をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、変更は永続化層のみが行う
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//!
//! ユーザーは最大ひとつの嗜好テストを指す（`current_test`）。テストを
//! 受け直した場合も新しい行を積まず、既存の行が更新される。

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, preference::TestId};

/// ユーザー ID（一意識別子）
///
/// データベースの BIGSERIAL 主キーをラップする。
/// Newtype パターンで他エンティティの ID との取り違えを防ぐ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
   /// 既存の整数値からユーザー ID を作成する
   pub fn new(value: i64) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
   /// メールアドレスを作成する
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない
   /// - `local@domain` の形式である
   /// - 最大 255 文字
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.is_empty() {
         return Err(DomainError::Validation(
            "メールアドレスは必須です".to_string(),
         ));
      }

      let Some((local, domain)) = value.split_once('@') else {
         return Err(DomainError::Validation(
            "メールアドレスの形式が不正です".to_string(),
         ));
      };

      if local.is_empty() || domain.is_empty() {
         return Err(DomainError::Validation(
            "メールアドレスの形式が不正です".to_string(),
         ));
      }

      if value.len() > 255 {
         return Err(DomainError::Validation(
            "メールアドレスは255文字以内である必要があります".to_string(),
         ));
      }

      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl std::fmt::Display for Email {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// ユーザーエンティティ
///
/// 認証自体は外部の認証サービスが担うため、このエンティティは
/// プロフィールと嗜好テストへの参照のみを持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
   id:           UserId,
   email:        Email,
   name:         String,
   current_test: Option<TestId>,
   created_at:   DateTime<Utc>,
   updated_at:   DateTime<Utc>,
}

impl User {
   /// データベースの行からユーザーを復元する
   ///
   /// バリデーション済みの永続化データを前提とするため、検証は行わない。
   pub fn from_db(
      id: UserId,
      email: Email,
      name: String,
      current_test: Option<TestId>,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         email,
         name,
         current_test,
         created_at,
         updated_at,
      }
   }

   pub fn id(&self) -> UserId {
      self.id
   }

   pub fn email(&self) -> &Email {
      &self.email
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   /// 現在の嗜好テスト ID
   ///
   /// テスト未受験のユーザーは `None`。
   pub fn current_test(&self) -> Option<TestId> {
      self.current_test
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[test]
   fn test_正しいメールアドレスを作成できる() {
      let email = Email::new("user@example.com").unwrap();
      assert_eq!(email.as_str(), "user@example.com");
   }

   #[rstest]
   #[case("")]
   #[case("no-at-mark")]
   #[case("@no-local")]
   #[case("no-domain@")]
   fn test_不正なメールアドレスは拒否される(#[case] value: &str) {
      assert!(Email::new(value).is_err());
   }

   #[test]
   fn test_256文字以上のメールアドレスは拒否される() {
      let local = "a".repeat(250);
      let value = format!("{local}@ex.com");
      assert!(Email::new(value).is_err());
   }

   #[test]
   fn test_テスト未受験ユーザーのcurrent_testはnone() {
      let now = chrono::Utc::now();
      let user = User::from_db(
         UserId::new(1),
         Email::new("user@example.com").unwrap(),
         "ユーザーA".to_string(),
         None,
         now,
         now,
      );

      assert_eq!(user.current_test(), None);
   }

   #[test]
   fn test_受験済みユーザーはテストidを返す() {
      let now = chrono::Utc::now();
      let user = User::from_db(
         UserId::new(1),
         Email::new("user@example.com").unwrap(),
         "ユーザーA".to_string(),
         Some(TestId::new(42)),
         now,
         now,
      );

      assert_eq!(user.current_test(), Some(TestId::new(42)));
   }
}
