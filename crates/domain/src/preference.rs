//! # 嗜好テスト
//!
//! ユーザーが提出するアンケート（「テスト」）のエンティティと値オブジェクト。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`PreferenceTest`] | テスト | ユーザーが提出した場所・コンセプトの選択 |
//! | [`TestAnswers`] | 回答 | 検証済みの place / concept 選択リスト |
//!
//! ソフトウェアテストと紛らわしいが、ドメイン上の「テスト」は
//! 嗜好アンケートを指す。
//!
//! ## ワイルドカード
//!
//! 回答には全件指定のワイルドカードが存在する:
//!
//! - place: `"아무데나"`（どこでも）→ 全エリア
//! - concept: `"전체"`（すべて）→ 全カテゴリ
//!
//! ワイルドカードの解釈はマッチング側（ユースケース層）が行い、
//! この層では通常の選択肢と同様に保持する。

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// place 回答の全件ワイルドカード（「どこでも」）
pub const PLACE_WILDCARD: &str = "아무데나";

/// concept 回答の全件ワイルドカード（「すべて」）
pub const CONCEPT_WILDCARD: &str = "전체";

/// 1 リストあたりの選択数の上限
const MAX_SELECTIONS: usize = 30;

/// 嗜好テスト ID（一意識別子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TestId(i64);

impl TestId {
   /// 既存の整数値からテスト ID を作成する
   pub fn new(value: i64) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// 検証済みのテスト回答（値オブジェクト）
///
/// place（行きたい場所）と concept（旅のコンセプト）の選択リストを保持する。
/// 生成時にバリデーションを通すため、保持している回答は常に正規形
/// （トリム済み・空文字なし・上限内）である。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAnswers {
   place:   Vec<String>,
   concept: Vec<String>,
}

impl TestAnswers {
   /// テスト回答を作成する
   ///
   /// # バリデーション
   ///
   /// - place・concept の両方が空のリストではない
   /// - 各選択肢はトリム後に空文字列ではない
   /// - 各リストの選択数は 30 件以内
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(place: Vec<String>, concept: Vec<String>) -> Result<Self, DomainError> {
      if place.is_empty() && concept.is_empty() {
         return Err(DomainError::Validation(
            "place と concept の少なくとも一方を選択してください".to_string(),
         ));
      }

      if place.len() > MAX_SELECTIONS || concept.len() > MAX_SELECTIONS {
         return Err(DomainError::Validation(format!(
            "選択数は各リスト {MAX_SELECTIONS} 件以内である必要があります"
         )));
      }

      let normalize = |values: Vec<String>, label: &str| -> Result<Vec<String>, DomainError> {
         values
            .into_iter()
            .map(|v| {
               let trimmed = v.trim().to_string();
               if trimmed.is_empty() {
                  Err(DomainError::Validation(format!(
                     "{label} に空の選択肢は指定できません"
                  )))
               } else {
                  Ok(trimmed)
               }
            })
            .collect()
      };

      Ok(Self {
         place:   normalize(place, "place")?,
         concept: normalize(concept, "concept")?,
      })
   }

   /// 場所の選択リスト
   pub fn place(&self) -> &[String] {
      &self.place
   }

   /// コンセプトの選択リスト
   pub fn concept(&self) -> &[String] {
      &self.concept
   }

   /// place がワイルドカード指定を含むか
   pub fn wants_any_place(&self) -> bool {
      self.place.iter().any(|p| p == PLACE_WILDCARD)
   }

   /// concept がワイルドカード指定を含むか
   pub fn wants_any_concept(&self) -> bool {
      self.concept.iter().any(|c| c == CONCEPT_WILDCARD)
   }
}

/// 嗜好テストエンティティ
///
/// `tests` テーブルの 1 行に対応する。ユーザー側が `current_test` で
/// この行を指す（1 ユーザー最大 1 テスト）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTest {
   id:         TestId,
   answers:    TestAnswers,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl PreferenceTest {
   /// データベースの行から嗜好テストを復元する
   pub fn from_db(
      id: TestId,
      answers: TestAnswers,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         answers,
         created_at,
         updated_at,
      }
   }

   pub fn id(&self) -> TestId {
      self.id
   }

   pub fn answers(&self) -> &TestAnswers {
      &self.answers
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
   fn test_正しい回答を作成できる() {
      let answers = TestAnswers::new(
         vec!["서울".to_string(), "제주도".to_string()],
         vec!["산".to_string()],
      )
      .unwrap();

      assert_eq!(answers.place(), &["서울", "제주도"]);
      assert_eq!(answers.concept(), &["산"]);
   }

   #[test]
   fn test_選択肢はトリムされる() {
      let answers =
         TestAnswers::new(vec!["  서울  ".to_string()], vec!["산\n".to_string()]).unwrap();

      assert_eq!(answers.place(), &["서울"]);
      assert_eq!(answers.concept(), &["산"]);
   }

   #[test]
   fn test_両方空のリストは拒否される() {
      assert!(TestAnswers::new(vec![], vec![]).is_err());
   }

   #[test]
   fn test_片方だけの回答は許容される() {
      let answers = TestAnswers::new(vec!["서울".to_string()], vec![]).unwrap();
      assert!(answers.concept().is_empty());
   }

   #[rstest]
   #[case(vec!["".to_string()], vec![])]
   #[case(vec!["   ".to_string()], vec![])]
   #[case(vec![], vec!["\t".to_string()])]
   fn test_空白のみの選択肢は拒否される(
      #[case] place: Vec<String>,
      #[case] concept: Vec<String>,
   ) {
      assert!(TestAnswers::new(place, concept).is_err());
   }

   #[test]
   fn test_上限を超える選択数は拒否される() {
      let place: Vec<String> = (0..31).map(|i| format!("지역{i}")).collect();
      assert!(TestAnswers::new(place, vec![]).is_err());
   }

   #[test]
   fn test_ワイルドカードを判定できる() {
      let answers = TestAnswers::new(
         vec![PLACE_WILDCARD.to_string()],
         vec![CONCEPT_WILDCARD.to_string()],
      )
      .unwrap();

      assert!(answers.wants_any_place());
      assert!(answers.wants_any_concept());
   }

   #[test]
   fn test_通常の選択はワイルドカードではない() {
      let answers = TestAnswers::new(vec!["서울".to_string()], vec!["산".to_string()]).unwrap();

      assert!(!answers.wants_any_place());
      assert!(!answers.wants_any_concept());
   }
}
