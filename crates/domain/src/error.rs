//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 入力値がビジネスルールに違反している場合に使用する。
   ///
   /// # 例
   ///
   /// - 選択肢が空文字列
   /// - 選択数の上限超過
   /// - 不正なフォーマット
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// エンティティが見つからない
   ///
   /// 指定された ID のエンティティがデータベースに存在しない場合に使用する。
   /// `entity_type` にはエンティティの種類（"User", "PreferenceTest" など）を
   /// 指定し、エラーメッセージを具体的にする。
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（"User", "PreferenceTest" など）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}
