//! # TourMate ドメイン層
//!
//! ツアーレコメンドのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: [`user::User`],
//!   [`preference::PreferenceTest`]）
//! - **値オブジェクト**: 生成時にバリデーションを実行する不変オブジェクト
//!   （例: [`user::Email`], [`preference::TestAnswers`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、Redis）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティ
//! - [`preference`] - 嗜好テスト（アンケート）エンティティ
//! - [`tour`] - ツアーマスタ（エリア・カテゴリ・コンテンツ）

pub mod error;
pub mod preference;
pub mod tour;
pub mod user;

pub use error::DomainError;
