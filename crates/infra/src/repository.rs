//! # リポジトリ実装
//!
//! エンティティごとのリポジトリトレイトと、その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **静的な列挙**: リポジトリは起動時に明示的に構築する。モデル定義の
//!   ディレクトリ走査のような動的な登録は行わない
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod preference_test_repository;
pub mod tour_area_repository;
pub mod tour_category_repository;
pub mod tour_content_repository;
pub mod user_repository;

pub use preference_test_repository::{PostgresPreferenceTestRepository, PreferenceTestRepository};
pub use tour_area_repository::{PostgresTourAreaRepository, TourAreaRepository};
pub use tour_category_repository::{PostgresTourCategoryRepository, TourCategoryRepository};
pub use tour_content_repository::{PostgresTourContentRepository, TourContentRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};
