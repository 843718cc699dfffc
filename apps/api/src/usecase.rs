//! # ユースケース
//!
//! ハンドラから呼び出されるビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - リポジトリトレイト（`Arc<dyn ...>`）にのみ依存し、単体テストでは
//!   インメモリのモックに差し替える
//! - ハンドラは薄く保ち、判断はすべてこの層に置く


pub use test::{TestUseCaseImpl, TotalHashtag};
