//! # TourMate API ライブラリ
//!
//! ハンドラ・ユースケース・ミドルウェアを公開する。
//! ルーター構築（[`app_builder::build_app`]）を統合テストから
//! 利用できるようにするためのライブラリクレート。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
