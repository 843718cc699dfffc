//! # ミドルウェア
//!
//! API 用のミドルウェアを提供する。

mod auth;

pub use auth::{AuthState, CurrentUser, authenticate_user};
