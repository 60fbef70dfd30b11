// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod time;
pub mod util;

// 時刻関連
pub use time::{fixed_now, minutes_after};

// ユーティリティ関連
pub use util::{DummyClock, FixedRandom, SteppingClock};

// リポジトリ関連
pub use repos::{InMemoryAccountRepo, InMemoryPostRepo};
