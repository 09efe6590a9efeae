// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Database layer for the bazaar marketplace server.
//!
//! This crate provides storage access for the marketplace aggregates:
//!
//! - **Statement builders** ([`sql`]): pure functions producing SQL text
//!   plus bind arguments, with no connection and no clock
//! - **Repositories**: one store trait and one SQLite implementation per
//!   aggregate (adverts, users, deals, likes, categories), executing built
//!   statements against a [`sqlx::SqlitePool`] and mapping rows to the
//!   records in `bazaar-core`
//! - **Pool construction** ([`pool::create_pool`]) and in-memory test
//!   fixtures ([`testing`])
//!
//! Storage failures are classified into [`DbError`]; absence on read paths
//! is `Ok(None)` / `Ok(vec![])`, never an error.

pub mod advert;
pub mod category;
pub mod deal;
pub mod error;
pub mod liked;
pub mod pool;
pub mod sql;
pub mod testing;
pub mod user;

pub use advert::{AdvertRepository, AdvertStore};
pub use category::{CategoryRepository, CategoryStore};
pub use deal::{DealRepository, DealStore};
pub use error::{DbError, Result};
pub use liked::{LikedRepository, LikedStore};
pub use pool::create_pool;
pub use user::{UserRepository, UserStore};
