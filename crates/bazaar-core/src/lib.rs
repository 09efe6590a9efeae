// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core domain types for the bazaar marketplace.
//!
//! This crate holds the plain data shapes shared across the workspace:
//!
//! - **ID newtypes**: type-safe wrappers around database-assigned integer
//!   ids ([`AdvertId`], [`UserId`], [`DealId`], [`LikeId`], [`CategoryId`])
//!   preventing accidental mixing
//! - **Records**: [`Advert`], [`User`], [`Deal`], [`Like`], [`Category`]
//!   and their creation inputs
//!
//! No behavior lives here beyond construction and conversions; all storage
//! access is in `bazaar-server-db`.

pub mod advert;
pub mod category;
pub mod deal;
pub mod liked;
pub mod types;
pub mod user;

pub use advert::{Advert, NewAdvert};
pub use category::Category;
pub use deal::{Deal, DEFAULT_DEAL_ADDRESS};
pub use liked::Like;
pub use types::{AdvertId, CategoryId, DealId, LikeId, UserId};
pub use user::{CustomerProfile, NewUser, SellerProfile, User};
