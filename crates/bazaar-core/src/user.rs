// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User profile records.
//!
//! A [`User`] is the base profile row. Customer and seller roles are
//! separate sub-records keyed by the profile id, each created and deleted
//! independently of the base row.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A registered user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub nickname: String,
	pub full_name: String,
	/// Unique across all profiles.
	pub email: String,
	pub phone_number: String,
	/// Stored hash; opaque to this layer. Hashing happens upstream.
	pub password_hash: String,
}

/// Input shape for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
	pub nickname: String,
	pub full_name: String,
	pub email: String,
	pub phone_number: String,
	pub password_hash: String,
}

/// Customer role attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
	pub id: i64,
	pub profile_id: UserId,
	pub rating: i64,
}

/// Seller role attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
	pub id: i64,
	pub profile_id: UserId,
	pub rating: i64,
}
