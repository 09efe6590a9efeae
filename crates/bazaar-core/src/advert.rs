// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Advert records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdvertId, CategoryId, UserId};

/// A marketplace listing created by a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advert {
	pub id: AdvertId,
	/// Short listing text shown in browse views.
	pub content: String,
	pub description: String,
	pub category_id: CategoryId,
	/// Whole currency units, never negative.
	pub price: i64,
	pub seller_id: UserId,
	/// Assigned by the storage layer at insert time.
	pub created_at: DateTime<Utc>,
}

/// Input shape for creating an advert; id and timestamp are storage-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAdvert {
	pub content: String,
	pub description: String,
	pub category_id: CategoryId,
	pub price: i64,
	pub seller_id: UserId,
}
