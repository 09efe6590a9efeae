// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Like (favorite) records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdvertId, LikeId, UserId};

/// A favorite relationship between a customer and an advert.
///
/// Unique per `(customer_id, advert_id)` pair; the storage layer rejects
/// duplicate favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
	pub id: LikeId,
	pub customer_id: UserId,
	pub advert_id: AdvertId,
	pub created_at: DateTime<Utc>,
}
