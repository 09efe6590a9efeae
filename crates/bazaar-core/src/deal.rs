// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Deal records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdvertId, DealId, UserId};

/// Delivery address used when the buyer does not supply one.
pub const DEFAULT_DEAL_ADDRESS: &str = "online";

/// A recorded purchase of an advert by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
	pub id: DealId,
	pub advert_id: AdvertId,
	pub customer_id: UserId,
	/// Delivery address; `"online"` for digital handover.
	pub address: String,
	pub created_at: DateTime<Utc>,
}
