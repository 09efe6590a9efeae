// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! ID newtype definitions.
//!
//! Every entity id is an `i64` assigned by the storage layer at insert time
//! and immutable thereafter. The newtypes exist so an advert id cannot be
//! passed where a user id is expected; all of them serialize transparently
//! as plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(
			Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
		)]
		#[serde(transparent)]
		pub struct $name(i64);

		impl $name {
			/// Create an ID from a raw database value.
			pub fn new(id: i64) -> Self {
				Self(id)
			}

			/// Get the inner integer value.
			pub fn into_inner(self) -> i64 {
				self.0
			}

			/// Get the inner integer value without consuming.
			pub fn as_i64(&self) -> i64 {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<i64> for $name {
			fn from(id: i64) -> Self {
				Self(id)
			}
		}

		impl From<$name> for i64 {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(AdvertId, "Unique identifier for an advert.");
define_id_type!(UserId, "Unique identifier for a user profile.");
define_id_type!(DealId, "Unique identifier for a deal.");
define_id_type!(LikeId, "Unique identifier for a like (favorite).");
define_id_type!(CategoryId, "Unique identifier for a category.");

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn id_round_trips_through_i64(raw in any::<i64>()) {
			let id = AdvertId::new(raw);
			prop_assert_eq!(id.into_inner(), raw);
			prop_assert_eq!(i64::from(id), raw);
			prop_assert_eq!(AdvertId::from(raw), id);
		}

		#[test]
		fn id_display_matches_inner(raw in any::<i64>()) {
			prop_assert_eq!(UserId::new(raw).to_string(), raw.to_string());
		}

		#[test]
		fn id_serializes_transparently(raw in any::<i64>()) {
			let json = serde_json::to_string(&CategoryId::new(raw)).unwrap();
			prop_assert_eq!(json, raw.to_string());
		}
	}
}
