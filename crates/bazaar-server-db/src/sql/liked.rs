// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Statement builders for the likes (favorites) aggregate.

use chrono::{DateTime, Utc};

use bazaar_core::{AdvertId, UserId};

use super::{Arg, Statement};

pub fn insert(customer_id: UserId, advert_id: AdvertId, created_at: &DateTime<Utc>) -> Statement {
	Statement {
		sql: r#"
			INSERT INTO likes (customer_id, advert_id, created_at)
			VALUES (?, ?, ?)
			RETURNING id, customer_id, advert_id, created_at
			"#,
		args: vec![
			Arg::Int(customer_id.into_inner()),
			Arg::Int(advert_id.into_inner()),
			Arg::Text(created_at.to_rfc3339()),
		],
	}
}

/// Delete by both keys; matching zero rows is fine.
pub fn delete(customer_id: UserId, advert_id: AdvertId) -> Statement {
	Statement {
		sql: "DELETE FROM likes WHERE advert_id = ? AND customer_id = ?",
		args: vec![
			Arg::Int(advert_id.into_inner()),
			Arg::Int(customer_id.into_inner()),
		],
	}
}

/// Adverts the customer has favorited, newest advert first.
pub fn adverts_by_customer(customer_id: UserId) -> Statement {
	Statement {
		sql: r#"
			SELECT a.id, a.content, a.description, a.category_id, a.price, a.seller_id, a.created_at
			FROM adverts a
			JOIN likes l ON a.id = l.advert_id
			WHERE l.customer_id = ?
			ORDER BY a.created_at DESC, a.id DESC
			"#,
		args: vec![Arg::Int(customer_id.into_inner())],
	}
}

pub fn exists(customer_id: UserId, advert_id: AdvertId) -> Statement {
	Statement {
		sql: "SELECT 1 FROM likes WHERE customer_id = ? AND advert_id = ? LIMIT 1",
		args: vec![
			Arg::Int(customer_id.into_inner()),
			Arg::Int(advert_id.into_inner()),
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn insert_binds_every_placeholder() {
		let stamp = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
		let stmt = insert(UserId::new(4), AdvertId::new(11), &stamp);
		assert_eq!(stmt.args.len(), stmt.placeholders());
		assert!(stmt.sql.contains("RETURNING"));
	}

	#[test]
	fn delete_is_keyed_by_both_columns() {
		let stmt = delete(UserId::new(4), AdvertId::new(11));
		assert!(stmt.sql.contains("advert_id = ?"));
		assert!(stmt.sql.contains("customer_id = ?"));
		assert_eq!(stmt.args, vec![Arg::Int(11), Arg::Int(4)]);
	}

	#[test]
	fn favorites_join_orders_by_advert_recency() {
		let stmt = adverts_by_customer(UserId::new(4));
		assert!(stmt.sql.contains("JOIN likes"));
		assert!(stmt.sql.contains("ORDER BY a.created_at DESC, a.id DESC"));
	}
}
