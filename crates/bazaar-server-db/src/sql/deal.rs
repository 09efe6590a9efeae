// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Statement builders for the deals aggregate.

use chrono::{DateTime, Utc};

use bazaar_core::{AdvertId, UserId};

use super::{Arg, Statement};

pub fn insert(
	customer_id: UserId,
	advert_id: AdvertId,
	address: &str,
	created_at: &DateTime<Utc>,
) -> Statement {
	Statement {
		sql: r#"
			INSERT INTO deals (customer_id, advert_id, address, created_at)
			VALUES (?, ?, ?, ?)
			RETURNING id, customer_id, advert_id, address, created_at
			"#,
		args: vec![
			Arg::Int(customer_id.into_inner()),
			Arg::Int(advert_id.into_inner()),
			Arg::Text(address.to_owned()),
			Arg::Text(created_at.to_rfc3339()),
		],
	}
}

/// Adverts the customer has bought, newest advert first.
pub fn adverts_by_customer(customer_id: UserId) -> Statement {
	Statement {
		sql: r#"
			SELECT a.id, a.content, a.description, a.category_id, a.price, a.seller_id, a.created_at
			FROM adverts a
			JOIN deals d ON a.id = d.advert_id
			WHERE d.customer_id = ?
			ORDER BY a.created_at DESC, a.id DESC
			"#,
		args: vec![Arg::Int(customer_id.into_inner())],
	}
}

pub fn exists(customer_id: UserId, advert_id: AdvertId) -> Statement {
	Statement {
		sql: "SELECT 1 FROM deals WHERE customer_id = ? AND advert_id = ? LIMIT 1",
		args: vec![
			Arg::Int(customer_id.into_inner()),
			Arg::Int(advert_id.into_inner()),
		],
	}
}
