// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Statement builders for the adverts aggregate.
//!
//! Browse-style reads all share the same ordering: newest first, with the
//! row id as tiebreak for equal timestamps.

use chrono::{DateTime, Utc};

use bazaar_core::{AdvertId, CategoryId, NewAdvert, UserId};

use super::{Arg, Statement};

/// INSERT returning the stored row. `created_at` is stamped by the caller.
pub fn insert(advert: &NewAdvert, created_at: &DateTime<Utc>) -> Statement {
	Statement {
		sql: r#"
			INSERT INTO adverts (content, description, category_id, price, seller_id, created_at)
			VALUES (?, ?, ?, ?, ?, ?)
			RETURNING id, content, description, category_id, price, seller_id, created_at
			"#,
		args: vec![
			Arg::Text(advert.content.clone()),
			Arg::Text(advert.description.clone()),
			Arg::Int(advert.category_id.into_inner()),
			Arg::Int(advert.price),
			Arg::Int(advert.seller_id.into_inner()),
			Arg::Text(created_at.to_rfc3339()),
		],
	}
}

pub fn by_id(advert_id: AdvertId) -> Statement {
	Statement {
		sql: r#"
			SELECT id, content, description, category_id, price, seller_id, created_at
			FROM adverts
			WHERE id = ?
			"#,
		args: vec![Arg::Int(advert_id.into_inner())],
	}
}

pub fn all() -> Statement {
	Statement {
		sql: r#"
			SELECT id, content, description, category_id, price, seller_id, created_at
			FROM adverts
			ORDER BY created_at DESC, id DESC
			"#,
		args: vec![],
	}
}

pub fn by_seller(seller_id: UserId) -> Statement {
	Statement {
		sql: r#"
			SELECT id, content, description, category_id, price, seller_id, created_at
			FROM adverts
			WHERE seller_id = ?
			ORDER BY created_at DESC, id DESC
			"#,
		args: vec![Arg::Int(seller_id.into_inner())],
	}
}

/// Existence probe: does this seller own this advert?
pub fn exists_for_seller(seller_id: UserId, advert_id: AdvertId) -> Statement {
	Statement {
		sql: "SELECT 1 FROM adverts WHERE seller_id = ? AND id = ? LIMIT 1",
		args: vec![
			Arg::Int(seller_id.into_inner()),
			Arg::Int(advert_id.into_inner()),
		],
	}
}

/// Substring match over content and description. The pattern arrives with
/// its `%` wildcards already applied by the caller.
pub fn search(pattern: &str) -> Statement {
	Statement {
		sql: r#"
			SELECT id, content, description, category_id, price, seller_id, created_at
			FROM adverts
			WHERE content LIKE ? OR description LIKE ?
			ORDER BY created_at DESC, id DESC
			"#,
		args: vec![Arg::Text(pattern.to_owned()), Arg::Text(pattern.to_owned())],
	}
}

/// Inclusive range on creation time.
pub fn created_between(begin: &DateTime<Utc>, end: &DateTime<Utc>) -> Statement {
	Statement {
		sql: r#"
			SELECT id, content, description, category_id, price, seller_id, created_at
			FROM adverts
			WHERE created_at BETWEEN ? AND ?
			ORDER BY created_at DESC, id DESC
			"#,
		args: vec![Arg::Text(begin.to_rfc3339()), Arg::Text(end.to_rfc3339())],
	}
}

pub fn by_category(category_id: CategoryId) -> Statement {
	Statement {
		sql: r#"
			SELECT id, content, description, category_id, price, seller_id, created_at
			FROM adverts
			WHERE category_id = ?
			ORDER BY created_at DESC, id DESC
			"#,
		args: vec![Arg::Int(category_id.into_inner())],
	}
}

/// DELETE scoped by id AND owning seller; a non-owner request matches no
/// rows and is a no-op.
pub fn delete(advert_id: AdvertId, seller_id: UserId) -> Statement {
	Statement {
		sql: "DELETE FROM adverts WHERE id = ? AND seller_id = ?",
		args: vec![
			Arg::Int(advert_id.into_inner()),
			Arg::Int(seller_id.into_inner()),
		],
	}
}
