// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Statement builders for profiles and their customer/seller sub-records.
//!
//! Ids are assigned by the storage engine's identity columns; no builder
//! ever computes one.

use bazaar_core::{NewUser, UserId};

use super::{Arg, Statement};

pub fn insert(user: &NewUser) -> Statement {
	Statement {
		sql: r#"
			INSERT INTO profiles (nickname, full_name, email, phone_number, password_hash)
			VALUES (?, ?, ?, ?, ?)
			RETURNING id, nickname, full_name, email, phone_number, password_hash
			"#,
		args: vec![
			Arg::Text(user.nickname.clone()),
			Arg::Text(user.full_name.clone()),
			Arg::Text(user.email.clone()),
			Arg::Text(user.phone_number.clone()),
			Arg::Text(user.password_hash.clone()),
		],
	}
}

pub fn insert_customer(profile_id: UserId, rating: i64) -> Statement {
	Statement {
		sql: r#"
			INSERT INTO customers (profile_id, rating)
			VALUES (?, ?)
			RETURNING id, profile_id, rating
			"#,
		args: vec![Arg::Int(profile_id.into_inner()), Arg::Int(rating)],
	}
}

pub fn insert_seller(profile_id: UserId, rating: i64) -> Statement {
	Statement {
		sql: r#"
			INSERT INTO sellers (profile_id, rating)
			VALUES (?, ?)
			RETURNING id, profile_id, rating
			"#,
		args: vec![Arg::Int(profile_id.into_inner()), Arg::Int(rating)],
	}
}

pub fn delete_customer(profile_id: UserId) -> Statement {
	Statement {
		sql: "DELETE FROM customers WHERE profile_id = ?",
		args: vec![Arg::Int(profile_id.into_inner())],
	}
}

pub fn delete_seller(profile_id: UserId) -> Statement {
	Statement {
		sql: "DELETE FROM sellers WHERE profile_id = ?",
		args: vec![Arg::Int(profile_id.into_inner())],
	}
}

pub fn delete_profile(profile_id: UserId) -> Statement {
	Statement {
		sql: "DELETE FROM profiles WHERE id = ?",
		args: vec![Arg::Int(profile_id.into_inner())],
	}
}

pub fn by_email(email: &str) -> Statement {
	Statement {
		sql: r#"
			SELECT id, nickname, full_name, email, phone_number, password_hash
			FROM profiles
			WHERE email = ?
			"#,
		args: vec![Arg::Text(email.to_owned())],
	}
}
