// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Conflict: {0}")]
	Conflict(String),

	#[error("Internal: {0}")]
	Internal(String),
}

impl DbError {
	/// Classify a storage error raised by an insert.
	///
	/// Uniqueness violations (duplicate email, duplicate favorite, duplicate
	/// sub-profile) become [`DbError::Conflict`]; everything else passes
	/// through as [`DbError::Sqlx`].
	pub(crate) fn on_insert(what: &str, e: sqlx::Error) -> Self {
		match &e {
			sqlx::Error::Database(db) if db.is_unique_violation() => {
				DbError::Conflict(format!("{what} already exists"))
			}
			_ => DbError::Sqlx(e),
		}
	}
}

pub type Result<T> = std::result::Result<T, DbError>;
