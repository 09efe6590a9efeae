// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pure SQL statement builders.
//!
//! Each submodule covers one aggregate and exposes functions that translate
//! typed arguments into a [`Statement`]: query text plus bind arguments in
//! placeholder order. Builders are deterministic — same input, same
//! statement — touch no connection and no clock (timestamps are passed in
//! by the repository), and never interpolate values into the text.
//!
//! Repositories turn a [`Statement`] into an executable query with
//! [`Statement::query`]; tests assert on the text and arguments directly,
//! without a database.

pub mod advert;
pub mod category;
pub mod deal;
pub mod liked;
pub mod user;

use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

/// A bind argument, in placeholder (`?`) order.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
	Int(i64),
	Text(String),
}

/// A SQL statement plus its bind arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
	pub sql: &'static str,
	pub args: Vec<Arg>,
}

impl Statement {
	/// Number of `?` placeholders in the statement text.
	pub fn placeholders(&self) -> usize {
		self.sql.matches('?').count()
	}

	/// Bind the arguments and produce an executable query.
	///
	/// Performs no I/O; execution stays with the caller.
	pub fn query(&self) -> sqlx::query::Query<'_, Sqlite, SqliteArguments<'_>> {
		let mut query = sqlx::query(self.sql);
		for arg in &self.args {
			query = match arg {
				Arg::Int(value) => query.bind(*value),
				Arg::Text(value) => query.bind(value.as_str()),
			};
		}
		query
	}
}
