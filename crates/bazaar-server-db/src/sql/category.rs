// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Statement builders for the categories reference table.

use bazaar_core::CategoryId;

use super::{Arg, Statement};

pub fn all() -> Statement {
	Statement {
		sql: "SELECT id, name FROM categories ORDER BY id",
		args: vec![],
	}
}

pub fn name_by_id(category_id: CategoryId) -> Statement {
	Statement {
		sql: "SELECT name FROM categories WHERE id = ?",
		args: vec![Arg::Int(category_id.into_inner())],
	}
}
