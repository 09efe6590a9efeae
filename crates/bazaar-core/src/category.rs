// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category reference data.

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// Static reference entry adverts are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub id: CategoryId,
	pub name: String,
}
