// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use bazaar_server_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("Storage error: {0}")]
	Db(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
