// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category service.
//!
//! Pure delegation over [`CategoryStore`]; exists as the seam the HTTP
//! layer calls, and so reference-data access can be faked in tests.

use std::sync::Arc;

use bazaar_core::{Category, CategoryId};
use bazaar_server_db::CategoryStore;

use crate::error::Result;

#[derive(Clone)]
pub struct CategoryService {
	repo: Arc<dyn CategoryStore>,
}

impl CategoryService {
	pub fn new(repo: Arc<dyn CategoryStore>) -> Self {
		Self { repo }
	}

	pub async fn get_all(&self) -> Result<Vec<Category>> {
		Ok(self.repo.get_all().await?)
	}

	pub async fn get_name_by_id(&self, category_id: CategoryId) -> Result<Option<String>> {
		Ok(self.repo.get_name_by_id(category_id).await?)
	}
}
