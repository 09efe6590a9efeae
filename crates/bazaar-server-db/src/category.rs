// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category repository for database operations.
//!
//! Categories are static reference data; the repository only reads.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use bazaar_core::{Category, CategoryId};

use crate::error::Result;
use crate::sql;

#[async_trait]
pub trait CategoryStore: Send + Sync {
	async fn get_all(&self) -> Result<Vec<Category>>;
	async fn get_name_by_id(&self, category_id: CategoryId) -> Result<Option<String>>;
}

/// SQLite repository for categories.
#[derive(Clone)]
pub struct CategoryRepository {
	pool: SqlitePool,
}

impl CategoryRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl CategoryStore for CategoryRepository {
	#[instrument(skip(self))]
	async fn get_all(&self) -> Result<Vec<Category>> {
		let rows = sql::category::all().query().fetch_all(&self.pool).await?;
		Ok(rows
			.iter()
			.map(|row| {
				let id: i64 = row.get("id");
				Category {
					id: CategoryId::new(id),
					name: row.get("name"),
				}
			})
			.collect())
	}

	/// `None` if no category exists with this id.
	#[instrument(skip(self), fields(category_id = %category_id))]
	async fn get_name_by_id(&self, category_id: CategoryId) -> Result<Option<String>> {
		let row = sql::category::name_by_id(category_id)
			.query()
			.fetch_optional(&self.pool)
			.await?;
		Ok(row.map(|r| r.get("name")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_categories_table, create_test_pool, insert_test_category};

	async fn setup() -> (SqlitePool, CategoryRepository) {
		let pool = create_test_pool().await;
		create_categories_table(&pool).await;
		(pool.clone(), CategoryRepository::new(pool))
	}

	#[tokio::test]
	async fn test_get_all_returns_seeded_categories_in_id_order() {
		let (pool, repo) = setup().await;
		let bikes = insert_test_category(&pool, "Bikes").await;
		let books = insert_test_category(&pool, "Books").await;

		let categories = repo.get_all().await.unwrap();
		let ids: Vec<_> = categories.iter().map(|c| c.id).collect();
		assert_eq!(ids, vec![bikes, books]);
		assert_eq!(categories[0].name, "Bikes");
	}

	#[tokio::test]
	async fn test_get_all_on_empty_table_is_empty() {
		let (_pool, repo) = setup().await;
		assert!(repo.get_all().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_get_name_by_id() {
		let (pool, repo) = setup().await;
		let bikes = insert_test_category(&pool, "Bikes").await;

		assert_eq!(
			repo.get_name_by_id(bikes).await.unwrap(),
			Some("Bikes".to_owned())
		);
		assert_eq!(repo.get_name_by_id(CategoryId::new(999)).await.unwrap(), None);
	}
}
