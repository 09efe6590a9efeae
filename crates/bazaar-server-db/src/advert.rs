// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Advert repository for database operations.
//!
//! This module provides storage access for marketplace listings including:
//! - Creation with storage-assigned id and timestamp
//! - Browse reads (all, by seller, by category, keyword, date range)
//! - Ownership probe and owner-scoped delete

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::instrument;

use bazaar_core::{Advert, AdvertId, CategoryId, NewAdvert, UserId};

use crate::error::{DbError, Result};
use crate::sql;

#[async_trait]
pub trait AdvertStore: Send + Sync {
	async fn create(&self, advert: &NewAdvert) -> Result<Advert>;
	async fn get_by_id(&self, advert_id: AdvertId) -> Result<Option<Advert>>;
	async fn get_all(&self) -> Result<Vec<Advert>>;
	async fn get_by_seller(&self, seller_id: UserId) -> Result<Vec<Advert>>;
	async fn is_created(&self, seller_id: UserId, advert_id: AdvertId) -> Result<bool>;
	async fn search_by_keyword(&self, key_word: &str) -> Result<Vec<Advert>>;
	async fn filter_by_dates(
		&self,
		begin: DateTime<Utc>,
		end: DateTime<Utc>,
	) -> Result<Vec<Advert>>;
	async fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Advert>>;
	async fn delete(&self, advert_id: AdvertId, seller_id: UserId) -> Result<bool>;
}

/// SQLite repository for adverts.
#[derive(Clone)]
pub struct AdvertRepository {
	pool: SqlitePool,
}

impl AdvertRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

/// Map an advert row. Shared with the deal/like repositories, whose joined
/// reads return advert rows.
pub(crate) fn row_to_advert(row: &SqliteRow) -> Result<Advert> {
	let id: i64 = row.get("id");
	let category_id: i64 = row.get("category_id");
	let seller_id: i64 = row.get("seller_id");
	let created_at: String = row.get("created_at");

	Ok(Advert {
		id: AdvertId::new(id),
		content: row.get("content"),
		description: row.get("description"),
		category_id: CategoryId::new(category_id),
		price: row.get("price"),
		seller_id: UserId::new(seller_id),
		created_at: DateTime::parse_from_rfc3339(&created_at)
			.map_err(|e| DbError::Internal(format!("Invalid created_at: {e}")))?
			.with_timezone(&Utc),
	})
}

async fn fetch_adverts(pool: &SqlitePool, stmt: &sql::Statement) -> Result<Vec<Advert>> {
	let rows = stmt.query().fetch_all(pool).await?;
	rows.iter().map(row_to_advert).collect()
}

#[async_trait]
impl AdvertStore for AdvertRepository {
	/// Create an advert and return the stored row.
	///
	/// The id and creation timestamp are assigned here, not by the caller.
	#[instrument(skip(self, advert), fields(seller_id = %advert.seller_id))]
	async fn create(&self, advert: &NewAdvert) -> Result<Advert> {
		let created_at = Utc::now();
		let stmt = sql::advert::insert(advert, &created_at);
		let row = stmt.query().fetch_one(&self.pool).await?;
		let advert = row_to_advert(&row)?;

		tracing::debug!(advert_id = %advert.id, "advert created");
		Ok(advert)
	}

	/// `None` if no advert exists with this id.
	#[instrument(skip(self), fields(advert_id = %advert_id))]
	async fn get_by_id(&self, advert_id: AdvertId) -> Result<Option<Advert>> {
		let row = sql::advert::by_id(advert_id)
			.query()
			.fetch_optional(&self.pool)
			.await?;
		row.as_ref().map(row_to_advert).transpose()
	}

	/// All adverts, newest first.
	#[instrument(skip(self))]
	async fn get_all(&self) -> Result<Vec<Advert>> {
		let adverts = fetch_adverts(&self.pool, &sql::advert::all()).await?;
		tracing::debug!(count = adverts.len(), "listed adverts");
		Ok(adverts)
	}

	/// Adverts posted by the given seller, newest first.
	#[instrument(skip(self), fields(seller_id = %seller_id))]
	async fn get_by_seller(&self, seller_id: UserId) -> Result<Vec<Advert>> {
		fetch_adverts(&self.pool, &sql::advert::by_seller(seller_id)).await
	}

	/// `true` iff the advert exists and belongs to the seller.
	#[instrument(skip(self), fields(seller_id = %seller_id, advert_id = %advert_id))]
	async fn is_created(&self, seller_id: UserId, advert_id: AdvertId) -> Result<bool> {
		let row = sql::advert::exists_for_seller(seller_id, advert_id)
			.query()
			.fetch_optional(&self.pool)
			.await?;
		Ok(row.is_some())
	}

	/// Substring search over content and description.
	#[instrument(skip(self, key_word))]
	async fn search_by_keyword(&self, key_word: &str) -> Result<Vec<Advert>> {
		let pattern = format!("%{key_word}%");
		let adverts = fetch_adverts(&self.pool, &sql::advert::search(&pattern)).await?;
		tracing::debug!(count = adverts.len(), "keyword search finished");
		Ok(adverts)
	}

	/// Adverts created in the inclusive `[begin, end]` range, newest first.
	#[instrument(skip(self), fields(begin = %begin, end = %end))]
	async fn filter_by_dates(
		&self,
		begin: DateTime<Utc>,
		end: DateTime<Utc>,
	) -> Result<Vec<Advert>> {
		fetch_adverts(&self.pool, &sql::advert::created_between(&begin, &end)).await
	}

	#[instrument(skip(self), fields(category_id = %category_id))]
	async fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Advert>> {
		fetch_adverts(&self.pool, &sql::advert::by_category(category_id)).await
	}

	/// Delete an advert, scoped by the owning seller.
	///
	/// # Returns
	/// `true` if a row was removed. A missing advert and a non-owner
	/// request both come back `false`; the two cases are not distinguished.
	#[instrument(skip(self), fields(advert_id = %advert_id, seller_id = %seller_id))]
	async fn delete(&self, advert_id: AdvertId, seller_id: UserId) -> Result<bool> {
		let result = sql::advert::delete(advert_id, seller_id)
			.query()
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		if deleted {
			tracing::debug!(advert_id = %advert_id, "advert deleted");
		}
		Ok(deleted)
	}
}
