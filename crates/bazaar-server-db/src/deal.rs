// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Deal repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::instrument;

use bazaar_core::{Advert, AdvertId, Deal, DealId, UserId, DEFAULT_DEAL_ADDRESS};

use crate::advert::row_to_advert;
use crate::error::{DbError, Result};
use crate::sql;

#[async_trait]
pub trait DealStore: Send + Sync {
	async fn create(
		&self,
		customer_id: UserId,
		advert_id: AdvertId,
		address: Option<&str>,
	) -> Result<Deal>;
	async fn get_adverts_by_customer(&self, customer_id: UserId) -> Result<Vec<Advert>>;
	async fn is_in_deals(&self, customer_id: UserId, advert_id: AdvertId) -> Result<bool>;
}

/// SQLite repository for deals.
#[derive(Clone)]
pub struct DealRepository {
	pool: SqlitePool,
}

impl DealRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

fn row_to_deal(row: &SqliteRow) -> Result<Deal> {
	let id: i64 = row.get("id");
	let customer_id: i64 = row.get("customer_id");
	let advert_id: i64 = row.get("advert_id");
	let created_at: String = row.get("created_at");

	Ok(Deal {
		id: DealId::new(id),
		advert_id: AdvertId::new(advert_id),
		customer_id: UserId::new(customer_id),
		address: row.get("address"),
		created_at: DateTime::parse_from_rfc3339(&created_at)
			.map_err(|e| DbError::Internal(format!("Invalid created_at: {e}")))?
			.with_timezone(&Utc),
	})
}

#[async_trait]
impl DealStore for DealRepository {
	/// Record a purchase and return the stored row.
	///
	/// `address` falls back to the `"online"` sentinel when absent.
	#[instrument(skip(self), fields(customer_id = %customer_id, advert_id = %advert_id))]
	async fn create(
		&self,
		customer_id: UserId,
		advert_id: AdvertId,
		address: Option<&str>,
	) -> Result<Deal> {
		let created_at = Utc::now();
		let address = address.unwrap_or(DEFAULT_DEAL_ADDRESS);
		let stmt = sql::deal::insert(customer_id, advert_id, address, &created_at);
		let row = stmt.query().fetch_one(&self.pool).await?;
		let deal = row_to_deal(&row)?;

		tracing::info!(deal_id = %deal.id, advert_id = %advert_id, "deal created");
		Ok(deal)
	}

	/// Adverts the customer has bought, newest advert first.
	#[instrument(skip(self), fields(customer_id = %customer_id))]
	async fn get_adverts_by_customer(&self, customer_id: UserId) -> Result<Vec<Advert>> {
		let rows = sql::deal::adverts_by_customer(customer_id)
			.query()
			.fetch_all(&self.pool)
			.await?;
		rows.iter().map(row_to_advert).collect()
	}

	/// `true` iff the customer already has a deal for this advert.
	#[instrument(skip(self), fields(customer_id = %customer_id, advert_id = %advert_id))]
	async fn is_in_deals(&self, customer_id: UserId, advert_id: AdvertId) -> Result<bool> {
		let row = sql::deal::exists(customer_id, advert_id)
			.query()
			.fetch_optional(&self.pool)
			.await?;
		Ok(row.is_some())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::advert::{AdvertRepository, AdvertStore};
	use crate::testing::{create_market_test_pool, insert_test_category, insert_test_profile};
	use bazaar_core::NewAdvert;

	struct Fixture {
		repo: DealRepository,
		adverts: AdvertRepository,
		customer: UserId,
		seller: UserId,
		category: bazaar_core::CategoryId,
	}

	async fn setup() -> Fixture {
		let pool = create_market_test_pool().await;
		let seller = insert_test_profile(&pool, "seller@example.com").await;
		let customer = insert_test_profile(&pool, "buyer@example.com").await;
		let category = insert_test_category(&pool, "Bikes").await;
		Fixture {
			repo: DealRepository::new(pool.clone()),
			adverts: AdvertRepository::new(pool),
			customer,
			seller,
			category,
		}
	}

	async fn post_advert(fx: &Fixture, content: &str) -> Advert {
		fx.adverts
			.create(&NewAdvert {
				content: content.to_owned(),
				description: "desc".to_owned(),
				category_id: fx.category,
				price: 100,
				seller_id: fx.seller,
			})
			.await
			.unwrap()
	}

	#[tokio::test]
	async fn test_create_defaults_address_to_online() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		let deal = fx.repo.create(fx.customer, advert.id, None).await.unwrap();
		assert_eq!(deal.address, DEFAULT_DEAL_ADDRESS);
		assert_eq!(deal.advert_id, advert.id);
		assert_eq!(deal.customer_id, fx.customer);
	}

	#[tokio::test]
	async fn test_create_keeps_explicit_address() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		let deal = fx
			.repo
			.create(fx.customer, advert.id, Some("12 Main St"))
			.await
			.unwrap();
		assert_eq!(deal.address, "12 Main St");
	}

	#[tokio::test]
	async fn test_is_in_deals_flips_after_purchase() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		assert!(!fx.repo.is_in_deals(fx.customer, advert.id).await.unwrap());
		fx.repo.create(fx.customer, advert.id, None).await.unwrap();
		assert!(fx.repo.is_in_deals(fx.customer, advert.id).await.unwrap());
		// Other users are unaffected.
		assert!(!fx.repo.is_in_deals(fx.seller, advert.id).await.unwrap());
	}

	#[tokio::test]
	async fn test_purchases_list_joins_adverts_newest_first() {
		let fx = setup().await;
		let older = post_advert(&fx, "Older").await;
		let newer = post_advert(&fx, "Newer").await;
		let skipped = post_advert(&fx, "Skipped").await;

		fx.repo.create(fx.customer, older.id, None).await.unwrap();
		fx.repo.create(fx.customer, newer.id, None).await.unwrap();

		let bought = fx.repo.get_adverts_by_customer(fx.customer).await.unwrap();
		let ids: Vec<_> = bought.iter().map(|a| a.id).collect();
		assert_eq!(ids, vec![newer.id, older.id]);
		assert!(!ids.contains(&skipped.id));
	}

	#[tokio::test]
	async fn test_purchases_list_is_empty_without_deals() {
		let fx = setup().await;
		let bought = fx.repo.get_adverts_by_customer(fx.customer).await.unwrap();
		assert!(bought.is_empty());
	}

	#[tokio::test]
	async fn test_create_for_missing_advert_fails() {
		let fx = setup().await;
		let result = fx.repo.create(fx.customer, AdvertId::new(999), None).await;
		assert!(matches!(result, Err(DbError::Sqlx(_))));
	}
}
