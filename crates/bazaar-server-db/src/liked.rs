// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Like (favorite) repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::instrument;

use bazaar_core::{Advert, AdvertId, Like, LikeId, UserId};

use crate::advert::row_to_advert;
use crate::error::{DbError, Result};
use crate::sql;

#[async_trait]
pub trait LikedStore: Send + Sync {
	async fn add(&self, customer_id: UserId, advert_id: AdvertId) -> Result<Like>;
	async fn remove(&self, customer_id: UserId, advert_id: AdvertId) -> Result<bool>;
	async fn get_adverts_by_customer(&self, customer_id: UserId) -> Result<Vec<Advert>>;
	async fn is_liked(&self, customer_id: UserId, advert_id: AdvertId) -> Result<bool>;
}

/// SQLite repository for likes.
#[derive(Clone)]
pub struct LikedRepository {
	pool: SqlitePool,
}

impl LikedRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

fn row_to_like(row: &SqliteRow) -> Result<Like> {
	let id: i64 = row.get("id");
	let customer_id: i64 = row.get("customer_id");
	let advert_id: i64 = row.get("advert_id");
	let created_at: String = row.get("created_at");

	Ok(Like {
		id: LikeId::new(id),
		customer_id: UserId::new(customer_id),
		advert_id: AdvertId::new(advert_id),
		created_at: DateTime::parse_from_rfc3339(&created_at)
			.map_err(|e| DbError::Internal(format!("Invalid created_at: {e}")))?
			.with_timezone(&Utc),
	})
}

#[async_trait]
impl LikedStore for LikedRepository {
	/// Favorite an advert and return the stored row.
	///
	/// # Errors
	/// `DbError::Conflict` when the pair is already favorited; the
	/// `(customer_id, advert_id)` pair is unique.
	#[instrument(skip(self), fields(customer_id = %customer_id, advert_id = %advert_id))]
	async fn add(&self, customer_id: UserId, advert_id: AdvertId) -> Result<Like> {
		let created_at = Utc::now();
		let stmt = sql::liked::insert(customer_id, advert_id, &created_at);
		let row = stmt
			.query()
			.fetch_one(&self.pool)
			.await
			.map_err(|e| DbError::on_insert("favorite", e))?;
		let like = row_to_like(&row)?;

		tracing::debug!(like_id = %like.id, "advert favorited");
		Ok(like)
	}

	/// Unfavorite. `false` when the pair was not favorited; never an error.
	#[instrument(skip(self), fields(customer_id = %customer_id, advert_id = %advert_id))]
	async fn remove(&self, customer_id: UserId, advert_id: AdvertId) -> Result<bool> {
		let result = sql::liked::delete(customer_id, advert_id)
			.query()
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}

	/// Adverts the customer has favorited, newest advert first.
	#[instrument(skip(self), fields(customer_id = %customer_id))]
	async fn get_adverts_by_customer(&self, customer_id: UserId) -> Result<Vec<Advert>> {
		let rows = sql::liked::adverts_by_customer(customer_id)
			.query()
			.fetch_all(&self.pool)
			.await?;
		rows.iter().map(row_to_advert).collect()
	}

	#[instrument(skip(self), fields(customer_id = %customer_id, advert_id = %advert_id))]
	async fn is_liked(&self, customer_id: UserId, advert_id: AdvertId) -> Result<bool> {
		let row = sql::liked::exists(customer_id, advert_id)
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
		repo: LikedRepository,
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
			repo: LikedRepository::new(pool.clone()),
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
	async fn test_like_lifecycle() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		assert!(!fx.repo.is_liked(fx.customer, advert.id).await.unwrap());

		let like = fx.repo.add(fx.customer, advert.id).await.unwrap();
		assert_eq!(like.customer_id, fx.customer);
		assert_eq!(like.advert_id, advert.id);
		assert!(fx.repo.is_liked(fx.customer, advert.id).await.unwrap());

		assert!(fx.repo.remove(fx.customer, advert.id).await.unwrap());
		assert!(!fx.repo.is_liked(fx.customer, advert.id).await.unwrap());
	}

	#[tokio::test]
	async fn test_remove_of_missing_pair_is_not_an_error() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		let removed = fx.repo.remove(fx.customer, advert.id).await.unwrap();
		assert!(!removed);
	}

	#[tokio::test]
	async fn test_duplicate_favorite_is_a_conflict() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		fx.repo.add(fx.customer, advert.id).await.unwrap();
		let result = fx.repo.add(fx.customer, advert.id).await;
		assert!(matches!(result, Err(DbError::Conflict(_))));
	}

	#[tokio::test]
	async fn test_favorites_list_joins_adverts_newest_first() {
		let fx = setup().await;
		let older = post_advert(&fx, "Older").await;
		let newer = post_advert(&fx, "Newer").await;
		post_advert(&fx, "Unliked").await;

		fx.repo.add(fx.customer, older.id).await.unwrap();
		fx.repo.add(fx.customer, newer.id).await.unwrap();

		let liked = fx.repo.get_adverts_by_customer(fx.customer).await.unwrap();
		let ids: Vec<_> = liked.iter().map(|a| a.id).collect();
		assert_eq!(ids, vec![newer.id, older.id]);
	}

	#[tokio::test]
	async fn test_likes_are_scoped_per_customer() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		fx.repo.add(fx.customer, advert.id).await.unwrap();
		assert!(!fx.repo.is_liked(fx.seller, advert.id).await.unwrap());
		assert!(fx
			.repo
			.get_adverts_by_customer(fx.seller)
			.await
			.unwrap()
			.is_empty());
	}
}
