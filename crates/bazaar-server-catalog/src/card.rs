// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Advert-card read model.
//!
//! An [`AdvertCard`] is an advert as the browse pages present it: the
//! stored fields plus the resolved category name and three viewer-scoped
//! flags. The flags are never stored on the advert — they are recomputed
//! per request by probing the like, deal, and advert stores.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use bazaar_core::{Advert, AdvertId, CategoryId, UserId};
use bazaar_server_db::{AdvertStore, CategoryStore, DealStore, LikedStore};

use crate::error::Result;

/// An advert decorated for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvertCard {
	pub id: AdvertId,
	pub content: String,
	pub description: String,
	pub category_id: CategoryId,
	/// `None` when the category row has gone missing.
	pub category_name: Option<String>,
	pub price: i64,
	pub seller_id: UserId,
	pub created_at: DateTime<Utc>,
	/// Viewer has favorited this advert.
	pub is_favorite: bool,
	/// Viewer has a deal for this advert.
	pub is_bought: bool,
	/// Viewer is the seller of this advert.
	pub is_created: bool,
}

/// Read model over the four marketplace stores.
#[derive(Clone)]
pub struct Catalog {
	adverts: Arc<dyn AdvertStore>,
	likes: Arc<dyn LikedStore>,
	deals: Arc<dyn DealStore>,
	categories: Arc<dyn CategoryStore>,
}

impl Catalog {
	pub fn new(
		adverts: Arc<dyn AdvertStore>,
		likes: Arc<dyn LikedStore>,
		deals: Arc<dyn DealStore>,
		categories: Arc<dyn CategoryStore>,
	) -> Self {
		Self {
			adverts,
			likes,
			deals,
			categories,
		}
	}

	/// All adverts, newest first, decorated for the viewer.
	#[instrument(skip(self))]
	pub async fn front_page(&self, viewer: Option<UserId>) -> Result<Vec<AdvertCard>> {
		let adverts = self.adverts.get_all().await?;
		self.decorate(adverts, viewer).await
	}

	/// A single advert, or `None` when it does not exist.
	#[instrument(skip(self), fields(advert_id = %advert_id))]
	pub async fn card(
		&self,
		advert_id: AdvertId,
		viewer: Option<UserId>,
	) -> Result<Option<AdvertCard>> {
		let Some(advert) = self.adverts.get_by_id(advert_id).await? else {
			return Ok(None);
		};
		let mut cards = self.decorate(vec![advert], viewer).await?;
		Ok(cards.pop())
	}

	#[instrument(skip(self), fields(category_id = %category_id))]
	pub async fn by_category(
		&self,
		category_id: CategoryId,
		viewer: Option<UserId>,
	) -> Result<Vec<AdvertCard>> {
		let adverts = self.adverts.get_by_category(category_id).await?;
		self.decorate(adverts, viewer).await
	}

	#[instrument(skip(self, term))]
	pub async fn search(&self, term: &str, viewer: Option<UserId>) -> Result<Vec<AdvertCard>> {
		let adverts = self.adverts.search_by_keyword(term).await?;
		self.decorate(adverts, viewer).await
	}

	/// The viewer's favorited adverts; `is_favorite` is true throughout.
	#[instrument(skip(self), fields(viewer = %viewer))]
	pub async fn favorites(&self, viewer: UserId) -> Result<Vec<AdvertCard>> {
		let adverts = self.likes.get_adverts_by_customer(viewer).await?;
		self.decorate(adverts, Some(viewer)).await
	}

	/// The viewer's purchased adverts; `is_bought` is true throughout.
	#[instrument(skip(self), fields(viewer = %viewer))]
	pub async fn purchases(&self, viewer: UserId) -> Result<Vec<AdvertCard>> {
		let adverts = self.deals.get_adverts_by_customer(viewer).await?;
		self.decorate(adverts, Some(viewer)).await
	}

	async fn decorate(
		&self,
		adverts: Vec<Advert>,
		viewer: Option<UserId>,
	) -> Result<Vec<AdvertCard>> {
		// Category names repeat heavily across a page; resolve each id once.
		let mut names: HashMap<CategoryId, Option<String>> = HashMap::new();
		let mut cards = Vec::with_capacity(adverts.len());

		for advert in adverts {
			let category_name = match names.get(&advert.category_id) {
				Some(name) => name.clone(),
				None => {
					let name = self.categories.get_name_by_id(advert.category_id).await?;
					names.insert(advert.category_id, name.clone());
					name
				}
			};

			let (is_favorite, is_bought, is_created) = match viewer {
				Some(viewer) => (
					self.likes.is_liked(viewer, advert.id).await?,
					self.deals.is_in_deals(viewer, advert.id).await?,
					self.adverts.is_created(viewer, advert.id).await?,
				),
				None => (false, false, false),
			};

			cards.push(AdvertCard {
				id: advert.id,
				content: advert.content,
				description: advert.description,
				category_id: advert.category_id,
				category_name,
				price: advert.price,
				seller_id: advert.seller_id,
				created_at: advert.created_at,
				is_favorite,
				is_bought,
				is_created,
			});
		}

		Ok(cards)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bazaar_core::NewAdvert;
	use bazaar_server_db::testing::{
		create_market_test_pool, insert_test_category, insert_test_profile,
	};
	use bazaar_server_db::{
		AdvertRepository, CategoryRepository, DealRepository, LikedRepository,
	};

	struct Fixture {
		catalog: Catalog,
		adverts: AdvertRepository,
		likes: LikedRepository,
		deals: DealRepository,
		seller: UserId,
		buyer: UserId,
		category: CategoryId,
	}

	async fn setup() -> Fixture {
		let pool = create_market_test_pool().await;
		let seller = insert_test_profile(&pool, "seller@example.com").await;
		let buyer = insert_test_profile(&pool, "buyer@example.com").await;
		let category = insert_test_category(&pool, "Bikes").await;

		let adverts = AdvertRepository::new(pool.clone());
		let likes = LikedRepository::new(pool.clone());
		let deals = DealRepository::new(pool.clone());
		let catalog = Catalog::new(
			Arc::new(adverts.clone()),
			Arc::new(likes.clone()),
			Arc::new(deals.clone()),
			Arc::new(CategoryRepository::new(pool)),
		);

		Fixture {
			catalog,
			adverts,
			likes,
			deals,
			seller,
			buyer,
			category,
		}
	}

	async fn post_advert(fx: &Fixture, content: &str) -> Advert {
		use bazaar_server_db::AdvertStore;
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
	async fn test_anonymous_cards_carry_no_flags() {
		let fx = setup().await;
		post_advert(&fx, "Bike").await;

		let cards = fx.catalog.front_page(None).await.unwrap();
		assert_eq!(cards.len(), 1);
		let card = &cards[0];
		assert!(!card.is_favorite && !card.is_bought && !card.is_created);
		assert_eq!(card.category_name, Some("Bikes".to_owned()));
	}

	#[tokio::test]
	async fn test_flags_are_viewer_scoped() {
		use bazaar_server_db::{DealStore, LikedStore};
		let fx = setup().await;
		let advert = post_advert(&fx, "Bike").await;

		fx.likes.add(fx.buyer, advert.id).await.unwrap();
		fx.deals.create(fx.buyer, advert.id, None).await.unwrap();

		let buyer_card = fx
			.catalog
			.card(advert.id, Some(fx.buyer))
			.await
			.unwrap()
			.unwrap();
		assert!(buyer_card.is_favorite);
		assert!(buyer_card.is_bought);
		assert!(!buyer_card.is_created);

		let seller_card = fx
			.catalog
			.card(advert.id, Some(fx.seller))
			.await
			.unwrap()
			.unwrap();
		assert!(!seller_card.is_favorite);
		assert!(!seller_card.is_bought);
		assert!(seller_card.is_created);
	}

	#[tokio::test]
	async fn test_card_for_missing_advert_is_none() {
		let fx = setup().await;
		let card = fx.catalog.card(AdvertId::new(999), None).await.unwrap();
		assert!(card.is_none());
	}

	#[tokio::test]
	async fn test_favorites_view_marks_every_card() {
		use bazaar_server_db::LikedStore;
		let fx = setup().await;
		let liked = post_advert(&fx, "Liked bike").await;
		post_advert(&fx, "Other bike").await;

		fx.likes.add(fx.buyer, liked.id).await.unwrap();

		let cards = fx.catalog.favorites(fx.buyer).await.unwrap();
		assert_eq!(cards.len(), 1);
		assert_eq!(cards[0].id, liked.id);
		assert!(cards[0].is_favorite);
	}

	#[tokio::test]
	async fn test_purchases_view_marks_every_card() {
		use bazaar_server_db::DealStore;
		let fx = setup().await;
		let bought = post_advert(&fx, "Bought bike").await;

		fx.deals.create(fx.buyer, bought.id, None).await.unwrap();

		let cards = fx.catalog.purchases(fx.buyer).await.unwrap();
		assert_eq!(cards.len(), 1);
		assert!(cards[0].is_bought);
	}

	#[tokio::test]
	async fn test_search_and_category_views_decorate() {
		let fx = setup().await;
		let advert = post_advert(&fx, "Red bicycle").await;

		let by_term = fx.catalog.search("bicycle", None).await.unwrap();
		assert_eq!(by_term.len(), 1);
		assert_eq!(by_term[0].id, advert.id);

		let by_cat = fx.catalog.by_category(fx.category, None).await.unwrap();
		assert_eq!(by_cat.len(), 1);
		assert_eq!(by_cat[0].category_name, Some("Bikes".to_owned()));
	}
}
