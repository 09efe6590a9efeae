// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User repository for database operations.
//!
//! This module provides storage access for user management including:
//! - Profile registration (email-unique)
//! - Customer/seller sub-profiles, created and deleted independently
//! - Whole-account removal in a single transaction

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::instrument;

use bazaar_core::{CustomerProfile, NewUser, SellerProfile, User, UserId};

use crate::error::{DbError, Result};
use crate::sql;

#[async_trait]
pub trait UserStore: Send + Sync {
	async fn create(&self, user: &NewUser) -> Result<User>;
	async fn create_customer(&self, profile_id: UserId) -> Result<CustomerProfile>;
	async fn create_seller(&self, profile_id: UserId) -> Result<SellerProfile>;
	async fn delete_customer(&self, profile_id: UserId) -> Result<bool>;
	async fn delete_seller(&self, profile_id: UserId) -> Result<bool>;
	async fn delete_profile(&self, profile_id: UserId) -> Result<bool>;
	async fn delete_account(&self, profile_id: UserId) -> Result<bool>;
	async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// SQLite repository for user profiles.
#[derive(Clone)]
pub struct UserRepository {
	pool: SqlitePool,
}

impl UserRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
	let id: i64 = row.get("id");
	Ok(User {
		id: UserId::new(id),
		nickname: row.get("nickname"),
		full_name: row.get("full_name"),
		email: row.get("email"),
		phone_number: row.get("phone_number"),
		password_hash: row.get("password_hash"),
	})
}

fn row_to_customer(row: &SqliteRow) -> CustomerProfile {
	let profile_id: i64 = row.get("profile_id");
	CustomerProfile {
		id: row.get("id"),
		profile_id: UserId::new(profile_id),
		rating: row.get("rating"),
	}
}

fn row_to_seller(row: &SqliteRow) -> SellerProfile {
	let profile_id: i64 = row.get("profile_id");
	SellerProfile {
		id: row.get("id"),
		profile_id: UserId::new(profile_id),
		rating: row.get("rating"),
	}
}

#[async_trait]
impl UserStore for UserRepository {
	/// Register a profile and return the stored row.
	///
	/// # Errors
	/// `DbError::Conflict` when the email is already registered.
	#[instrument(skip(self, user), fields(nickname = %user.nickname))]
	async fn create(&self, user: &NewUser) -> Result<User> {
		let stmt = sql::user::insert(user);
		let row = stmt
			.query()
			.fetch_one(&self.pool)
			.await
			.map_err(|e| DbError::on_insert("profile", e))?;
		let user = row_to_user(&row)?;

		tracing::info!(user_id = %user.id, "profile created");
		Ok(user)
	}

	/// Attach a customer role to a profile. New roles start at rating 0.
	///
	/// # Errors
	/// `DbError::Conflict` when the profile already has a customer role.
	#[instrument(skip(self), fields(profile_id = %profile_id))]
	async fn create_customer(&self, profile_id: UserId) -> Result<CustomerProfile> {
		let stmt = sql::user::insert_customer(profile_id, 0);
		let row = stmt
			.query()
			.fetch_one(&self.pool)
			.await
			.map_err(|e| DbError::on_insert("customer profile", e))?;

		tracing::debug!(profile_id = %profile_id, "customer profile created");
		Ok(row_to_customer(&row))
	}

	/// Attach a seller role to a profile. New roles start at rating 0.
	///
	/// # Errors
	/// `DbError::Conflict` when the profile already has a seller role.
	#[instrument(skip(self), fields(profile_id = %profile_id))]
	async fn create_seller(&self, profile_id: UserId) -> Result<SellerProfile> {
		let stmt = sql::user::insert_seller(profile_id, 0);
		let row = stmt
			.query()
			.fetch_one(&self.pool)
			.await
			.map_err(|e| DbError::on_insert("seller profile", e))?;

		tracing::debug!(profile_id = %profile_id, "seller profile created");
		Ok(row_to_seller(&row))
	}

	/// Remove the customer role. `false` if the profile had none.
	#[instrument(skip(self), fields(profile_id = %profile_id))]
	async fn delete_customer(&self, profile_id: UserId) -> Result<bool> {
		let result = sql::user::delete_customer(profile_id)
			.query()
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}

	/// Remove the seller role. `false` if the profile had none.
	#[instrument(skip(self), fields(profile_id = %profile_id))]
	async fn delete_seller(&self, profile_id: UserId) -> Result<bool> {
		let result = sql::user::delete_seller(profile_id)
			.query()
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}

	/// Remove the base profile row only. Sub-profiles cascade via schema.
	#[instrument(skip(self), fields(profile_id = %profile_id))]
	async fn delete_profile(&self, profile_id: UserId) -> Result<bool> {
		let result = sql::user::delete_profile(profile_id)
			.query()
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		if deleted {
			tracing::debug!(profile_id = %profile_id, "profile deleted");
		}
		Ok(deleted)
	}

	/// Remove the customer role, seller role, and base profile atomically.
	///
	/// Commits only when all three statements succeed; any failure rolls the
	/// whole removal back.
	#[instrument(skip(self), fields(profile_id = %profile_id))]
	async fn delete_account(&self, profile_id: UserId) -> Result<bool> {
		let mut tx = self.pool.begin().await?;

		sql::user::delete_customer(profile_id)
			.query()
			.execute(&mut *tx)
			.await?;
		sql::user::delete_seller(profile_id)
			.query()
			.execute(&mut *tx)
			.await?;
		let result = sql::user::delete_profile(profile_id)
			.query()
			.execute(&mut *tx)
			.await?;

		tx.commit().await?;

		let deleted = result.rows_affected() > 0;
		if deleted {
			tracing::info!(profile_id = %profile_id, "account deleted");
		}
		Ok(deleted)
	}

	/// `None` if no profile is registered under this email.
	#[instrument(skip(self, email))]
	async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
		let row = sql::user::by_email(email)
			.query()
			.fetch_optional(&self.pool)
			.await?;
		row.as_ref().map(row_to_user).transpose()
	}
}
