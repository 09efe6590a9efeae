// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory SQLite fixtures for repository tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use bazaar_core::{CategoryId, UserId};

/// Single-connection in-memory pool. One connection matters: every pooled
/// connection would otherwise get its own empty `:memory:` database.
pub async fn create_test_pool() -> SqlitePool {
	let options = SqliteConnectOptions::from_str(":memory:")
		.unwrap()
		.foreign_keys(true)
		.create_if_missing(true);

	SqlitePoolOptions::new()
		.max_connections(1)
		.connect_with(options)
		.await
		.expect("Failed to create test pool")
}

pub async fn create_categories_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS categories (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT NOT NULL UNIQUE
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_profiles_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS profiles (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			nickname TEXT NOT NULL,
			full_name TEXT NOT NULL,
			email TEXT NOT NULL UNIQUE,
			phone_number TEXT NOT NULL,
			password_hash TEXT NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_customers_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS customers (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			profile_id INTEGER NOT NULL UNIQUE REFERENCES profiles(id) ON DELETE CASCADE,
			rating INTEGER NOT NULL DEFAULT 0
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_sellers_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS sellers (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			profile_id INTEGER NOT NULL UNIQUE REFERENCES profiles(id) ON DELETE CASCADE,
			rating INTEGER NOT NULL DEFAULT 0
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_adverts_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS adverts (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			content TEXT NOT NULL,
			description TEXT NOT NULL,
			category_id INTEGER NOT NULL REFERENCES categories(id),
			price INTEGER NOT NULL CHECK (price >= 0),
			seller_id INTEGER NOT NULL REFERENCES profiles(id),
			created_at TEXT NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_deals_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS deals (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			advert_id INTEGER NOT NULL REFERENCES adverts(id),
			customer_id INTEGER NOT NULL REFERENCES profiles(id),
			address TEXT NOT NULL DEFAULT 'online',
			created_at TEXT NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_likes_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS likes (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			customer_id INTEGER NOT NULL REFERENCES profiles(id),
			advert_id INTEGER NOT NULL REFERENCES adverts(id),
			created_at TEXT NOT NULL,
			UNIQUE(customer_id, advert_id)
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

/// Pool with the full marketplace schema.
pub async fn create_market_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_categories_table(&pool).await;
	create_profiles_table(&pool).await;
	create_customers_table(&pool).await;
	create_sellers_table(&pool).await;
	create_adverts_table(&pool).await;
	create_deals_table(&pool).await;
	create_likes_table(&pool).await;
	pool
}

/// Pool with only the profile tables.
pub async fn create_user_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_profiles_table(&pool).await;
	create_customers_table(&pool).await;
	create_sellers_table(&pool).await;
	pool
}

pub async fn insert_test_category(pool: &SqlitePool, name: &str) -> CategoryId {
	let row: (i64,) = sqlx::query_as("INSERT INTO categories (name) VALUES (?) RETURNING id")
		.bind(name)
		.fetch_one(pool)
		.await
		.unwrap();
	CategoryId::new(row.0)
}

pub async fn insert_test_profile(pool: &SqlitePool, email: &str) -> UserId {
	let row: (i64,) = sqlx::query_as(
		r#"
		INSERT INTO profiles (nickname, full_name, email, phone_number, password_hash)
		VALUES ('tester', 'Test Person', ?, '+15550100', '$argon2id$stub')
		RETURNING id
		"#,
	)
	.bind(email)
	.fetch_one(pool)
	.await
	.unwrap();
	UserId::new(row.0)
}
