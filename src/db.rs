#[cfg(feature = "ssr")]
mod db_impl {
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::{Connection, Error};
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;
    use tokio::sync::Mutex;


    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY,
                    contact_number TEXT NOT NULL,
                    user_name TEXT NOT NULL,
                    product_name TEXT NOT NULL,
                    product_review TEXT NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );",
            )
            .map_err(|e| {
                eprintln!("Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        // Retrieve the full review collection, newest first
        pub async fn get_reviews(&self) -> Result<Vec<DbReview>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, contact_number, user_name, product_name, product_review, created_at
                 FROM reviews
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(DbReview {
                    id: row.get(0)?,
                    contact_number: row.get(1)?,
                    user_name: row.get(2)?,
                    product_name: row.get(3)?,
                    product_review: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?;
            let mut reviews = Vec::new();
            for review in rows {
                reviews.push(review?);
            }
            logging::log!("Fetched {} reviews from the database", reviews.len());
            Ok(reviews)
        }

        // Insert a review. Review creation belongs to the external intake
        // workflow; this exists for seeding and the server's own tests.
        pub async fn insert_review(
            &self,
            contact_number: &str,
            user_name: &str,
            product_name: &str,
            product_review: &str,
        ) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (contact_number, user_name, product_name, product_review)
                 VALUES (?1, ?2, ?3, ?4)",
                [contact_number, user_name, product_name, product_review],
            )?;
            let id = conn.last_insert_rowid();
            logging::log!("Review inserted: {}", id);
            Ok(id)
        }
    }

    // Define a struct to represent a review row in the database
    #[derive(Debug, Deserialize, Serialize, Clone)]
    pub struct DbReview {
        pub id: i64,
        pub contact_number: String,
        pub user_name: String,
        pub product_name: String,
        pub product_review: String,
        pub created_at: String,
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{Database, DbReview};
