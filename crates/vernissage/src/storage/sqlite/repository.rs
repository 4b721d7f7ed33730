//! SQLite repository implementation.
//!
//! Implements the repository traits from `vernissage_core::storage` using
//! SQLite. A single connection serves all entity types; the order insert
//! runs in an explicit transaction so stock decrements and order lines
//! commit atomically.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use vernissage_core::auth::AdminUser;
use vernissage_core::catalog::{Artist, Exhibition, NewsPost, Painting};
use vernissage_core::shop::{Order, OrderItem, OrderStatus, PickupPoint, ShopItem};
use vernissage_core::storage::{
    AdminUserRepository, ArtistRepository, ExhibitionRepository, NewsRepository, OrderRepository,
    PaintingRepository, PickupPointRepository, RepositoryError, Result, ShopItemRepository,
};

use super::conversions::{
    delivery_to_columns, format_date, format_datetime, row_to_admin_user, row_to_artist,
    row_to_exhibition, row_to_news_post, row_to_order, row_to_order_item, row_to_painting,
    row_to_pickup_point, row_to_shop_item, status_to_string,
};
use super::error::map_tokio_rusqlite_error_with_id;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Signals a business-rule failure (e.g. insufficient stock) out of a
/// tokio_rusqlite closure so the transaction rolls back.
fn invalid(msg: String) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Other(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        msg,
    )))
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a query returning at most one row.
    async fn get_one<T, F>(&self, sql: &'static str, id: String, entity: &'static str, f: F) -> Result<Option<T>>
    where
        T: Send + 'static,
        F: Fn(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        let key = id.clone();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                match stmt.query_row([&key], |row| f(row)) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity, id))
    }

    /// Runs a query returning all rows, without parameters.
    async fn get_all<T, F>(&self, sql: &'static str, f: F) -> Result<Vec<T>>
    where
        T: Send + 'static,
        F: Fn(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt.query_map([], |row| f(row)).map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a query returning all rows matching one string parameter.
    async fn get_all_by<T, F>(&self, sql: &'static str, param: String, f: F) -> Result<Vec<T>>
    where
        T: Send + 'static,
        F: Fn(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt.query_map([&param], |row| f(row)).map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Executes a delete-by-id statement, mapping zero affected rows to
    /// NotFound.
    async fn delete_by_id(&self, sql: &'static str, id: Uuid, entity: &'static str) -> Result<()> {
        let id_str = id.to_string();
        let entity_id = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn.execute(sql, [&id_str]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity, entity_id))
    }
}

// ============================================================================
// ArtistRepository implementation
// ============================================================================

#[async_trait]
impl ArtistRepository for SqliteRepository {
    async fn get_artist(&self, id: Uuid) -> Result<Option<Artist>> {
        self.get_one(schema::SELECT_ARTIST_BY_ID, id.to_string(), "Artist", row_to_artist)
            .await
    }

    async fn list_artists(&self) -> Result<Vec<Artist>> {
        self.get_all(schema::SELECT_ALL_ARTISTS, row_to_artist).await
    }

    async fn create_artist(&self, artist: &Artist) -> Result<()> {
        let artist = artist.clone();
        let artist_id = artist.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ARTIST,
                    rusqlite::params![
                        artist.id.to_string(),
                        artist.name,
                        artist.bio,
                        artist.photo_url,
                        format_datetime(&artist.created_at),
                        format_datetime(&artist.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Artist", artist_id))
    }

    async fn update_artist(&self, artist: &Artist) -> Result<()> {
        let artist = artist.clone();
        let artist_id = artist.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ARTIST,
                        rusqlite::params![
                            artist.id.to_string(),
                            artist.name,
                            artist.bio,
                            artist.photo_url,
                            format_datetime(&artist.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Artist", artist_id))
    }

    async fn delete_artist(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_ARTIST, id, "Artist").await
    }
}

// ============================================================================
// PaintingRepository implementation
// ============================================================================

#[async_trait]
impl PaintingRepository for SqliteRepository {
    async fn get_painting(&self, id: Uuid) -> Result<Option<Painting>> {
        self.get_one(schema::SELECT_PAINTING_BY_ID, id.to_string(), "Painting", row_to_painting)
            .await
    }

    async fn list_paintings(&self) -> Result<Vec<Painting>> {
        self.get_all(schema::SELECT_ALL_PAINTINGS, row_to_painting).await
    }

    async fn list_paintings_by_artist(&self, artist_id: Uuid) -> Result<Vec<Painting>> {
        self.get_all_by(
            schema::SELECT_PAINTINGS_BY_ARTIST,
            artist_id.to_string(),
            row_to_painting,
        )
        .await
    }

    async fn create_painting(&self, painting: &Painting) -> Result<()> {
        let painting = painting.clone();
        let painting_id = painting.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PAINTING,
                    rusqlite::params![
                        painting.id.to_string(),
                        painting.artist_id.to_string(),
                        painting.title,
                        painting.description,
                        painting.year,
                        painting.technique,
                        painting.width_cm,
                        painting.height_cm,
                        painting.price_cents,
                        painting.image_url,
                        painting.available,
                        format_datetime(&painting.created_at),
                        format_datetime(&painting.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Painting", painting_id))
    }

    async fn update_painting(&self, painting: &Painting) -> Result<()> {
        let painting = painting.clone();
        let painting_id = painting.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PAINTING,
                        rusqlite::params![
                            painting.id.to_string(),
                            painting.artist_id.to_string(),
                            painting.title,
                            painting.description,
                            painting.year,
                            painting.technique,
                            painting.width_cm,
                            painting.height_cm,
                            painting.price_cents,
                            painting.image_url,
                            painting.available,
                            format_datetime(&painting.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Painting", painting_id))
    }

    async fn delete_painting(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_PAINTING, id, "Painting").await
    }
}

// ============================================================================
// ExhibitionRepository implementation
// ============================================================================

#[async_trait]
impl ExhibitionRepository for SqliteRepository {
    async fn get_exhibition(&self, id: Uuid) -> Result<Option<Exhibition>> {
        self.get_one(
            schema::SELECT_EXHIBITION_BY_ID,
            id.to_string(),
            "Exhibition",
            row_to_exhibition,
        )
        .await
    }

    async fn list_exhibitions(&self) -> Result<Vec<Exhibition>> {
        self.get_all(schema::SELECT_ALL_EXHIBITIONS, row_to_exhibition).await
    }

    async fn create_exhibition(&self, exhibition: &Exhibition) -> Result<()> {
        let exhibition = exhibition.clone();
        let exhibition_id = exhibition.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EXHIBITION,
                    rusqlite::params![
                        exhibition.id.to_string(),
                        exhibition.title,
                        exhibition.description,
                        exhibition.location,
                        format_date(&exhibition.starts_on),
                        format_date(&exhibition.ends_on),
                        exhibition.image_url,
                        format_datetime(&exhibition.created_at),
                        format_datetime(&exhibition.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Exhibition", exhibition_id))
    }

    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()> {
        let exhibition = exhibition.clone();
        let exhibition_id = exhibition.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_EXHIBITION,
                        rusqlite::params![
                            exhibition.id.to_string(),
                            exhibition.title,
                            exhibition.description,
                            exhibition.location,
                            format_date(&exhibition.starts_on),
                            format_date(&exhibition.ends_on),
                            exhibition.image_url,
                            format_datetime(&exhibition.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Exhibition", exhibition_id))
    }

    async fn delete_exhibition(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_EXHIBITION, id, "Exhibition").await
    }

    async fn list_exhibition_paintings(&self, exhibition_id: Uuid) -> Result<Vec<Painting>> {
        self.get_all_by(
            schema::SELECT_PAINTINGS_FOR_EXHIBITION,
            exhibition_id.to_string(),
            row_to_painting,
        )
        .await
    }

    async fn set_exhibition_paintings(
        &self,
        exhibition_id: Uuid,
        painting_ids: &[Uuid],
    ) -> Result<()> {
        let exhibition_id_str = exhibition_id.to_string();
        let entity_id = exhibition_id.to_string();
        let painting_ids: Vec<String> = painting_ids.iter().map(Uuid::to_string).collect();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::DELETE_EXHIBITION_PAINTINGS, [&exhibition_id_str])
                    .map_err(wrap_err)?;
                for painting_id in &painting_ids {
                    tx.execute(
                        schema::INSERT_EXHIBITION_PAINTING,
                        [&exhibition_id_str, painting_id],
                    )
                    .map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Exhibition", entity_id))
    }
}

// ============================================================================
// NewsRepository implementation
// ============================================================================

#[async_trait]
impl NewsRepository for SqliteRepository {
    async fn get_news_post(&self, id: Uuid) -> Result<Option<NewsPost>> {
        self.get_one(schema::SELECT_NEWS_POST_BY_ID, id.to_string(), "NewsPost", row_to_news_post)
            .await
    }

    async fn list_news_posts(&self) -> Result<Vec<NewsPost>> {
        self.get_all(schema::SELECT_ALL_NEWS_POSTS, row_to_news_post).await
    }

    async fn create_news_post(&self, post: &NewsPost) -> Result<()> {
        let post = post.clone();
        let post_id = post.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_NEWS_POST,
                    rusqlite::params![
                        post.id.to_string(),
                        post.title,
                        post.body,
                        post.image_url,
                        format_datetime(&post.published_at),
                        format_datetime(&post.created_at),
                        format_datetime(&post.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "NewsPost", post_id))
    }

    async fn update_news_post(&self, post: &NewsPost) -> Result<()> {
        let post = post.clone();
        let post_id = post.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_NEWS_POST,
                        rusqlite::params![
                            post.id.to_string(),
                            post.title,
                            post.body,
                            post.image_url,
                            format_datetime(&post.published_at),
                            format_datetime(&post.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "NewsPost", post_id))
    }

    async fn delete_news_post(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_NEWS_POST, id, "NewsPost").await
    }
}

// ============================================================================
// ShopItemRepository implementation
// ============================================================================

#[async_trait]
impl ShopItemRepository for SqliteRepository {
    async fn get_shop_item(&self, id: Uuid) -> Result<Option<ShopItem>> {
        self.get_one(schema::SELECT_SHOP_ITEM_BY_ID, id.to_string(), "ShopItem", row_to_shop_item)
            .await
    }

    async fn list_shop_items(&self) -> Result<Vec<ShopItem>> {
        self.get_all(schema::SELECT_ALL_SHOP_ITEMS, row_to_shop_item).await
    }

    async fn create_shop_item(&self, item: &ShopItem) -> Result<()> {
        let item = item.clone();
        let item_id = item.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_SHOP_ITEM,
                    rusqlite::params![
                        item.id.to_string(),
                        item.title,
                        item.description,
                        item.price_cents,
                        item.image_url,
                        item.stock,
                        format_datetime(&item.created_at),
                        format_datetime(&item.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "ShopItem", item_id))
    }

    async fn update_shop_item(&self, item: &ShopItem) -> Result<()> {
        let item = item.clone();
        let item_id = item.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_SHOP_ITEM,
                        rusqlite::params![
                            item.id.to_string(),
                            item.title,
                            item.description,
                            item.price_cents,
                            item.image_url,
                            item.stock,
                            format_datetime(&item.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "ShopItem", item_id))
    }

    async fn delete_shop_item(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_SHOP_ITEM, id, "ShopItem").await
    }
}

// ============================================================================
// PickupPointRepository implementation
// ============================================================================

#[async_trait]
impl PickupPointRepository for SqliteRepository {
    async fn get_pickup_point(&self, id: Uuid) -> Result<Option<PickupPoint>> {
        self.get_one(
            schema::SELECT_PICKUP_POINT_BY_ID,
            id.to_string(),
            "PickupPoint",
            row_to_pickup_point,
        )
        .await
    }

    async fn list_pickup_points(&self) -> Result<Vec<PickupPoint>> {
        self.get_all(schema::SELECT_ALL_PICKUP_POINTS, row_to_pickup_point).await
    }

    async fn create_pickup_point(&self, point: &PickupPoint) -> Result<()> {
        let point = point.clone();
        let point_id = point.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PICKUP_POINT,
                    rusqlite::params![
                        point.id.to_string(),
                        point.name,
                        point.address,
                        point.city,
                        format_datetime(&point.created_at),
                        format_datetime(&point.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "PickupPoint", point_id))
    }

    async fn update_pickup_point(&self, point: &PickupPoint) -> Result<()> {
        let point = point.clone();
        let point_id = point.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PICKUP_POINT,
                        rusqlite::params![
                            point.id.to_string(),
                            point.name,
                            point.address,
                            point.city,
                            format_datetime(&point.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "PickupPoint", point_id))
    }

    async fn delete_pickup_point(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_PICKUP_POINT, id, "PickupPoint").await
    }
}

// ============================================================================
// OrderRepository implementation
// ============================================================================

#[async_trait]
impl OrderRepository for SqliteRepository {
    async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        self.get_one(schema::SELECT_ORDER_BY_ID, id.to_string(), "Order", row_to_order)
            .await
    }

    async fn get_order_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>> {
        self.get_all_by(schema::SELECT_ORDER_ITEMS, order_id.to_string(), row_to_order_item)
            .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.get_all(schema::SELECT_ALL_ORDERS, row_to_order).await
    }

    async fn create_order(&self, order: &Order, items: &[OrderItem]) -> Result<()> {
        let order = order.clone();
        let items = items.to_vec();
        let order_id = order.id.to_string();

        self.conn
            .call(move |conn| {
                let now = format_datetime(&order.updated_at);
                let (method, pickup_point_id, delivery_address) =
                    delivery_to_columns(&order.delivery);

                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(
                    schema::INSERT_ORDER,
                    rusqlite::params![
                        order.id.to_string(),
                        order.customer_name,
                        order.customer_email,
                        order.customer_phone,
                        method,
                        pickup_point_id,
                        delivery_address,
                        order.comment,
                        order.total_cents,
                        status_to_string(&order.status),
                        format_datetime(&order.created_at),
                        now,
                    ],
                )
                .map_err(wrap_err)?;

                for item in &items {
                    // Stock check and decrement in one statement; zero rows
                    // means not enough units and rolls the order back.
                    let changed = tx
                        .execute(
                            schema::DECREMENT_STOCK,
                            rusqlite::params![
                                item.shop_item_id.to_string(),
                                item.quantity,
                                format_datetime(&order.created_at),
                            ],
                        )
                        .map_err(wrap_err)?;
                    if changed == 0 {
                        return Err(invalid(format!(
                            "Insufficient stock for {}",
                            item.title
                        )));
                    }

                    tx.execute(
                        schema::INSERT_ORDER_ITEM,
                        rusqlite::params![
                            item.id.to_string(),
                            item.order_id.to_string(),
                            item.shop_item_id.to_string(),
                            item.title,
                            item.price_cents,
                            item.quantity,
                        ],
                    )
                    .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| match e {
                tokio_rusqlite::Error::Other(inner) => {
                    RepositoryError::InvalidData(inner.to_string())
                }
                other => map_tokio_rusqlite_error_with_id(other, "Order", order_id),
            })
    }

    async fn update_order_status(&self, id: Uuid, status: OrderStatus) -> Result<()> {
        let id_str = id.to_string();
        let order_id = id.to_string();
        let status_str = status_to_string(&status).to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ORDER_STATUS,
                        rusqlite::params![
                            id_str,
                            status_str,
                            format_datetime(&chrono::Utc::now()),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Order", order_id))
    }

    async fn delete_order(&self, id: Uuid) -> Result<()> {
        self.delete_by_id(schema::DELETE_ORDER, id, "Order").await
    }
}

// ============================================================================
// AdminUserRepository implementation
// ============================================================================

#[async_trait]
impl AdminUserRepository for SqliteRepository {
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        self.get_one(
            schema::SELECT_ADMIN_BY_USERNAME,
            username.to_string(),
            "AdminUser",
            row_to_admin_user,
        )
        .await
    }

    async fn create_admin(&self, admin: &AdminUser) -> Result<()> {
        let admin = admin.clone();
        let username = admin.username.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ADMIN,
                    rusqlite::params![
                        admin.id.to_string(),
                        admin.username,
                        admin.password_hash,
                        format_datetime(&admin.created_at),
                        format_datetime(&admin.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "AdminUser", username))
    }
}
