use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::AdminUser;
use crate::catalog::{Artist, Exhibition, NewsPost, Painting};
use crate::shop::{Order, OrderItem, OrderStatus, PickupPoint, ShopItem};

use super::Result;

/// Repository for artist operations.
///
/// `list` returns artists sorted by name.
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Gets an artist by ID.
    async fn get_artist(&self, id: Uuid) -> Result<Option<Artist>>;

    /// Lists all artists sorted by name.
    async fn list_artists(&self) -> Result<Vec<Artist>>;

    /// Creates a new artist.
    async fn create_artist(&self, artist: &Artist) -> Result<()>;

    /// Updates an existing artist.
    async fn update_artist(&self, artist: &Artist) -> Result<()>;

    /// Deletes an artist. Fails with `InvalidData` if paintings still
    /// reference the artist.
    async fn delete_artist(&self, id: Uuid) -> Result<()>;
}

/// Repository for painting operations.
#[async_trait]
pub trait PaintingRepository: Send + Sync {
    /// Gets a painting by ID.
    async fn get_painting(&self, id: Uuid) -> Result<Option<Painting>>;

    /// Lists all paintings, newest first.
    async fn list_paintings(&self) -> Result<Vec<Painting>>;

    /// Lists the paintings of one artist, newest first.
    async fn list_paintings_by_artist(&self, artist_id: Uuid) -> Result<Vec<Painting>>;

    /// Creates a new painting.
    async fn create_painting(&self, painting: &Painting) -> Result<()>;

    /// Updates an existing painting.
    async fn update_painting(&self, painting: &Painting) -> Result<()>;

    /// Deletes a painting by ID.
    async fn delete_painting(&self, id: Uuid) -> Result<()>;
}

/// Repository for exhibition operations, including the painting link table.
#[async_trait]
pub trait ExhibitionRepository: Send + Sync {
    /// Gets an exhibition by ID.
    async fn get_exhibition(&self, id: Uuid) -> Result<Option<Exhibition>>;

    /// Lists all exhibitions, latest start date first.
    async fn list_exhibitions(&self) -> Result<Vec<Exhibition>>;

    /// Creates a new exhibition.
    async fn create_exhibition(&self, exhibition: &Exhibition) -> Result<()>;

    /// Updates an existing exhibition.
    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()>;

    /// Deletes an exhibition by ID. Link rows are removed with it.
    async fn delete_exhibition(&self, id: Uuid) -> Result<()>;

    /// Lists the paintings shown in an exhibition.
    async fn list_exhibition_paintings(&self, exhibition_id: Uuid) -> Result<Vec<Painting>>;

    /// Replaces the set of paintings linked to an exhibition.
    async fn set_exhibition_paintings(
        &self,
        exhibition_id: Uuid,
        painting_ids: &[Uuid],
    ) -> Result<()>;
}

/// Repository for news post operations.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Gets a news post by ID.
    async fn get_news_post(&self, id: Uuid) -> Result<Option<NewsPost>>;

    /// Lists all news posts, most recently published first.
    async fn list_news_posts(&self) -> Result<Vec<NewsPost>>;

    /// Creates a new news post.
    async fn create_news_post(&self, post: &NewsPost) -> Result<()>;

    /// Updates an existing news post.
    async fn update_news_post(&self, post: &NewsPost) -> Result<()>;

    /// Deletes a news post by ID.
    async fn delete_news_post(&self, id: Uuid) -> Result<()>;
}

/// Repository for shop item operations.
#[async_trait]
pub trait ShopItemRepository: Send + Sync {
    /// Gets a shop item by ID.
    async fn get_shop_item(&self, id: Uuid) -> Result<Option<ShopItem>>;

    /// Lists all shop items, newest first.
    async fn list_shop_items(&self) -> Result<Vec<ShopItem>>;

    /// Creates a new shop item.
    async fn create_shop_item(&self, item: &ShopItem) -> Result<()>;

    /// Updates an existing shop item.
    async fn update_shop_item(&self, item: &ShopItem) -> Result<()>;

    /// Deletes a shop item by ID.
    async fn delete_shop_item(&self, id: Uuid) -> Result<()>;
}

/// Repository for pickup point operations.
#[async_trait]
pub trait PickupPointRepository: Send + Sync {
    /// Gets a pickup point by ID.
    async fn get_pickup_point(&self, id: Uuid) -> Result<Option<PickupPoint>>;

    /// Lists all pickup points sorted by city, then name.
    async fn list_pickup_points(&self) -> Result<Vec<PickupPoint>>;

    /// Creates a new pickup point.
    async fn create_pickup_point(&self, point: &PickupPoint) -> Result<()>;

    /// Updates an existing pickup point.
    async fn update_pickup_point(&self, point: &PickupPoint) -> Result<()>;

    /// Deletes a pickup point by ID.
    async fn delete_pickup_point(&self, id: Uuid) -> Result<()>;
}

/// Repository for order operations.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Gets an order by ID.
    async fn get_order(&self, id: Uuid) -> Result<Option<Order>>;

    /// Gets the lines of an order.
    async fn get_order_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>>;

    /// Lists all orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Persists an order and its lines in one transaction, decrementing
    /// stock for every line. Fails with `InvalidData` when stock is
    /// insufficient, rolling the whole order back.
    async fn create_order(&self, order: &Order, items: &[OrderItem]) -> Result<()>;

    /// Updates the status of an order.
    async fn update_order_status(&self, id: Uuid, status: OrderStatus) -> Result<()>;

    /// Deletes an order by ID. Lines are removed with it.
    async fn delete_order(&self, id: Uuid) -> Result<()>;
}

/// Repository for back-office admin accounts.
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Gets an admin account by username.
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<AdminUser>>;

    /// Creates a new admin account.
    async fn create_admin(&self, admin: &AdminUser) -> Result<()>;
}
