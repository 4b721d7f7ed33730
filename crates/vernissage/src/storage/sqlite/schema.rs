//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the repository lives here as constants, keeping the
//! repository code free of inline query strings.

/// SQL statement to create all tables.
///
/// `PRAGMA foreign_keys` is per-connection and must run before any write.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Artists table
CREATE TABLE IF NOT EXISTS artists (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    bio TEXT,
    photo_url TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Paintings table. Deleting an artist with paintings is rejected by the
-- default RESTRICT behavior of the foreign key.
CREATE TABLE IF NOT EXISTS paintings (
    id TEXT PRIMARY KEY,
    artist_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    year INTEGER,
    technique TEXT,
    width_cm INTEGER,
    height_cm INTEGER,
    price_cents INTEGER,
    image_url TEXT,
    available INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (artist_id) REFERENCES artists(id)
);

-- Exhibitions table
CREATE TABLE IF NOT EXISTS exhibitions (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    location TEXT,
    starts_on TEXT NOT NULL,
    ends_on TEXT NOT NULL,
    image_url TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Exhibition/painting link table
CREATE TABLE IF NOT EXISTS exhibition_paintings (
    exhibition_id TEXT NOT NULL,
    painting_id TEXT NOT NULL,
    PRIMARY KEY (exhibition_id, painting_id),
    FOREIGN KEY (exhibition_id) REFERENCES exhibitions(id) ON DELETE CASCADE,
    FOREIGN KEY (painting_id) REFERENCES paintings(id) ON DELETE CASCADE
);

-- News posts table
CREATE TABLE IF NOT EXISTS news_posts (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    image_url TEXT,
    published_at TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Shop items table
CREATE TABLE IF NOT EXISTS shop_items (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    price_cents INTEGER NOT NULL,
    image_url TEXT,
    stock INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Pickup points table
CREATE TABLE IF NOT EXISTS pickup_points (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Orders table. Pickup point and shop item references are snapshots, not
-- foreign keys, so order history survives catalog edits.
CREATE TABLE IF NOT EXISTS orders (
    id TEXT PRIMARY KEY,
    customer_name TEXT NOT NULL,
    customer_email TEXT NOT NULL,
    customer_phone TEXT,
    delivery_method TEXT NOT NULL,
    pickup_point_id TEXT,
    delivery_address TEXT,
    comment TEXT,
    total_cents INTEGER NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Order lines table
CREATE TABLE IF NOT EXISTS order_items (
    id TEXT PRIMARY KEY,
    order_id TEXT NOT NULL,
    shop_item_id TEXT NOT NULL,
    title TEXT NOT NULL,
    price_cents INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE
);

-- Back-office accounts table
CREATE TABLE IF NOT EXISTS admin_users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_paintings_artist_id ON paintings(artist_id);
CREATE INDEX IF NOT EXISTS idx_exhibition_paintings_painting ON exhibition_paintings(painting_id);
CREATE INDEX IF NOT EXISTS idx_news_published_at ON news_posts(published_at);
CREATE INDEX IF NOT EXISTS idx_order_items_order_id ON order_items(order_id);
CREATE INDEX IF NOT EXISTS idx_orders_created_at ON orders(created_at);
CREATE INDEX IF NOT EXISTS idx_admin_users_username ON admin_users(username);
"#;

// Artist queries
pub const INSERT_ARTIST: &str = r#"
INSERT INTO artists (id, name, bio, photo_url, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_ARTIST_BY_ID: &str = r#"
SELECT id, name, bio, photo_url, created_at, updated_at
FROM artists
WHERE id = ?1
"#;

pub const SELECT_ALL_ARTISTS: &str = r#"
SELECT id, name, bio, photo_url, created_at, updated_at
FROM artists
ORDER BY name ASC
"#;

pub const UPDATE_ARTIST: &str = r#"
UPDATE artists
SET name = ?2, bio = ?3, photo_url = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_ARTIST: &str = "DELETE FROM artists WHERE id = ?1";

// Painting queries
pub const INSERT_PAINTING: &str = r#"
INSERT INTO paintings (
    id, artist_id, title, description, year, technique,
    width_cm, height_cm, price_cents, image_url, available,
    created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
"#;

pub const SELECT_PAINTING_BY_ID: &str = r#"
SELECT id, artist_id, title, description, year, technique,
       width_cm, height_cm, price_cents, image_url, available,
       created_at, updated_at
FROM paintings
WHERE id = ?1
"#;

pub const SELECT_ALL_PAINTINGS: &str = r#"
SELECT id, artist_id, title, description, year, technique,
       width_cm, height_cm, price_cents, image_url, available,
       created_at, updated_at
FROM paintings
ORDER BY created_at DESC
"#;

pub const SELECT_PAINTINGS_BY_ARTIST: &str = r#"
SELECT id, artist_id, title, description, year, technique,
       width_cm, height_cm, price_cents, image_url, available,
       created_at, updated_at
FROM paintings
WHERE artist_id = ?1
ORDER BY created_at DESC
"#;

pub const UPDATE_PAINTING: &str = r#"
UPDATE paintings
SET artist_id = ?2, title = ?3, description = ?4, year = ?5, technique = ?6,
    width_cm = ?7, height_cm = ?8, price_cents = ?9, image_url = ?10,
    available = ?11, updated_at = ?12
WHERE id = ?1
"#;

pub const DELETE_PAINTING: &str = "DELETE FROM paintings WHERE id = ?1";

// Exhibition queries
pub const INSERT_EXHIBITION: &str = r#"
INSERT INTO exhibitions (
    id, title, description, location, starts_on, ends_on, image_url,
    created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const SELECT_EXHIBITION_BY_ID: &str = r#"
SELECT id, title, description, location, starts_on, ends_on, image_url,
       created_at, updated_at
FROM exhibitions
WHERE id = ?1
"#;

pub const SELECT_ALL_EXHIBITIONS: &str = r#"
SELECT id, title, description, location, starts_on, ends_on, image_url,
       created_at, updated_at
FROM exhibitions
ORDER BY starts_on DESC
"#;

pub const UPDATE_EXHIBITION: &str = r#"
UPDATE exhibitions
SET title = ?2, description = ?3, location = ?4, starts_on = ?5,
    ends_on = ?6, image_url = ?7, updated_at = ?8
WHERE id = ?1
"#;

pub const DELETE_EXHIBITION: &str = "DELETE FROM exhibitions WHERE id = ?1";

pub const SELECT_PAINTINGS_FOR_EXHIBITION: &str = r#"
SELECT p.id, p.artist_id, p.title, p.description, p.year, p.technique,
       p.width_cm, p.height_cm, p.price_cents, p.image_url, p.available,
       p.created_at, p.updated_at
FROM paintings p
JOIN exhibition_paintings ep ON ep.painting_id = p.id
WHERE ep.exhibition_id = ?1
ORDER BY p.created_at DESC
"#;

pub const DELETE_EXHIBITION_PAINTINGS: &str =
    "DELETE FROM exhibition_paintings WHERE exhibition_id = ?1";

pub const INSERT_EXHIBITION_PAINTING: &str = r#"
INSERT INTO exhibition_paintings (exhibition_id, painting_id)
VALUES (?1, ?2)
"#;

// News queries
pub const INSERT_NEWS_POST: &str = r#"
INSERT INTO news_posts (id, title, body, image_url, published_at, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_NEWS_POST_BY_ID: &str = r#"
SELECT id, title, body, image_url, published_at, created_at, updated_at
FROM news_posts
WHERE id = ?1
"#;

pub const SELECT_ALL_NEWS_POSTS: &str = r#"
SELECT id, title, body, image_url, published_at, created_at, updated_at
FROM news_posts
ORDER BY published_at DESC
"#;

pub const UPDATE_NEWS_POST: &str = r#"
UPDATE news_posts
SET title = ?2, body = ?3, image_url = ?4, published_at = ?5, updated_at = ?6
WHERE id = ?1
"#;

pub const DELETE_NEWS_POST: &str = "DELETE FROM news_posts WHERE id = ?1";

// Shop item queries
pub const INSERT_SHOP_ITEM: &str = r#"
INSERT INTO shop_items (id, title, description, price_cents, image_url, stock, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_SHOP_ITEM_BY_ID: &str = r#"
SELECT id, title, description, price_cents, image_url, stock, created_at, updated_at
FROM shop_items
WHERE id = ?1
"#;

pub const SELECT_ALL_SHOP_ITEMS: &str = r#"
SELECT id, title, description, price_cents, image_url, stock, created_at, updated_at
FROM shop_items
ORDER BY created_at DESC
"#;

pub const UPDATE_SHOP_ITEM: &str = r#"
UPDATE shop_items
SET title = ?2, description = ?3, price_cents = ?4, image_url = ?5, stock = ?6, updated_at = ?7
WHERE id = ?1
"#;

pub const DELETE_SHOP_ITEM: &str = "DELETE FROM shop_items WHERE id = ?1";

/// Decrements stock only when enough units remain; zero rows changed means
/// insufficient stock.
pub const DECREMENT_STOCK: &str = r#"
UPDATE shop_items
SET stock = stock - ?2, updated_at = ?3
WHERE id = ?1 AND stock >= ?2
"#;

// Pickup point queries
pub const INSERT_PICKUP_POINT: &str = r#"
INSERT INTO pickup_points (id, name, address, city, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_PICKUP_POINT_BY_ID: &str = r#"
SELECT id, name, address, city, created_at, updated_at
FROM pickup_points
WHERE id = ?1
"#;

pub const SELECT_ALL_PICKUP_POINTS: &str = r#"
SELECT id, name, address, city, created_at, updated_at
FROM pickup_points
ORDER BY city ASC, name ASC
"#;

pub const UPDATE_PICKUP_POINT: &str = r#"
UPDATE pickup_points
SET name = ?2, address = ?3, city = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_PICKUP_POINT: &str = "DELETE FROM pickup_points WHERE id = ?1";

// Order queries
pub const INSERT_ORDER: &str = r#"
INSERT INTO orders (
    id, customer_name, customer_email, customer_phone, delivery_method,
    pickup_point_id, delivery_address, comment, total_cents, status,
    created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
"#;

pub const INSERT_ORDER_ITEM: &str = r#"
INSERT INTO order_items (id, order_id, shop_item_id, title, price_cents, quantity)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_ORDER_BY_ID: &str = r#"
SELECT id, customer_name, customer_email, customer_phone, delivery_method,
       pickup_point_id, delivery_address, comment, total_cents, status,
       created_at, updated_at
FROM orders
WHERE id = ?1
"#;

pub const SELECT_ALL_ORDERS: &str = r#"
SELECT id, customer_name, customer_email, customer_phone, delivery_method,
       pickup_point_id, delivery_address, comment, total_cents, status,
       created_at, updated_at
FROM orders
ORDER BY created_at DESC
"#;

pub const SELECT_ORDER_ITEMS: &str = r#"
SELECT id, order_id, shop_item_id, title, price_cents, quantity
FROM order_items
WHERE order_id = ?1
"#;

pub const UPDATE_ORDER_STATUS: &str = r#"
UPDATE orders
SET status = ?2, updated_at = ?3
WHERE id = ?1
"#;

pub const DELETE_ORDER: &str = "DELETE FROM orders WHERE id = ?1";

// Admin account queries
pub const INSERT_ADMIN: &str = r#"
INSERT INTO admin_users (id, username, password_hash, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_ADMIN_BY_USERNAME: &str = r#"
SELECT id, username, password_hash, created_at, updated_at
FROM admin_users
WHERE username = ?1
"#;
