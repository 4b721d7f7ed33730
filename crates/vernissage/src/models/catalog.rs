use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use vernissage_core::catalog::{Artist, Exhibition, NewsPost, Painting};
use vernissage_core::serde::deserialize_optional_string;

/// Request payload for creating an artist.
#[derive(Debug, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo_url: Option<String>,
}

impl CreateArtist {
    pub fn into_artist(self) -> Artist {
        let mut artist = Artist::new(self.name);
        artist.bio = self.bio;
        artist.photo_url = self.photo_url;
        artist
    }
}

/// Request payload for updating an artist. Absent fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateArtist {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo_url: Option<String>,
}

impl UpdateArtist {
    pub fn apply_to(self, artist: &mut Artist) {
        artist.updated_at = Utc::now();
        if let Some(name) = self.name {
            artist.name = name;
        }
        if let Some(bio) = self.bio {
            artist.bio = Some(bio);
        }
        if let Some(photo_url) = self.photo_url {
            artist.photo_url = Some(photo_url);
        }
    }
}

/// Request payload for creating a painting.
#[derive(Debug, Deserialize)]
pub struct CreatePainting {
    pub artist_id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub technique: Option<String>,
    #[serde(default)]
    pub width_cm: Option<i32>,
    #[serde(default)]
    pub height_cm: Option<i32>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    /// Whether the painting can currently be bought. Defaults to true.
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl CreatePainting {
    pub fn into_painting(self) -> Painting {
        let mut painting = Painting::new(self.artist_id, self.title);
        painting.description = self.description;
        painting.year = self.year;
        painting.technique = self.technique;
        painting.width_cm = self.width_cm;
        painting.height_cm = self.height_cm;
        painting.price_cents = self.price_cents;
        painting.image_url = self.image_url;
        painting.available = self.available;
        painting
    }
}

/// Request payload for updating a painting.
#[derive(Debug, Deserialize)]
pub struct UpdatePainting {
    #[serde(default)]
    pub artist_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub technique: Option<String>,
    #[serde(default)]
    pub width_cm: Option<i32>,
    #[serde(default)]
    pub height_cm: Option<i32>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl UpdatePainting {
    pub fn apply_to(self, painting: &mut Painting) {
        painting.updated_at = Utc::now();
        if let Some(artist_id) = self.artist_id {
            painting.artist_id = artist_id;
        }
        if let Some(title) = self.title {
            painting.title = title;
        }
        if let Some(description) = self.description {
            painting.description = Some(description);
        }
        if let Some(year) = self.year {
            painting.year = Some(year);
        }
        if let Some(technique) = self.technique {
            painting.technique = Some(technique);
        }
        if let Some(width_cm) = self.width_cm {
            painting.width_cm = Some(width_cm);
        }
        if let Some(height_cm) = self.height_cm {
            painting.height_cm = Some(height_cm);
        }
        if let Some(price_cents) = self.price_cents {
            painting.price_cents = Some(price_cents);
        }
        if let Some(image_url) = self.image_url {
            painting.image_url = Some(image_url);
        }
        if let Some(available) = self.available {
            painting.available = available;
        }
    }
}

/// Request payload for creating an exhibition.
#[derive(Debug, Deserialize)]
pub struct CreateExhibition {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
}

impl CreateExhibition {
    pub fn into_exhibition(self) -> Exhibition {
        let mut exhibition = Exhibition::new(self.title, self.starts_on, self.ends_on);
        exhibition.description = self.description;
        exhibition.location = self.location;
        exhibition.image_url = self.image_url;
        exhibition
    }
}

/// Request payload for updating an exhibition.
#[derive(Debug, Deserialize)]
pub struct UpdateExhibition {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
}

impl UpdateExhibition {
    pub fn apply_to(self, exhibition: &mut Exhibition) {
        exhibition.updated_at = Utc::now();
        if let Some(title) = self.title {
            exhibition.title = title;
        }
        if let Some(description) = self.description {
            exhibition.description = Some(description);
        }
        if let Some(location) = self.location {
            exhibition.location = Some(location);
        }
        if let Some(starts_on) = self.starts_on {
            exhibition.starts_on = starts_on;
        }
        if let Some(ends_on) = self.ends_on {
            exhibition.ends_on = ends_on;
        }
        if let Some(image_url) = self.image_url {
            exhibition.image_url = Some(image_url);
        }
    }
}

/// Request payload for replacing the set of paintings in an exhibition.
#[derive(Debug, Deserialize)]
pub struct SetExhibitionPaintings {
    pub painting_ids: Vec<Uuid>,
}

/// Request payload for creating a news post.
///
/// `published_at` defaults to now, so drafts are published on creation
/// unless a date is supplied.
#[derive(Debug, Deserialize)]
pub struct CreateNewsPost {
    pub title: String,
    pub body: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateNewsPost {
    pub fn into_news_post(self) -> NewsPost {
        let mut post = NewsPost::new(self.title, self.body);
        post.image_url = self.image_url;
        if let Some(published_at) = self.published_at {
            post.published_at = published_at;
        }
        post
    }
}

/// Request payload for updating a news post.
#[derive(Debug, Deserialize)]
pub struct UpdateNewsPost {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl UpdateNewsPost {
    pub fn apply_to(self, post: &mut NewsPost) {
        post.updated_at = Utc::now();
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
        if let Some(image_url) = self.image_url {
            post.image_url = Some(image_url);
        }
        if let Some(published_at) = self.published_at {
            post.published_at = published_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_artist_normalizes_empty_strings() {
        let payload: CreateArtist =
            serde_json::from_str(r#"{"name": "Maria Vane", "bio": ""}"#).unwrap();
        let artist = payload.into_artist();
        assert_eq!(artist.name, "Maria Vane");
        assert_eq!(artist.bio, None);
    }

    #[test]
    fn test_update_artist_keeps_absent_fields() {
        let mut artist = Artist::new("Maria Vane").with_bio("Quiet rooms");
        let payload: UpdateArtist =
            serde_json::from_str(r#"{"photo_url": "https://example.com/m.jpg"}"#).unwrap();
        payload.apply_to(&mut artist);
        assert_eq!(artist.name, "Maria Vane");
        assert_eq!(artist.bio.as_deref(), Some("Quiet rooms"));
        assert_eq!(artist.photo_url.as_deref(), Some("https://example.com/m.jpg"));
    }

    #[test]
    fn test_create_painting_defaults_to_available() {
        let artist_id = Uuid::new_v4();
        let body = format!(r#"{{"artist_id": "{artist_id}", "title": "Window at Dusk"}}"#);
        let payload: CreatePainting = serde_json::from_str(&body).unwrap();
        let painting = payload.into_painting();
        assert!(painting.available);
        assert_eq!(painting.price_cents, None);
    }

    #[test]
    fn test_create_exhibition_parses_dates() {
        let body = r#"{"title": "Spring Salon", "starts_on": "2026-03-01", "ends_on": "2026-04-15"}"#;
        let payload: CreateExhibition = serde_json::from_str(body).unwrap();
        let exhibition = payload.into_exhibition();
        assert_eq!(
            exhibition.starts_on,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_create_news_post_defaults_published_at() {
        let payload: CreateNewsPost =
            serde_json::from_str(r#"{"title": "Opening", "body": "Doors open at six."}"#).unwrap();
        let post = payload.into_news_post();
        assert!(post.published_at <= Utc::now());
    }
}
