//! Event Repository (caterer portfolio)

use super::{BaseRepository, RepoError, RepoResult, make_record_id, record_key};
use crate::db::models::{Event, EventCreate, EventUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const EVENT_TABLE: &str = "event";

#[derive(Clone)]
pub struct EventRepository {
    base: BaseRepository,
}

impl EventRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all events for a caterer (management view)
    pub async fn find_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<Event>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let events: Vec<Event> = self
            .base
            .db()
            .query("SELECT * FROM event WHERE caterer = $caterer ORDER BY event_date DESC")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(events)
    }

    /// Find published events for a caterer (storefront view)
    pub async fn find_published_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<Event>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let events: Vec<Event> = self
            .base
            .db()
            .query("SELECT * FROM event WHERE caterer = $caterer AND is_published = true ORDER BY event_date DESC")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(events)
    }

    /// Find event by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Event>> {
        let key = record_key(EVENT_TABLE, id);
        let event: Option<Event> = self.base.db().select((EVENT_TABLE, key)).await?;
        Ok(event)
    }

    /// Create a new portfolio event
    pub async fn create(&self, caterer: RecordId, data: EventCreate) -> RepoResult<Event> {
        let event = Event {
            id: None,
            caterer,
            title: data.title,
            description: data.description,
            event_date: data.event_date,
            image: data.image.unwrap_or_default(),
            is_published: data.is_published.unwrap_or(true),
        };

        let created: Option<Event> = self.base.db().create(EVENT_TABLE).content(event).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create event".to_string()))
    }

    /// Update a portfolio event
    pub async fn update(&self, id: &str, data: EventUpdate) -> RepoResult<Event> {
        let thing = make_record_id(EVENT_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.title.is_some() {
            set_parts.push("title = $title");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.event_date.is_some() {
            set_parts.push("event_date = $event_date");
        }
        if data.image.is_some() {
            set_parts.push("image = $image");
        }
        if data.is_published.is_some() {
            set_parts.push("is_published = $is_published");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Event {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(&query_str).bind(("thing", thing));

        if let Some(v) = data.title {
            query = query.bind(("title", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.event_date {
            query = query.bind(("event_date", v));
        }
        if let Some(v) = data.image {
            query = query.bind(("image", v));
        }
        if let Some(v) = data.is_published {
            query = query.bind(("is_published", v));
        }

        let mut result = query.await?;
        let events: Vec<Event> = result.take(0)?;
        events
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Event {} not found", id)))
    }

    /// Hard delete a portfolio event
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(EVENT_TABLE, id);
        let result: Option<Event> = self.base.db().delete((EVENT_TABLE, key)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Event {} not found", id)));
        }
        Ok(())
    }
}
