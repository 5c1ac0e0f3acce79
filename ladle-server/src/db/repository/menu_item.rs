//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, make_record_id, record_key};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const MENU_ITEM_TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active items for a caterer (management view)
    pub async fn find_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<MenuItem>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE caterer = $caterer AND is_active = true ORDER BY sort_order")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find items a customer can order right now (storefront and quoting)
    pub async fn find_available_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<MenuItem>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE caterer = $caterer AND is_active = true AND is_available = true ORDER BY sort_order")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let key = record_key(MENU_ITEM_TABLE, id);
        let item: Option<MenuItem> = self.base.db().select((MENU_ITEM_TABLE, key)).await?;
        Ok(item)
    }

    /// Create a new menu item for a caterer
    pub async fn create(&self, caterer: RecordId, data: MenuItemCreate) -> RepoResult<MenuItem> {
        if data.price < 0.0 || !data.price.is_finite() {
            return Err(RepoError::Validation(
                "price must be a non-negative number".into(),
            ));
        }

        let item = MenuItem {
            id: None,
            caterer,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category.map(|c| make_record_id("category", &c)),
            dietary: data.dietary.unwrap_or_default(),
            image: data.image.unwrap_or_default(),
            is_available: data.is_available.unwrap_or(true),
            is_popular: data.is_popular.unwrap_or(false),
            sort_order: data.sort_order.unwrap_or(0),
            is_active: true,
        };

        let created: Option<MenuItem> = self
            .base
            .db()
            .create(MENU_ITEM_TABLE)
            .content(item)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Update a menu item
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        if let Some(price) = data.price
            && (price < 0.0 || !price.is_finite())
        {
            return Err(RepoError::Validation(
                "price must be a non-negative number".into(),
            ));
        }

        let thing = make_record_id(MENU_ITEM_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }
        if data.dietary.is_some() {
            set_parts.push("dietary = $dietary");
        }
        if data.image.is_some() {
            set_parts.push("image = $image");
        }
        if data.is_available.is_some() {
            set_parts.push("is_available = $is_available");
        }
        if data.is_popular.is_some() {
            set_parts.push("is_popular = $is_popular");
        }
        if data.sort_order.is_some() {
            set_parts.push("sort_order = $sort_order");
        }
        if data.is_active.is_some() {
            set_parts.push("is_active = $is_active");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(&query_str).bind(("thing", thing));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("category", make_record_id("category", &v).to_string()));
        }
        if let Some(v) = data.dietary {
            query = query.bind(("dietary", v));
        }
        if let Some(v) = data.image {
            query = query.bind(("image", v));
        }
        if let Some(v) = data.is_available {
            query = query.bind(("is_available", v));
        }
        if let Some(v) = data.is_popular {
            query = query.bind(("is_popular", v));
        }
        if let Some(v) = data.sort_order {
            query = query.bind(("sort_order", v));
        }
        if let Some(v) = data.is_active {
            query = query.bind(("is_active", v));
        }

        let mut result = query.await?;
        let items: Vec<MenuItem> = result.take(0)?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Hard delete a menu item
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(MENU_ITEM_TABLE, id);
        let result: Option<MenuItem> = self.base.db().delete((MENU_ITEM_TABLE, key)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::Dietary;

    async fn test_repo() -> MenuItemRepository {
        let service = DbService::new_in_memory().await.expect("in-memory db");
        MenuItemRepository::new(service.db)
    }

    fn caterer_ref() -> RecordId {
        make_record_id("caterer", "test")
    }

    #[tokio::test]
    async fn test_create_and_list_by_caterer() {
        let repo = test_repo().await;
        repo.create(
            caterer_ref(),
            MenuItemCreate {
                name: "Paneer Tikka".to_string(),
                description: None,
                price: 220.0,
                category: None,
                dietary: Some(Dietary::Veg),
                image: None,
                is_available: Some(true),
                is_popular: Some(true),
                sort_order: Some(1),
            },
        )
        .await
        .expect("create should succeed");

        let items = repo
            .find_by_caterer("caterer:test")
            .await
            .expect("list should succeed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Paneer Tikka");
        assert!(items[0].is_popular);
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let repo = test_repo().await;
        let result = repo
            .create(
                caterer_ref(),
                MenuItemCreate {
                    name: "Broken".to_string(),
                    description: None,
                    price: -1.0,
                    category: None,
                    dietary: None,
                    image: None,
                    is_available: None,
                    is_popular: None,
                    sort_order: None,
                },
            )
            .await;
        assert!(matches!(result, Err(RepoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unavailable_items_hidden_from_storefront() {
        let repo = test_repo().await;
        repo.create(
            caterer_ref(),
            MenuItemCreate {
                name: "Seasonal Special".to_string(),
                description: None,
                price: 300.0,
                category: None,
                dietary: None,
                image: None,
                is_available: Some(false),
                is_popular: None,
                sort_order: None,
            },
        )
        .await
        .expect("create should succeed");

        let manage = repo
            .find_by_caterer("caterer:test")
            .await
            .expect("list should succeed");
        let storefront = repo
            .find_available_by_caterer("caterer:test")
            .await
            .expect("list should succeed");

        assert_eq!(manage.len(), 1);
        assert!(storefront.is_empty());
    }
}
