use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Collection holding menu items.
pub const MENU_ITEMS_COLLECTION: &str = "menuitems";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: String, description: Option<String>, price: f64) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            description,
            price,
        }
    }
}

/// Fields supplied by a partial update. `None` leaves the stored value alone;
/// `description: Some(None)` removes the stored description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    /// Render as an update document: `$set` for supplied values, `$unset`
    /// for a cleared description.
    pub fn to_update_document(&self) -> Document {
        let mut set = Document::new();
        let mut unset = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        match &self.description {
            Some(Some(description)) => {
                set.insert("description", description.as_str());
            }
            Some(None) => {
                unset.insert("description", "");
            }
            None => {}
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }

        let mut update = Document::new();
        if !set.is_empty() {
            update.insert("$set", set);
        }
        if !unset.is_empty() {
            update.insert("$unset", unset);
        }
        update
    }

    pub fn apply_to(self, item: &mut MenuItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem::new("Pizza".to_string(), Some("Margherita".to_string()), 9.5)
    }

    #[test]
    fn update_document_only_sets_provided_fields() {
        let changes = MenuItemChanges {
            price: Some(12.0),
            ..Default::default()
        };

        assert_eq!(changes.to_update_document(), doc! { "$set": { "price": 12.0 } });
    }

    #[test]
    fn apply_merges_and_keeps_unspecified_fields() {
        let mut item = pizza();
        let id = item.id;

        MenuItemChanges {
            name: Some("Calzone".to_string()),
            ..Default::default()
        }
        .apply_to(&mut item);

        assert_eq!(item.id, id);
        assert_eq!(item.name, "Calzone");
        assert_eq!(item.description.as_deref(), Some("Margherita"));
        assert_eq!(item.price, 9.5);
    }

    #[test]
    fn empty_changes_are_detected() {
        assert!(MenuItemChanges::default().is_empty());
        assert!(!MenuItemChanges {
            description: Some(Some(String::new())),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn cleared_description_is_unset() {
        let changes = MenuItemChanges {
            description: Some(None),
            price: Some(3.0),
            ..Default::default()
        };

        assert_eq!(
            changes.to_update_document(),
            doc! { "$set": { "price": 3.0 }, "$unset": { "description": "" } }
        );

        let mut item = pizza();
        changes.apply_to(&mut item);
        assert!(item.description.is_none());
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn absent_description_is_not_stored() {
        let item = MenuItem::new("Pizza".to_string(), None, 9.5);
        let document = mongodb::bson::to_document(&item).unwrap();

        assert!(!document.contains_key("description"));
        assert_eq!(document.get_object_id("_id").unwrap(), item.id);
        assert_eq!(document.get_f64("price").unwrap(), 9.5);
    }
}
