use crate::models::{MenuItem, MenuItemChanges};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Request body for both create and update. Unknown fields are ignored.
///
/// Each field is tri-state: absent (`None`), explicit `null` (`Some(None)`)
/// or a value. Field constraints declared here hold on every path; only
/// creation adds the required-field rule on top (see
/// [`MenuItemPayload::to_new_item`]).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MenuItemPayload {
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub price: Option<Option<f64>>,
}

/// Keep an explicit `null` distinguishable from a missing field.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn required(field: &'static str) -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(Cow::Owned(format!("{} cannot be null", field)));
    error
}

impl MenuItemPayload {
    /// Build a new item, or `None` when `name` or `price` is missing.
    ///
    /// An empty name, a zero price and `null` all count as missing.
    pub fn to_new_item(&self) -> Option<MenuItem> {
        let name = self.name.clone().flatten().filter(|name| !name.is_empty())?;
        let price = self.price.flatten().filter(|price| *price != 0.0)?;
        Some(MenuItem::new(
            name,
            self.description.clone().flatten(),
            price,
        ))
    }

    /// Field constraints plus the rule that `name` and `price`, once
    /// supplied, may not be `null`.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if matches!(self.name, Some(None)) {
            errors.add("name", required("name"));
        }
        if matches!(self.price, Some(None)) {
            errors.add("price", required("price"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Changes for an update. Call after [`MenuItemPayload::check`]; a `null`
    /// description clears the stored one.
    pub fn into_changes(self) -> MenuItemChanges {
        MenuItemChanges {
            name: self.name.flatten(),
            description: self.description,
            price: self.price.flatten(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_hex(),
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}
