//! Wire schemas for the restaurant backend
//!
//! Every response the dashboard consumes is parsed into these types at the
//! client boundary. A payload that does not fit fails there instead of
//! reaching view state.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a server-issued identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as sent by the server
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a menu item
    MenuItemId
);
opaque_id!(
    /// Identifier of an offer badge
    BadgeId
);
opaque_id!(
    /// Identifier of a gallery image
    ImageId
);

/// Menu categories shared with the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Traditional pizzas
    #[default]
    #[serde(rename = "pizze-tradizionali")]
    PizzeTradizionali,
    /// Speciality pizzas
    #[serde(rename = "pizze-speciali")]
    PizzeSpeciali,
    /// Calzones
    #[serde(rename = "calzoni")]
    Calzoni,
    /// Kebabs and sandwiches
    #[serde(rename = "kebab-panini")]
    KebabPanini,
    /// Burgers
    #[serde(rename = "burgers")]
    Burgers,
    /// Soft drinks
    #[serde(rename = "bibite")]
    Bibite,
    /// Fried sides
    #[serde(rename = "fritte")]
    Fritte,
    /// Indian dishes
    #[serde(rename = "Indian cuisine")]
    IndianCuisine,
    /// Desserts
    #[serde(rename = "dolco")]
    Dolco,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Self; 9] = [
        Self::PizzeTradizionali,
        Self::PizzeSpeciali,
        Self::Calzoni,
        Self::KebabPanini,
        Self::Burgers,
        Self::Bibite,
        Self::Fritte,
        Self::IndianCuisine,
        Self::Dolco,
    ];

    /// Value used on the wire and in form fields
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PizzeTradizionali => "pizze-tradizionali",
            Self::PizzeSpeciali => "pizze-speciali",
            Self::Calzoni => "calzoni",
            Self::KebabPanini => "kebab-panini",
            Self::Burgers => "burgers",
            Self::Bibite => "bibite",
            Self::Fritte => "fritte",
            Self::IndianCuisine => "Indian cuisine",
            Self::Dolco => "dolco",
        }
    }

    /// Label shown in selectors and on cards
    pub const fn label(self) -> &'static str {
        match self {
            Self::Burgers => "Burgers",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| crate::Error::validation("category", format!("unknown category '{s}'")))
    }
}

/// A menu item as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Server identifier
    #[serde(rename = "_id")]
    pub id: MenuItemId,

    /// Dish name
    pub name: String,

    /// Dish description
    #[serde(default)]
    pub description: String,

    /// Price as a decimal string
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,

    /// Menu category
    pub category: Category,

    /// URL of the stored photo
    #[serde(default)]
    pub image: String,

    /// Whether the dish can be ordered
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

/// `GET api/menu` response: items grouped by category key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedMenu {
    /// Category key to that category's items, in server order
    pub grouped_items: IndexMap<String, Vec<MenuItem>>,
}

impl GroupedMenu {
    /// Total number of items across all categories
    pub fn total_items(&self) -> usize {
        self.grouped_items.values().map(Vec::len).sum()
    }

    /// Flatten into one list: category order first, then each category's order
    pub fn into_items(self) -> Vec<MenuItem> {
        self.grouped_items.into_values().flatten().collect()
    }
}

/// A promotional badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferBadge {
    /// Server identifier
    #[serde(rename = "_id")]
    pub id: BadgeId,

    /// Badge headline
    pub title: String,

    /// Optional detail line
    #[serde(default)]
    pub description: Option<String>,

    /// Discount percentage
    pub discount: f64,

    /// Last day the offer applies
    #[serde(deserialize_with = "date_or_datetime")]
    pub expiry_date: NaiveDate,

    /// Computed by the server from the expiry date
    #[serde(default)]
    pub is_active: bool,
}

/// `POST api/offer-badges` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewOfferBadge {
    /// Badge headline
    #[validate(length(min = 1))]
    pub title: String,

    /// Detail line, sent even when empty
    pub description: String,

    /// Discount percentage
    pub discount: f64,

    /// Last day the offer applies
    pub expiry_date: NaiveDate,
}

/// A photo of the printed menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuImage {
    /// Server identifier
    #[serde(rename = "_id")]
    pub id: ImageId,

    /// Public URL of the stored image
    pub image_url: String,

    /// Upload time
    pub created_at: DateTime<Utc>,
}

impl MenuImage {
    /// Upload time as shown in the gallery, e.g. `Mar 15, 2024, 02:25 PM`
    pub fn uploaded_label(&self) -> String {
        self.created_at.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

fn date_or_datetime<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|e| serde::de::Error::custom(format!("invalid expiry date '{raw}': {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn item_json(id: &str, category: &str) -> serde_json::Value {
        json!({
            "_id": id,
            "name": format!("Dish {id}"),
            "description": "House speciality",
            "price": "9.50",
            "category": category,
            "image": format!("https://cdn.example/{id}.jpg"),
            "available": true
        })
    }

    #[test]
    fn test_category_wire_values_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(Category::Burgers.label(), "Burgers");
        assert_eq!(Category::IndianCuisine.label(), "Indian cuisine");
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        let result = serde_json::from_value::<MenuItem>(item_json("x", "sushi"));
        assert!(result.is_err());
    }

    #[test]
    fn test_grouped_menu_keeps_server_order() {
        // Raw text: `json!` would sort the category keys
        let payload = format!(
            r#"{{"groupedItems": {{"pizze-tradizionali": [{}, {}], "calzoni": [{}]}}}}"#,
            item_json("a", "pizze-tradizionali"),
            item_json("b", "pizze-tradizionali"),
            item_json("c", "calzoni"),
        );

        let menu: GroupedMenu = serde_json::from_str(&payload).unwrap();
        assert_eq!(menu.total_items(), 3);

        let ids: Vec<_> = menu
            .into_items()
            .into_iter()
            .map(|item| item.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_numeric_price_is_normalized() {
        let mut payload = item_json("a", "bibite");
        payload["price"] = json!(2.5);

        let item: MenuItem = serde_json::from_value(payload).unwrap();
        assert_eq!(item.price, "2.5");
    }

    #[test]
    fn test_missing_availability_defaults_to_true() {
        let mut payload = item_json("a", "fritte");
        payload.as_object_mut().unwrap().remove("available");

        let item: MenuItem = serde_json::from_value(payload).unwrap();
        assert!(item.available);
    }

    #[test]
    fn test_badge_accepts_timestamp_expiry() {
        let badge: OfferBadge = serde_json::from_value(json!({
            "_id": "b1",
            "title": "Happy Hour",
            "discount": 20,
            "expiryDate": "2025-12-31T00:00:00.000Z",
            "isActive": true
        }))
        .unwrap();

        assert_eq!(badge.expiry_date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(badge.description, None);
        assert!(badge.is_active);
    }

    #[test]
    fn test_new_badge_wire_format() {
        let badge = NewOfferBadge {
            title: "Happy Hour".to_string(),
            description: String::new(),
            discount: 20.0,
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&badge).unwrap(),
            json!({
                "title": "Happy Hour",
                "description": "",
                "discount": 20.0,
                "expiryDate": "2025-12-31"
            })
        );
    }

    #[test]
    fn test_new_badge_validation() {
        let mut badge = NewOfferBadge {
            title: String::new(),
            description: String::new(),
            discount: 20.0,
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        };
        assert!(badge.validate().is_err());

        badge.title = "Lunch".to_string();
        assert!(badge.validate().is_ok());

        // Only presence is checked; the backend owns any range rules
        badge.discount = 150.0;
        badge.title = "L".repeat(500);
        assert!(badge.validate().is_ok());
    }

    #[test]
    fn test_menu_image_label() {
        let image: MenuImage = serde_json::from_value(json!({
            "_id": "i1",
            "imageUrl": "https://cdn.example/menu.jpg",
            "createdAt": "2024-03-15T14:25:30Z"
        }))
        .unwrap();

        assert_eq!(image.uploaded_label(), "Mar 15, 2024, 02:25 PM");
    }
}
