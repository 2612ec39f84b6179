use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

use crate::cart::format_price;
use crate::spin_wheel::Segment;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum Category {
    Hamburguesas,
    Pizzas,
    Aperitivos,
    #[serde(rename = "Hot Dogs")]
    #[strum(serialize = "Hot Dogs")]
    HotDogs,
    Wraps,
    Combos,
    Bebidas,
    Postres,
}

/// Menu filter shown above the delivery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// "Todos" followed by every category, in menu order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "Todos"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub image: String,
    pub category: Category,
    pub rating: f32,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub color: Option<String>,
}

impl MenuItem {
    pub fn formatted_price(&self) -> String {
        format_price(self.price_cents)
    }

    pub fn to_segment(&self) -> Segment {
        Segment {
            id: self.id.clone(),
            label: self.name.clone(),
            weight: None,
            color: self.color.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
struct FeaturedEntry {
    id: String,
    #[serde(default)]
    badge: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// A menu item as presented in the featured grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedItem<'a> {
    pub item: &'a MenuItem,
    pub badge: Option<&'a str>,
    pub description: &'a str,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no menu items")]
    EmptyMenu,
    #[error("hero wheel has no segments")]
    EmptyWheel,
    #[error("menu item {0} is listed twice")]
    DuplicateItem(String),
    #[error("featured item {0} is not on the menu")]
    UnknownFeatured(String),
}

/// Everything the site shows about the food: the delivery menu, the hero
/// wheel slices and the featured dishes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Catalog {
    menu: Vec<MenuItem>,
    hero_wheel: Vec<Segment>,
    #[serde(default)]
    featured: Vec<FeaturedEntry>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.menu.is_empty() {
            return Err(CatalogError::EmptyMenu);
        }
        if self.hero_wheel.is_empty() {
            return Err(CatalogError::EmptyWheel);
        }

        let mut seen = HashSet::new();
        for item in &self.menu {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        if let Some(entry) = self.featured.iter().find(|f| !seen.contains(f.id.as_str())) {
            return Err(CatalogError::UnknownFeatured(entry.id.clone()));
        }
        Ok(())
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    pub fn items_in(&self, filter: CategoryFilter) -> Vec<&MenuItem> {
        self.menu
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    pub fn hero_wheel_segments(&self) -> Vec<Segment> {
        self.hero_wheel.clone()
    }

    /// The delivery wheel spins over the orderable menu itself.
    pub fn delivery_wheel_segments(&self) -> Vec<Segment> {
        self.menu.iter().map(MenuItem::to_segment).collect()
    }

    pub fn featured(&self) -> Vec<FeaturedItem<'_>> {
        self.featured
            .iter()
            .filter_map(|entry| {
                let item = self.item(&entry.id)?;
                Some(FeaturedItem {
                    item,
                    badge: entry.badge.as_deref(),
                    description: entry.description.as_deref().unwrap_or(&item.description),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const MINIMAL: &str = r##"{
        "menu": [
            { "id": "a", "name": "A", "description": "first", "price_cents": 100,
              "image": "", "category": "Pizzas", "rating": 4.0 },
            { "id": "b", "name": "B", "description": "second", "price_cents": 250,
              "image": "", "category": "Hot Dogs", "rating": 3.5, "color": "#000000" }
        ],
        "hero_wheel": [ { "id": "x", "label": "X" } ]
    }"##;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.menu().len(), 8);
        assert_eq!(catalog.hero_wheel_segments().len(), 8);
        assert_eq!(catalog.featured().len(), 6);
        assert_eq!(catalog.item("pizza1").unwrap().price_cents, 1599);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.items_in(CategoryFilter::All).len(), 8);

        let pizzas = catalog.items_in(CategoryFilter::Only(Category::Pizzas));
        assert_eq!(pizzas.len(), 1);
        assert_eq!(pizzas[0].id, "pizza1");

        let hot_dogs = catalog.items_in(CategoryFilter::Only(Category::HotDogs));
        assert_eq!(hot_dogs[0].name, "High Roller Hot Dog");
    }

    #[test]
    fn test_filter_options_and_labels() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].to_string(), "Todos");
        assert_eq!(CategoryFilter::Only(Category::HotDogs).to_string(), "Hot Dogs");
        assert_eq!(Category::from_str("Hot Dogs").unwrap(), Category::HotDogs);
    }

    #[test]
    fn test_delivery_wheel_follows_menu_order() {
        let catalog = Catalog::embedded().unwrap();
        let segments = catalog.delivery_wheel_segments();
        let ids: Vec<&str> = segments.iter().map(|s| s.id.as_str()).collect();
        let menu_ids: Vec<&str> = catalog.menu().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, menu_ids);
        assert!(segments.iter().all(|s| s.color.is_some()));
    }

    #[test]
    fn test_featured_badges_and_descriptions() {
        let catalog = Catalog::embedded().unwrap();
        let featured = catalog.featured();
        assert_eq!(featured[0].item.id, "burger1");
        assert_eq!(featured[0].badge, Some("Popular"));
        assert!(featured[2].badge.is_none());
        assert!(featured[0].description.contains("cebolla caramelizada"));
    }

    #[test]
    fn test_minimal_catalog_defaults() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert!(!catalog.menu()[0].popular);
        assert!(catalog.featured().is_empty());
        assert_eq!(catalog.menu()[1].formatted_price(), "$2.50");
        assert_eq!(catalog.delivery_wheel_segments()[1].color.as_deref(), Some("#000000"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = MINIMAL.replace(r#""id": "b""#, r#""id": "a""#);
        match Catalog::from_json(&json) {
            Err(CatalogError::DuplicateItem(id)) => assert_eq!(id, "a"),
            other => panic!("expected a duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_wheel() {
        let json = MINIMAL.replace(r#"[ { "id": "x", "label": "X" } ]"#, "[]");
        assert!(matches!(Catalog::from_json(&json), Err(CatalogError::EmptyWheel)));
    }

    #[test]
    fn test_rejects_unknown_featured() {
        let json = MINIMAL.replace(
            r#""hero_wheel""#,
            r#""featured": [ { "id": "zzz" } ], "hero_wheel""#,
        );
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::UnknownFeatured(id)) if id == "zzz"
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(Catalog::from_json("{ not json"), Err(CatalogError::Parse(_))));
    }
}
