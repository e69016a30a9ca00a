use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../config/portfolio.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum PortfolioCategory {
    #[default]
    #[serde(rename = "All")]
    All,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "1:1")]
    Square,
}

impl PortfolioCategory {
    /// Filter buttons are rendered in this order.
    pub const VARIANTS: [Self; 4] = [Self::All, Self::Widescreen, Self::Vertical, Self::Square];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Widescreen => "16:9",
            Self::Vertical => "9:16",
            Self::Square => "1:1",
        }
    }

    pub fn matches(self, item_category: PortfolioCategory) -> bool {
        self == Self::All || self == item_category
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    pub title: String,
    pub category: PortfolioCategory,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("portfolio catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("portfolio item id {0} appears more than once")]
    DuplicateId(u32),
}

/// The read-only portfolio collection. Built once and shared by every carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<PortfolioItem>,
}

impl Catalog {
    pub fn new(items: Vec<PortfolioItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<PortfolioItem> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Positions into a [`Catalog`] for one category, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    category: PortfolioCategory,
    positions: Vec<usize>,
}

impl FilteredView {
    pub fn category(&self) -> PortfolioCategory {
        self.category
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get<'a>(&self, catalog: &'a Catalog, index: usize) -> Option<&'a PortfolioItem> {
        self.positions
            .get(index)
            .and_then(|position| catalog.items.get(*position))
    }

    pub fn items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a PortfolioItem> + 'a {
        self.positions
            .iter()
            .filter_map(|position| catalog.items.get(*position))
    }
}

pub fn filtered_view(catalog: &Catalog, category: PortfolioCategory) -> FilteredView {
    let positions = catalog
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| category.matches(item.category))
        .map(|(position, _)| position)
        .collect();

    FilteredView { category, positions }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn item(id: u32, kind: MediaKind, category: PortfolioCategory) -> PortfolioItem {
        PortfolioItem {
            id,
            kind,
            src: format!("/assets/test/{id}.{}", if kind == MediaKind::Video { "mp4" } else { "png" }),
            title: format!("Item {id}"),
            category,
        }
    }

    pub(crate) fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            item(1, MediaKind::Video, PortfolioCategory::Widescreen),
            item(2, MediaKind::Image, PortfolioCategory::Vertical),
            item(3, MediaKind::Image, PortfolioCategory::Square),
            item(4, MediaKind::Video, PortfolioCategory::Widescreen),
        ])
        .expect("ids are unique")
    }

    #[test]
    fn widescreen_filter_keeps_matching_items_in_order() {
        let catalog = mixed_catalog();
        let view = filtered_view(&catalog, PortfolioCategory::Widescreen);

        let ids: Vec<u32> = view.items(&catalog).map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(view.category(), PortfolioCategory::Widescreen);
    }

    #[test]
    fn all_category_returns_whole_collection() {
        let catalog = mixed_catalog();
        let view = filtered_view(&catalog, PortfolioCategory::All);

        let ids: Vec<u32> = view.items(&catalog).map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn every_category_is_an_order_preserving_subsequence() {
        let catalog = mixed_catalog();

        for category in PortfolioCategory::VARIANTS {
            let view = filtered_view(&catalog, category);
            let expected: Vec<&PortfolioItem> = catalog
                .items()
                .iter()
                .filter(|item| category == PortfolioCategory::All || item.category == category)
                .collect();
            let actual: Vec<&PortfolioItem> = view.items(&catalog).collect();
            assert_eq!(actual, expected, "category {}", category.label());
        }

        assert_eq!(catalog.len(), 4, "filtering must not touch the source");
    }

    #[test]
    fn category_without_items_yields_empty_view() {
        let catalog = Catalog::new(vec![item(1, MediaKind::Image, PortfolioCategory::Square)])
            .expect("ids are unique");

        let view = filtered_view(&catalog, PortfolioCategory::Vertical);
        assert!(view.is_empty());
        assert_eq!(view.get(&catalog, 0), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![
            item(7, MediaKind::Image, PortfolioCategory::Square),
            item(7, MediaKind::Video, PortfolioCategory::Widescreen),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(7))));
    }

    #[test]
    fn json_uses_display_labels_for_categories() {
        let raw = r#"[
            { "id": 1, "type": "video", "src": "/a.mp4", "title": "A", "category": "9:16" },
            { "id": 2, "type": "image", "src": "/b.png", "title": "B", "category": "1:1" }
        ]"#;

        let catalog = Catalog::from_json(raw).expect("catalog parses");
        assert_eq!(catalog.items()[0].kind, MediaKind::Video);
        assert_eq!(catalog.items()[0].category, PortfolioCategory::Vertical);
        assert_eq!(catalog.items()[1].category, PortfolioCategory::Square);
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Catalog::from_json(r#"[{ "id": 1, "type": "gif" }]"#);
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::bundled().expect("bundled catalog is valid");
        assert!(!catalog.is_empty());
    }
}
