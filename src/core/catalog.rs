//! Service catalog shared by every booking surface.
//!
//! The catalog ships as an embedded JSON asset and is parsed once. Consumers
//! receive `&'static ServiceCatalog` so there is exactly one list of services
//! for the landing grid, the booking wizard, the booking page and the footer.

use std::collections::HashSet;
use std::sync::LazyLock;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

static CATALOG: LazyLock<ServiceCatalog> = LazyLock::new(|| {
    ServiceCatalog::from_json(EMBEDDED_CATALOG).unwrap_or_else(|e| {
        leptos::logging::error!("Embedded service catalog rejected: {}", e);
        ServiceCatalog::default()
    })
});

/// The process-wide read-only catalog.
pub fn service_catalog() -> &'static ServiceCatalog {
    &CATALOG
}

/// One bookable service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    /// Tailwind gradient stops used for the card accent
    pub color: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Display, Error)]
pub enum CatalogError {
    #[display("service catalog is malformed: {source}")]
    Malformed { source: serde_json::Error },
    #[display("service id '{id}' appears more than once")]
    DuplicateId { #[error(not(source))] id: String },
    #[display("service entry #{index} has an empty id or title")]
    IncompleteEntry { #[error(not(source))] index: usize },
}

/// Ordered list of services, looked up by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceCatalog {
    services: Vec<ServiceRecord>,
}

impl ServiceCatalog {
    /// Build a catalog, rejecting duplicate ids and blank entries.
    pub fn new(services: Vec<ServiceRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, service) in services.iter().enumerate() {
            if service.id.trim().is_empty() || service.title.trim().is_empty() {
                return Err(CatalogError::IncompleteEntry { index });
            }
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: service.id.clone(),
                });
            }
        }
        Ok(Self { services })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let services: Vec<ServiceRecord> =
            serde_json::from_str(json).map_err(|source| CatalogError::Malformed { source })?;
        Self::new(services)
    }

    pub fn get(&self, id: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Title for an id, if the id is known
    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|s| s.title.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price: "$1+".to_string(),
            duration: "1 day".to_string(),
            color: "from-blue-500 to-cyan-500".to_string(),
            highlights: Vec::new(),
        }
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = service_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.title_of("web-dev"), Some("Web Development"));
        assert_eq!(catalog.title_of("mobile"), Some("Mobile Development"));
    }

    #[test]
    fn test_embedded_catalog_order_is_preserved() {
        let ids: Vec<&str> = service_catalog().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["web-dev", "ui-ux", "performance", "security", "seo", "mobile"]
        );
    }

    #[test]
    fn test_every_service_has_highlights() {
        assert!(service_catalog().iter().all(|s| !s.highlights.is_empty()));
    }

    #[test]
    fn test_unknown_id() {
        let catalog = service_catalog();
        assert!(!catalog.contains("branding"));
        assert!(catalog.get("").is_none());
        assert!(catalog.title_of("WEB-DEV").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ServiceCatalog::new(vec![record("a", "A"), record("a", "Again")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "a"));
    }

    #[test]
    fn test_blank_entry_rejected() {
        let result = ServiceCatalog::new(vec![record("a", "A"), record(" ", "Blank")]);
        assert!(matches!(
            result,
            Err(CatalogError::IncompleteEntry { index: 1 })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = ServiceCatalog::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("service catalog is malformed"));
    }

    #[test]
    fn test_highlights_default_to_empty() {
        let json = r#"[{"id":"x","title":"X","description":"","price":"","duration":"","color":""}]"#;
        let catalog = ServiceCatalog::from_json(json).unwrap();
        assert!(catalog.get("x").unwrap().highlights.is_empty());
    }
}
