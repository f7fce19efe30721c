//! Parser for category listing payloads.
//!
//! A listing is the JSON document the catalog API returns for one
//! category, and the same shape is used for listing files on disk:
//!
//! ```json
//! { "category": "cpu", "count": 2, "parts": [ { "id": "...", "name": "...", "price": 199.99, "properties": {} } ] }
//! ```
//!
//! Parts may omit their own `category` (it is inherited from the listing)
//! and may use numeric ids. Only basic presence checks are applied.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Part ids show up as strings or plain integers depending on the endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_id(self) -> PartId {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPart {
    id: RawId,
    name: String,
    #[serde(default)]
    category: Option<PartCategory>,
    price: f64,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    category: PartCategory,
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    parts: Vec<RawPart>,
}

/// Read and parse a listing file
pub fn parse_listing(path: &Path) -> Result<CategoryListing> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_listing_str(&content, &file)
}

/// Parse a listing from an in-memory JSON document.
///
/// `file` is only used to label errors.
pub fn parse_listing_str(content: &str, file: &str) -> Result<CategoryListing> {
    let raw: RawListing =
        serde_json::from_str(content).map_err(|source| CatalogError::ParseError {
            file: file.to_string(),
            source,
        })?;

    let category = raw.category;
    let mut parts = Vec::with_capacity(raw.parts.len());
    for raw_part in raw.parts {
        parts.push(convert_part(raw_part, category)?);
    }

    if let Some(declared) = raw.count {
        if declared != parts.len() {
            warn!(
                "Listing {} declares {} parts but contains {}; using actual count",
                file,
                declared,
                parts.len()
            );
        }
    }

    debug!("Parsed {} parts for category {} from {}", parts.len(), category, file);
    Ok(CategoryListing::new(category, parts))
}

/// Parse the category list document (a JSON array of category tokens)
pub fn parse_category_list(content: &str, file: &str) -> Result<Vec<PartCategory>> {
    let tokens: Vec<String> =
        serde_json::from_str(content).map_err(|source| CatalogError::ParseError {
            file: file.to_string(),
            source,
        })?;

    let categories: Vec<PartCategory> = tokens
        .iter()
        .filter_map(|token| match token.parse() {
            Ok(category) => Some(category),
            Err(_) => {
                warn!("Skipping unknown category {:?} in {}", token, file);
                None
            }
        })
        .collect();

    Ok(categories)
}

fn convert_part(raw: RawPart, listing_category: PartCategory) -> Result<Part> {
    let id = raw.id.into_id();

    if id.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            part_id: id,
            field: "id".to_string(),
            value: "<empty>".to_string(),
        });
    }

    if raw.name.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            part_id: id,
            field: "name".to_string(),
            value: "<empty>".to_string(),
        });
    }

    if !raw.price.is_finite() || raw.price < 0.0 {
        return Err(CatalogError::InvalidValue {
            part_id: id,
            field: "price".to_string(),
            value: raw.price.to_string(),
        });
    }

    let category = match raw.category {
        Some(category) if category != listing_category => {
            return Err(CatalogError::InvalidValue {
                part_id: id,
                field: "category".to_string(),
                value: category.to_string(),
            });
        }
        _ => listing_category,
    };

    Ok(Part {
        id,
        name: raw.name,
        category,
        // folds -0.0 into 0.0
        price: raw.price + 0.0,
        properties: raw.properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_inherits_category() {
        let json = r#"{
            "category": "cpu",
            "count": 2,
            "parts": [
                {"id": "r9", "name": "AMD Ryzen 9 7950X", "price": 549.0, "properties": {"cores": 16}},
                {"id": 42, "name": "Intel Core i5-13600K", "price": 289.99}
            ]
        }"#;

        let listing = parse_listing_str(json, "cpu.json").unwrap();
        assert_eq!(listing.category, PartCategory::Cpu);
        assert_eq!(listing.count, 2);
        assert_eq!(listing.parts[1].id, "42");
        assert!(listing.parts.iter().all(|p| p.category == PartCategory::Cpu));
        assert_eq!(listing.parts[0].property("cores"), Some(&PropertyValue::Number(16.0)));
        assert!(listing.parts[1].properties.is_empty());
    }

    #[test]
    fn test_count_mismatch_uses_actual_count() {
        let json = r#"{"category": "mouse", "count": 9, "parts": [
            {"id": "m1", "name": "Logitech G502", "price": 49.99}
        ]}"#;
        let listing = parse_listing_str(json, "mouse.json").unwrap();
        assert_eq!(listing.count, 1);
    }

    #[test]
    fn test_rejects_negative_price() {
        let json = r#"{"category": "mouse", "parts": [
            {"id": "m1", "name": "Logitech G502", "price": -1}
        ]}"#;
        let err = parse_listing_str(json, "mouse.json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let json = r#"{"category": "mouse", "parts": [{"id": "m1", "name": "  ", "price": 5}]}"#;
        let err = parse_listing_str(json, "mouse.json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_rejects_conflicting_part_category() {
        let json = r#"{"category": "mouse", "parts": [
            {"id": "k1", "name": "Razer Huntsman", "category": "keyboard", "price": 120}
        ]}"#;
        let err = parse_listing_str(json, "mouse.json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { ref field, .. } if field == "category"));
    }

    #[test]
    fn test_malformed_json_reports_file() {
        let err = parse_listing_str("{not json", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_parse_category_list() {
        let categories = parse_category_list(r#"["cpu", "videocard"]"#, "categories.json").unwrap();
        assert_eq!(categories, vec![PartCategory::Cpu, PartCategory::VideoCard]);

        let err = parse_category_list(r#"{"cpu": true}"#, "categories.json").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_category_list_skips_unknown_tokens() {
        let categories =
            parse_category_list(r#"["cpu", "toaster", "VideoCard"]"#, "categories.json").unwrap();
        assert_eq!(categories, vec![PartCategory::Cpu, PartCategory::VideoCard]);
    }

    #[test]
    fn test_negative_zero_price_is_normalised() {
        let json = r#"{"category": "caseaccessory", "parts": [
            {"id": "a", "name": "Free Sticker", "price": 0.0},
            {"id": "b", "name": "Free Cable Tie", "price": -0.0}
        ]}"#;
        let listing = parse_listing_str(json, "caseaccessory.json").unwrap();
        assert_eq!(listing.parts[1].price, 0.0);
        assert!(listing.parts[1].price.is_sign_positive());
    }
}
