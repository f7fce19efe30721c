//! Core domain types for the parts catalog.
//!
//! A [`Part`] is one purchasable item inside a [`PartCategory`]. Parts are
//! immutable once fetched; everything downstream derives new sequences
//! from them instead of editing them in place.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier of a part, unique within its category
pub type PartId = String;

// =============================================================================
// Categories
// =============================================================================

/// The fixed set of part types the storefront sells.
///
/// Serialized as the lowercase token used by the catalog API
/// (`"videocard"`, `"cpucooler"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    CaseAccessory,
    CaseFan,
    Case,
    CpuCooler,
    Cpu,
    ExternalHardDrive,
    FanController,
    Headphones,
    InternalHardDrive,
    Keyboard,
    Memory,
    Monitor,
    Motherboard,
    Mouse,
    OpticalDrive,
    Os,
    PowerSupply,
    SoundCard,
    Speakers,
    ThermalPaste,
    Ups,
    VideoCard,
    Webcam,
    WiredNetworkCard,
    WirelessNetworkCard,
}

impl PartCategory {
    /// Every category, in the order the category selector lists them
    pub const ALL: [PartCategory; 25] = [
        PartCategory::CaseAccessory,
        PartCategory::CaseFan,
        PartCategory::Case,
        PartCategory::CpuCooler,
        PartCategory::Cpu,
        PartCategory::ExternalHardDrive,
        PartCategory::FanController,
        PartCategory::Headphones,
        PartCategory::InternalHardDrive,
        PartCategory::Keyboard,
        PartCategory::Memory,
        PartCategory::Monitor,
        PartCategory::Motherboard,
        PartCategory::Mouse,
        PartCategory::OpticalDrive,
        PartCategory::Os,
        PartCategory::PowerSupply,
        PartCategory::SoundCard,
        PartCategory::Speakers,
        PartCategory::ThermalPaste,
        PartCategory::Ups,
        PartCategory::VideoCard,
        PartCategory::Webcam,
        PartCategory::WiredNetworkCard,
        PartCategory::WirelessNetworkCard,
    ];

    /// Category shown when the storefront first opens
    pub const DEFAULT: PartCategory = PartCategory::VideoCard;

    /// The lowercase API token for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseAccessory => "caseaccessory",
            Self::CaseFan => "casefan",
            Self::Case => "case",
            Self::CpuCooler => "cpucooler",
            Self::Cpu => "cpu",
            Self::ExternalHardDrive => "externalharddrive",
            Self::FanController => "fancontroller",
            Self::Headphones => "headphones",
            Self::InternalHardDrive => "internalharddrive",
            Self::Keyboard => "keyboard",
            Self::Memory => "memory",
            Self::Monitor => "monitor",
            Self::Motherboard => "motherboard",
            Self::Mouse => "mouse",
            Self::OpticalDrive => "opticaldrive",
            Self::Os => "os",
            Self::PowerSupply => "powersupply",
            Self::SoundCard => "soundcard",
            Self::Speakers => "speakers",
            Self::ThermalPaste => "thermalpaste",
            Self::Ups => "ups",
            Self::VideoCard => "videocard",
            Self::Webcam => "webcam",
            Self::WiredNetworkCard => "wirednetworkcard",
            Self::WirelessNetworkCard => "wirelessnetworkcard",
        }
    }

    /// Human-readable name for headers and selectors
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CaseAccessory => "Case Accessories",
            Self::CaseFan => "Case Fans",
            Self::Case => "Cases",
            Self::CpuCooler => "CPU Coolers",
            Self::Cpu => "CPU",
            Self::ExternalHardDrive => "External HDDs",
            Self::FanController => "Fan Controllers",
            Self::Headphones => "Headphones",
            Self::InternalHardDrive => "Internal HDDs",
            Self::Keyboard => "Keyboards",
            Self::Memory => "Memory (RAM)",
            Self::Monitor => "Monitors",
            Self::Motherboard => "Motherboards",
            Self::Mouse => "Mice",
            Self::OpticalDrive => "Optical Drives",
            Self::Os => "Operating Systems",
            Self::PowerSupply => "Power Supplies",
            Self::SoundCard => "Sound Cards",
            Self::Speakers => "Speakers",
            Self::ThermalPaste => "Thermal Paste",
            Self::Ups => "UPS Systems",
            Self::VideoCard => "GPU",
            Self::Webcam => "Webcams",
            Self::WiredNetworkCard => "Network Cards",
            Self::WirelessNetworkCard => "Wireless Cards",
        }
    }

    /// Fallback product image for parts without their own picture
    pub fn image_path(&self) -> String {
        format!("/product-images/{}.png", self.as_str())
    }

    /// Property keys worth showing on a product card, most relevant first.
    ///
    /// Categories without a curated list return an empty slice.
    pub fn important_properties(&self) -> &'static [&'static str] {
        match self {
            Self::Cpu => &["cores", "threads", "base_clock", "boost_clock", "tdp", "socket"],
            Self::Memory => &["speed", "modules", "color", "first_word_latency", "cas_latency"],
            Self::VideoCard => &["chipset", "memory", "core_clock", "boost_clock", "length"],
            Self::Motherboard => &["socket", "form_factor", "max_memory", "memory_slots"],
            Self::PowerSupply => &["wattage", "modular", "efficiency", "color"],
            Self::Case => &["type", "color", "side_panel", "external_volume"],
            Self::Monitor => &["screen_size", "resolution", "refresh_rate", "response_time"],
            Self::CpuCooler => &["fan_rpm", "noise_level", "color", "height"],
            Self::InternalHardDrive => &["capacity", "type", "cache", "form_factor"],
            Self::Mouse => &["tracking_method", "connection_type", "max_dpi", "hand_orientation"],
            Self::Keyboard => &["style", "switches", "backlit", "tenkeyless"],
            _ => &[],
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        PartCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == token)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Properties
// =============================================================================

/// A single scalar in a part's property map.
///
/// The catalog API mixes booleans, numbers and strings freely, and now and
/// then sends `null` for a property it has no value for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Null => f.write_str("null"),
        }
    }
}

// =============================================================================
// Parts
// =============================================================================

/// One catalog part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub category: PartCategory,
    /// Non-negative, currency-agnostic price
    pub price: f64,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Part {
    /// Build a part with an empty property map
    pub fn new(
        id: impl Into<PartId>,
        name: impl Into<String>,
        category: PartCategory,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            properties: BTreeMap::new(),
        }
    }

    /// Attach a property (builder style, mostly for fixtures)
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Look up a property by key
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// Everything the catalog returns for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListing {
    pub category: PartCategory,
    pub count: usize,
    pub parts: Vec<Part>,
}

impl CategoryListing {
    pub fn new(category: PartCategory, parts: Vec<Part>) -> Self {
        Self {
            category,
            count: parts.len(),
            parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_token() {
        for category in PartCategory::ALL {
            let parsed: PartCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_serde_token_matches_as_str() {
        let json = serde_json::to_string(&PartCategory::WirelessNetworkCard).unwrap();
        assert_eq!(json, "\"wirelessnetworkcard\"");
        let category: PartCategory = serde_json::from_str("\"cpucooler\"").unwrap();
        assert_eq!(category, PartCategory::CpuCooler);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "toaster".parse::<PartCategory>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "toaster"));
    }

    #[test]
    fn test_category_parse_ignores_case_and_padding() {
        assert_eq!(" VideoCard ".parse::<PartCategory>().unwrap(), PartCategory::VideoCard);
    }

    #[test]
    fn test_display_names_and_images() {
        assert_eq!(PartCategory::VideoCard.display_name(), "GPU");
        assert_eq!(PartCategory::Memory.display_name(), "Memory (RAM)");
        assert_eq!(PartCategory::Cpu.image_path(), "/product-images/cpu.png");
    }

    #[test]
    fn test_important_properties() {
        assert_eq!(PartCategory::Cpu.important_properties()[0], "cores");
        assert!(PartCategory::Webcam.important_properties().is_empty());
    }

    #[test]
    fn test_property_values_deserialize_untagged() {
        let props: BTreeMap<String, PropertyValue> = serde_json::from_str(
            r#"{"cores": 8, "smt": true, "socket": "AM5", "graphics": null}"#,
        )
        .unwrap();

        assert_eq!(props["cores"], PropertyValue::Number(8.0));
        assert_eq!(props["smt"], PropertyValue::Bool(true));
        assert_eq!(props["socket"], PropertyValue::Text("AM5".to_string()));
        assert_eq!(props["graphics"], PropertyValue::Null);
    }

    #[test]
    fn test_property_display() {
        assert_eq!(PropertyValue::Number(16.0).to_string(), "16");
        assert_eq!(PropertyValue::Number(4.7).to_string(), "4.7");
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
    }
}
