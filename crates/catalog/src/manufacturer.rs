//! Manufacturer registry and name-based manufacturer inference.
//!
//! Catalog parts carry no manufacturer field, so the storefront derives one
//! from the product name. The registry below is static, ordered, and never
//! changes at runtime.
//!
//! Matching is a plain case-insensitive substring test, not a word-boundary
//! test: a short key buried in an unrelated word ("amd" inside "Camden",
//! "intel" inside "Intelligent") will match. The storefront has always
//! behaved this way and the filter results depend on it, so it is kept.

use serde::Serialize;

/// Key returned when nothing in the registry matches
pub const UNKNOWN_MANUFACTURER: &str = "unknown";

/// Display metadata for one manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManufacturerInfo {
    pub name: &'static str,
    pub logo: &'static str,
    pub color: &'static str,
}

const fn info(name: &'static str, logo: &'static str, color: &'static str) -> ManufacturerInfo {
    ManufacturerInfo { name, logo, color }
}

// Order matters: the first key found in a name wins, so "AMD Radeon RX 7900"
// resolves to "amd" rather than "radeon".
static REGISTRY: &[(&str, ManufacturerInfo)] = &[
    ("intel", info("Intel", "🔵", "#0071c5")),
    ("amd", info("AMD", "🔴", "#ed1c24")),
    ("nvidia", info("NVIDIA", "🟢", "#76b900")),
    ("radeon", info("AMD Radeon", "🔴", "#ed1c24")),
    ("corsair", info("Corsair", "⚫", "#ffcc00")),
    ("g.skill", info("G.Skill", "🔸", "#ff6600")),
    ("kingston", info("Kingston", "🔵", "#e31e24")),
    ("asus", info("ASUS", "🟡", "#0066cc")),
    ("msi", info("MSI", "🔴", "#ff0000")),
    ("gigabyte", info("Gigabyte", "🟠", "#ff8800")),
    ("asrock", info("ASRock", "⚪", "#666666")),
    ("evga", info("EVGA", "🟢", "#7cb518")),
    ("seasonic", info("Seasonic", "🔵", "#1e4d6b")),
    ("samsung", info("Samsung", "🔵", "#1428a0")),
    ("western digital", info("Western Digital", "🔵", "#0067b1")),
    ("seagate", info("Seagate", "🟢", "#00b04f")),
    ("noctua", info("Noctua", "🤎", "#8b4513")),
    ("cooler master", info("Cooler Master", "🔵", "#662d91")),
    ("logitech", info("Logitech", "🔵", "#00b8fc")),
    ("razer", info("Razer", "🟢", "#00ff00")),
    ("steelseries", info("SteelSeries", "🟠", "#ff6900")),
    (UNKNOWN_MANUFACTURER, info("Unknown", "⚪", "#666666")),
];

const UNKNOWN_INFO: ManufacturerInfo = info("Unknown", "⚪", "#666666");

/// All registry keys in matching order, `"unknown"` last
pub fn manufacturer_keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(key, _)| *key)
}

/// Returns true if `key` is a registry key (including `"unknown"`)
pub fn is_known_manufacturer(key: &str) -> bool {
    REGISTRY.iter().any(|(k, _)| *k == key)
}

/// Infer the manufacturer key for a product name.
///
/// ## Algorithm
/// 1. Lowercase the name and return the first registry key contained in it
/// 2. Otherwise, if the first whitespace-delimited token is itself a key,
///    return that token
/// 3. Otherwise return [`UNKNOWN_MANUFACTURER`]
///
/// Always returns a key that is present in the registry.
pub fn resolve_manufacturer(product_name: &str) -> &'static str {
    let name = product_name.to_lowercase();

    if let Some((key, _)) = REGISTRY.iter().find(|(key, _)| name.contains(key)) {
        return *key;
    }

    let first_word = name.split_whitespace().next().unwrap_or("");
    REGISTRY
        .iter()
        .find(|(key, _)| *key == first_word)
        .map(|(key, _)| *key)
        .unwrap_or(UNKNOWN_MANUFACTURER)
}

/// Display metadata for a key, falling back to the `"unknown"` entry
pub fn manufacturer_info(key: &str) -> &'static ManufacturerInfo {
    REGISTRY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, info)| info)
        .unwrap_or(&UNKNOWN_INFO)
}

/// Shorthand for `manufacturer_info(resolve_manufacturer(name))`
pub fn manufacturer_info_for(product_name: &str) -> &'static ManufacturerInfo {
    manufacturer_info(resolve_manufacturer(product_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_by_substring() {
        assert_eq!(resolve_manufacturer("AMD Ryzen 9 7950X"), "amd");
        assert_eq!(resolve_manufacturer("Intel Core i9-14900K"), "intel");
        assert_eq!(resolve_manufacturer("Gigabyte GeForce RTX 4070 NVIDIA"), "nvidia");
    }

    #[test]
    fn test_first_registry_key_wins() {
        // "amd" precedes "radeon" in the registry
        assert_eq!(resolve_manufacturer("AMD Radeon RX 7900 XTX"), "amd");
        assert_eq!(resolve_manufacturer("Sapphire Radeon RX 6600"), "radeon");
    }

    #[test]
    fn test_multi_word_and_dotted_keys() {
        assert_eq!(resolve_manufacturer("Western Digital Blue 1TB"), "western digital");
        assert_eq!(resolve_manufacturer("Cooler Master Hyper 212"), "cooler master");
        assert_eq!(resolve_manufacturer("G.Skill Trident Z5 32GB"), "g.skill");
    }

    #[test]
    fn test_substring_match_is_not_word_bounded() {
        assert_eq!(resolve_manufacturer("Camden Cable Sleeve Kit"), "amd");
        assert_eq!(resolve_manufacturer("Intelligent Fan Hub"), "intel");
    }

    #[test]
    fn test_unknown_fallbacks() {
        assert_eq!(resolve_manufacturer("Some Weird Brand Widget"), UNKNOWN_MANUFACTURER);
        assert_eq!(resolve_manufacturer(""), UNKNOWN_MANUFACTURER);
        assert_eq!(resolve_manufacturer("   "), UNKNOWN_MANUFACTURER);
    }

    #[test]
    fn test_resolution_is_always_a_registry_key() {
        for name in ["", "x", "Razer Viper", "Fractal Design North", "ÄMD Ryzen"] {
            assert!(is_known_manufacturer(resolve_manufacturer(name)));
        }
    }

    #[test]
    fn test_lookup_falls_back_to_unknown() {
        assert_eq!(manufacturer_info("nvidia").name, "NVIDIA");
        assert_eq!(manufacturer_info("fractal").name, "Unknown");
        assert_eq!(manufacturer_info_for("Noctua NH-D15").color, "#8b4513");
    }

    #[test]
    fn test_unknown_is_last_key() {
        assert_eq!(manufacturer_keys().last(), Some(UNKNOWN_MANUFACTURER));
        assert_eq!(manufacturer_keys().next(), Some("intel"));
    }
}
