//! Ordering of filtered parts.

use crate::state::SortMode;
use catalog::Part;
use feruca::Collator;
use std::cmp::Ordering;

/// Order parts by `mode`.
///
/// All orderings are stable: parts that compare equal keep their relative
/// input order. [`SortMode::Unsorted`] returns the input untouched.
///
/// Names are ordered with the Unicode Collation Algorithm (CLDR root
/// tailoring): accents and case only break ties between otherwise equal
/// names, and lowercase comes before uppercase.
pub fn sort_parts<'a>(mut parts: Vec<&'a Part>, mode: SortMode) -> Vec<&'a Part> {
    match mode {
        SortMode::Name => {
            let mut collator = Collator::default();
            parts.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortMode::PriceLow => parts.sort_by(|a, b| compare_prices(a.price, b.price)),
        SortMode::PriceHigh => parts.sort_by(|a, b| compare_prices(b.price, a.price)),
        SortMode::Unsorted => {}
    }
    parts
}

/// Numeric comparison where `-0.0` and `0.0` tie
fn compare_prices(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::PartCategory;

    fn ids(parts: &[&Part]) -> Vec<String> {
        parts.iter().map(|p| p.id.clone()).collect()
    }

    fn scenario() -> Vec<Part> {
        vec![
            Part::new("amd", "AMD Ryzen 9", PartCategory::Cpu, 400.0),
            Part::new("intel", "Intel i9", PartCategory::Cpu, 500.0),
            Part::new("nvidia", "NVIDIA RTX 4090", PartCategory::VideoCard, 1600.0),
        ]
    }

    #[test]
    fn test_price_high() {
        let parts = scenario();
        let sorted = sort_parts(parts.iter().collect(), SortMode::PriceHigh);
        assert_eq!(ids(&sorted), vec!["nvidia", "intel", "amd"]);
    }

    #[test]
    fn test_price_low() {
        let parts = scenario();
        let sorted = sort_parts(parts.iter().rev().collect(), SortMode::PriceLow);
        assert_eq!(ids(&sorted), vec!["amd", "intel", "nvidia"]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let parts = vec![
            Part::new("x", "X", PartCategory::Mouse, 50.0),
            Part::new("y", "Y", PartCategory::Mouse, 20.0),
            Part::new("z", "Z", PartCategory::Mouse, 50.0),
            Part::new("w", "W", PartCategory::Mouse, 20.0),
        ];

        let low = sort_parts(parts.iter().collect(), SortMode::PriceLow);
        assert_eq!(ids(&low), vec!["y", "w", "x", "z"]);

        let high = sort_parts(parts.iter().collect(), SortMode::PriceHigh);
        assert_eq!(ids(&high), vec!["x", "z", "y", "w"]);
    }

    #[test]
    fn test_name_ignores_case() {
        let parts = vec![
            Part::new("1", "corsair K70", PartCategory::Keyboard, 1.0),
            Part::new("2", "ASUS ROG Strix", PartCategory::Keyboard, 1.0),
            Part::new("3", "Razer Huntsman", PartCategory::Keyboard, 1.0),
        ];
        let sorted = sort_parts(parts.iter().collect(), SortMode::Name);
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let parts = scenario();
        let input: Vec<&Part> = parts.iter().rev().collect();
        let sorted = sort_parts(input.clone(), SortMode::Unsorted);
        assert_eq!(ids(&sorted), ids(&input));
    }

    #[test]
    fn test_name_sort_collates_accents_and_case() {
        let parts = vec![
            Part::new("zotac", "Zotac RTX 4070", PartCategory::VideoCard, 1.0),
            Part::new("enermax", "Énermax Fan", PartCategory::CaseFan, 1.0),
            Part::new("lower", "intel arc", PartCategory::VideoCard, 1.0),
            Part::new("upper", "Intel arc", PartCategory::VideoCard, 1.0),
        ];
        let sorted = sort_parts(parts.iter().collect(), SortMode::Name);
        assert_eq!(ids(&sorted), vec!["lower", "upper", "enermax", "zotac"]);
    }

    #[test]
    fn test_name_sort_keeps_identical_names_in_input_order() {
        let parts = vec![
            Part::new("b", "Noctua NH-D15", PartCategory::CpuCooler, 99.0),
            Part::new("a", "Noctua NH-D15", PartCategory::CpuCooler, 109.0),
        ];
        let sorted = sort_parts(parts.iter().collect(), SortMode::Name);
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_signed_zero_prices_tie() {
        let parts = vec![
            Part::new("a", "Free Sticker", PartCategory::CaseAccessory, 0.0),
            Part::new("b", "Free Cable Tie", PartCategory::CaseAccessory, -0.0),
        ];

        let low = sort_parts(parts.iter().collect(), SortMode::PriceLow);
        assert_eq!(ids(&low), vec!["a", "b"]);

        let high = sort_parts(parts.iter().collect(), SortMode::PriceHigh);
        assert_eq!(ids(&high), vec!["a", "b"]);
    }
}
