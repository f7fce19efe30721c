//! Display formatting for parts and their properties.

use catalog::{Part, PropertyValue, resolve_manufacturer};
use std::collections::BTreeSet;

/// Format a price as US dollars: `1234.5` → `"$1,234.50"`.
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Turn a snake_case property key into a label: `boost_clock` → `"Boost Clock"`
pub fn format_property_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render a property value, adding the unit its key implies.
pub fn format_property_value(key: &str, value: &PropertyValue) -> String {
    match value {
        PropertyValue::Null => "N/A".to_string(),
        PropertyValue::Bool(true) => "Yes".to_string(),
        PropertyValue::Bool(false) => "No".to_string(),
        PropertyValue::Text(s) => s.clone(),
        PropertyValue::Number(n) => match key {
            "price" => format_price(*n),
            "base_clock" | "boost_clock" => format!("{n} GHz"),
            "memory" => format!("{n} GB"),
            "wattage" | "capacity_w" | "tdp" => format!("{n}W"),
            "capacity_va" => format!("{n}VA"),
            "screen_size" => format!("{n}\""),
            "max_dpi" => format!("{n} DPI"),
            "refresh_rate" => format!("{n}Hz"),
            "response_time" => format!("{n}ms"),
            "noise_level" => format!("{n}dB"),
            "height" | "length" => format!("{n}mm"),
            "amount" => format!("{n}g"),
            _ => n.to_string(),
        },
    }
}

/// Labelled values of the category's important properties that the part
/// actually has, in the category's order
pub fn card_properties(part: &Part) -> Vec<(String, String)> {
    part.category
        .important_properties()
        .iter()
        .filter_map(|key| {
            part.property(key)
                .map(|value| (format_property_key(key), format_property_value(key, value)))
        })
        .collect()
}

/// Sorted, de-duplicated manufacturer keys resolved from part names
pub fn unique_manufacturers<'a, I>(parts: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a Part>,
{
    parts
        .into_iter()
        .map(|part| resolve_manufacturer(&part.name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
