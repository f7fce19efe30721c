//! Filter on the selected manufacturers.

use crate::error::Result;
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::{Part, resolve_manufacturer};

/// Keeps parts made by one of the selected manufacturers.
///
/// ## Algorithm
/// The manufacturer of each part is inferred from its name (see
/// [`catalog::resolve_manufacturer`]). An empty selection means "any
/// manufacturer", not "none".
pub struct ManufacturerFilter;

impl Filter for ManufacturerFilter {
    fn name(&self) -> &str {
        "ManufacturerFilter"
    }

    fn apply<'a>(&self, parts: Vec<&'a Part>, state: &FilterState) -> Result<Vec<&'a Part>> {
        if state.manufacturers.is_empty() {
            return Ok(parts);
        }

        let filtered: Vec<&Part> = parts
            .into_iter()
            .filter(|part| state.manufacturers.contains(resolve_manufacturer(&part.name)))
            .collect();

        Ok(filtered)
    }
}
