//! Filter on the selected price range.

use crate::error::Result;
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Part;

/// Keeps parts whose price lies inside the selected range.
///
/// Both bounds are inclusive; a range without an upper bound only checks
/// the minimum.
pub struct PriceRangeFilter;

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply<'a>(&self, parts: Vec<&'a Part>, state: &FilterState) -> Result<Vec<&'a Part>> {
        if state.price.is_unbounded() {
            return Ok(parts);
        }

        let filtered: Vec<&Part> = parts
            .into_iter()
            .filter(|part| state.price.contains(part.price))
            .collect();

        Ok(filtered)
    }
}
