//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a category's parts.

use crate::error::Result;
use crate::state::FilterState;
use catalog::Part;

/// Core trait for filtering parts.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters work on borrowed parts: they take the current selection and
///   return the subset they keep, never touching the parts themselves
/// - A filter must keep the relative order of the parts it keeps
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a selection of parts.
    ///
    /// # Arguments
    /// * `parts` - The current selection (takes ownership of the Vec)
    /// * `state` - The filter settings chosen by the user
    ///
    /// # Returns
    /// * `Ok(Vec<&Part>)` - The parts that pass, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, parts: Vec<&'a Part>, state: &FilterState) -> Result<Vec<&'a Part>>;
}
