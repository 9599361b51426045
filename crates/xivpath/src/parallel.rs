//! Parallel batch classification using rayon.

use rayon::prelude::*;

use crate::descriptor::PathDescriptor;
use crate::parser::PathParser;

impl PathParser {
    /// Classify many paths in parallel.
    ///
    /// Descriptors are returned in input order.
    pub fn classify_many<S>(&self, paths: &[S]) -> Vec<PathDescriptor>
    where
        S: AsRef<str> + Sync,
    {
        paths
            .par_iter()
            .map(|path| self.classify(path.as_ref()))
            .collect()
    }
}
