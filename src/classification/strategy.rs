// ABOUTME: Ordered fallback chains of classification strategies per indicator
// ABOUTME: Each strategy classifies, declares the indicator unclassifiable, or defers to the next one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::IndicatorContext;
use std::fmt;
use tracing::trace;

/// Result of applying one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The strategy produced a status
    Classified(T),
    /// The strategy applies but the inputs cannot be classified; stop with no status
    Unclassified,
    /// The strategy does not apply; try the next one
    Declined,
}

impl<T> Outcome<T> {
    /// `Classified` when a status is present, `Unclassified` otherwise
    #[must_use]
    pub fn from_option(status: Option<T>) -> Self {
        status.map_or(Self::Unclassified, Self::Classified)
    }
}

/// One step of an indicator's fallback chain
pub trait ClassificationStrategy: Copy + fmt::Debug {
    /// Status produced by this indicator
    type Status: Copy + fmt::Debug;

    /// Strategy name for logging
    fn name(self) -> &'static str;

    /// Try to classify with this strategy
    fn apply(self, ctx: &IndicatorContext<'_>) -> Outcome<Self::Status>;
}

/// Walk a chain in order and return the first decisive outcome
///
/// An exhausted chain yields `None`, the same as an `Unclassified` step.
pub fn resolve<S: ClassificationStrategy>(
    indicator: &'static str,
    chain: &[S],
    ctx: &IndicatorContext<'_>,
) -> Option<S::Status> {
    for &strategy in chain {
        match strategy.apply(ctx) {
            Outcome::Classified(status) => {
                trace!(indicator, strategy = strategy.name(), ?status, "classified");
                return Some(status);
            }
            Outcome::Unclassified => {
                trace!(indicator, strategy = strategy.name(), "not classifiable");
                return None;
            }
            Outcome::Declined => {}
        }
    }
    trace!(indicator, "no strategy applied");
    None
}
