//! Nesting-depth strategies
//!
//! Both tree walks consult a [`NestingPolicy`] before descending. These are
//! the stock strategies; hosts can pass any closure instead.

use crate::domain::ports::NestingPolicy;

/// Never stops descending
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl NestingPolicy for Unlimited {
    fn continue_nesting(&self, _level: u32) -> bool {
        true
    }
}

/// Descends while the level reported by the walk is below `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxDepth(pub u32);

impl NestingPolicy for MaxDepth {
    fn continue_nesting(&self, level: u32) -> bool {
        level < self.0
    }
}

/// Build a boxed policy from an optional configured depth
pub fn nesting_from_depth(max_depth: Option<u32>) -> Box<dyn NestingPolicy> {
    match max_depth {
        Some(depth) => Box::new(MaxDepth(depth)),
        None => Box::new(Unlimited),
    }
}
