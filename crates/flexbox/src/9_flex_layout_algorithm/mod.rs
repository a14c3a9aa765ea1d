//! Flex layout algorithm: line collection and flexible length resolution.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

mod flexible_lengths;
mod line_breaking;

pub use flexible_lengths::{FlexItem, LineTotals, ResolvedLine, resolve_flexible_lengths};
pub use line_breaking::{LineRange, break_into_lines};

#[cfg(test)]
mod tests;
