//! The query engine: pure, stateless relational operations over [`Table`]s.
//!
//! Every operation reads its inputs and produces a new, independent output
//! structure; nothing is mutated or cached, so concurrent requests can run
//! the same pipelines over a shared store snapshot with no coordination.
//!
//! [`Table`]: crate::datasets::Table

pub mod aggregate;
pub mod join;
pub mod pivot;
pub mod registry;
pub mod select;

pub use aggregate::{group_and_count, nest, AggregateNode, AggregateTree, AggregateValue};
pub use join::inner_join;
pub use pivot::{pivot, PivotCell, PivotMatrix};
pub use select::{drop_duplicates, filter_equals, select_columns};
