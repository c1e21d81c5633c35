//! Command implementations.

pub mod graph;
pub mod show;
pub mod validate;

pub use self::graph::execute_graph;
pub use self::show::execute_show;
pub use self::validate::execute_validate;
