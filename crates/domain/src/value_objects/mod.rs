//! Domain Value Objects - immutable query descriptors

pub mod query_kind;
pub mod query_state;

pub use query_kind::QueryKind;
pub use query_state::QueryState;
