//! CLI command implementations.

pub mod aggregate;
pub mod comm;
pub mod inspect;
pub mod oplat;
pub mod reduce;
pub mod tabulate;

pub use aggregate::{execute_aggregate, AggregateArgs};
pub use comm::{execute_comm, CommArgs};
pub use inspect::{execute_inspect, InspectArgs};
pub use oplat::{execute_oplat, OpLatencyArgs};
pub use reduce::{execute_reduce, ReduceArgs};
pub use tabulate::{execute_tabulate, TabulateArgs};
