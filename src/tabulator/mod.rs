//! Pivot tabulator: assembles 2-D comparison tables across a sweep grid.

pub mod comm;
pub mod oplat;
pub mod pivot;

pub use comm::{render_comm_tables, COMM_STATS};
pub use oplat::{mean_tagged, render_op_blocks};
pub use pivot::{coordinate_path, read_result_field, render_pivot, render_pivot_plain};
