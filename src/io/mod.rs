pub mod edge_list_reader;
pub use edge_list_reader::*;
