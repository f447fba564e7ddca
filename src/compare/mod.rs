pub mod selection_set;

pub use selection_set::{CompareState, SelectionError, SelectionSet, SELECTION_CAPACITY};
