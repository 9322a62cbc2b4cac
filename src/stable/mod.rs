// Textbook recursive merge sort, the reference implementation of this crate.
pub mod top_down;

// Same merge, driven by doubling run widths instead of recursion.
pub mod bottom_up;

// Baseline, used as test oracle and benchmark reference.
pub mod rust_std;
