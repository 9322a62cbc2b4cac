macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }
        }
    };
}

mod error;

pub mod stable;

pub use error::MergeError;
pub use sort_test_tools::{patterns, Sort};
