pub trait Sort {
    fn name() -> String;

    /// Elements are `Clone` because merge based implementations copy out their partitions.
    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}

pub mod patterns;
