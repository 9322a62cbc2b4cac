use std::fmt::Display;

use tracing_subscriber::EnvFilter;

use merge_sort::stable::top_down;

/// `[a b c]`, space separated.
fn bracketed<T: Display>(v: &[T]) -> String {
    let items: Vec<String> = v.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(" "))
}

fn main() {
    // Logs go to stderr so stdout only carries the arrays.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut arr = vec![38, 27, 43, 3, 9, 82, 10];
    println!("Original array: {}", bracketed(&arr));

    top_down::sort(&mut arr);
    tracing::info!(len = arr.len(), "sorted");

    println!("Sorted array: {}", bracketed(&arr));
}
