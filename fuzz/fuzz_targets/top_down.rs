#![no_main]

use libfuzzer_sys::fuzz_target;

use merge_sort::stable::top_down as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::sort(&mut v);

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(v, expected);
});
