use merge_sort::stable::top_down;
use merge_sort::MergeError;

#[test]
fn demo_input() {
    let mut v = vec![38, 27, 43, 3, 9, 82, 10];
    top_down::sort(&mut v);
    assert_eq!(v, [3, 9, 10, 27, 38, 43, 82]);
}

#[test]
fn duplicates() {
    let mut v = vec![5, 3, 5, 1];
    top_down::sort(&mut v);
    assert_eq!(v, [1, 3, 5, 5]);
}

#[test]
fn merge_only() {
    let left = [1, 4, 7];
    let right = [2, 2, 9];
    let mut merged = [0; 6];

    top_down::merge(&mut merged, &left, &right);
    assert_eq!(merged, [1, 2, 2, 4, 7, 9]);
}

#[test]
fn merge_strings() {
    let left = ["apple".to_string(), "cherry".to_string()];
    let right = ["banana".to_string()];
    let mut merged = vec![String::new(); 3];

    top_down::try_merge(&mut merged, &left, &right).unwrap();
    assert_eq!(merged, ["apple", "banana", "cherry"]);
}

#[test]
fn try_merge_rejects_short_destination() {
    let mut merged = [0; 5];
    let res = top_down::try_merge(&mut merged, &[1, 4, 7], &[2, 2, 9]);

    assert_eq!(
        res,
        Err(MergeError::LengthMismatch {
            dst: 5,
            left: 3,
            right: 3
        })
    );
}

#[test]
fn records_keep_input_order() {
    #[derive(Clone, Debug)]
    struct Person {
        age: u8,
        name: &'static str,
    }

    // Sort by age only, through a key wrapper.
    #[derive(Clone, Debug)]
    struct ByAge(Person);

    impl PartialEq for ByAge {
        fn eq(&self, other: &Self) -> bool {
            self.0.age == other.0.age
        }
    }
    impl Eq for ByAge {}
    impl PartialOrd for ByAge {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for ByAge {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.age.cmp(&other.0.age)
        }
    }

    let mut people: Vec<ByAge> = [(30, "eve"), (25, "bob"), (30, "amy"), (25, "dan")]
        .into_iter()
        .map(|(age, name)| ByAge(Person { age, name }))
        .collect();

    top_down::sort(&mut people);

    let names: Vec<&str> = people.iter().map(|p| p.0.name).collect();
    assert_eq!(names, ["bob", "dan", "eve", "amy"]);
}
