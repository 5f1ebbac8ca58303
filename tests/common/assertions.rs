//! Domain-specific assertions for threatboard harnesses.

/// Assert that a collection's ids are `"1"`, `"2"`, … in order.
///
/// ```rust
/// assert_sequential_ids!(dataset.threats);
/// ```
#[macro_export]
macro_rules! assert_sequential_ids {
    ($records:expr) => {{
        for (i, record) in $records.iter().enumerate() {
            let expected = (i + 1).to_string();
            if record.id != expected {
                panic!(
                    "assert_sequential_ids! failed at position {}:\n  expected id: {:?}\n  actual id:   {:?}",
                    i, expected, record.id
                );
            }
        }
    }};
}

/// Assert that `value` lies within `range`, naming the field on failure.
pub fn assert_in_range<T>(field: &str, value: T, range: std::ops::RangeInclusive<T>)
where
    T: PartialOrd + std::fmt::Debug,
{
    assert!(
        range.contains(&value),
        "{field} = {value:?} outside fallback range {range:?}"
    );
}
