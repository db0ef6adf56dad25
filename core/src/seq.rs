//! Index removal and linear search over sequences.
//!
//! The generic functions work on any slice. The `*_value` variants accept a
//! `serde_json::Value` for callers holding dynamically shaped data; those are
//! the only entry points that can report `NotASequence`.

use serde_json::Value;

use crate::error::SeqError;

/// Copy of `seq` without the element at `index`. The input is not modified.
pub fn remove_at<T: Clone>(seq: &[T], index: usize) -> Result<Vec<T>, SeqError> {
    if index >= seq.len() {
        return Err(SeqError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len: seq.len(),
        });
    }
    let mut out = Vec::with_capacity(seq.len() - 1);
    out.extend_from_slice(&seq[..index]);
    out.extend_from_slice(&seq[index + 1..]);
    Ok(out)
}

/// Position of the first element equal to `needle`.
pub fn index_of<T: PartialEq>(needle: &T, haystack: &[T]) -> Option<usize> {
    haystack.iter().position(|item| item == needle)
}

/// `remove_at` for a JSON array. Negative indices are out of range.
pub fn remove_at_value(value: &Value, index: i64) -> Result<Value, SeqError> {
    let items = as_array(value)?;
    let len = items.len();
    match usize::try_from(index) {
        Ok(i) if i < len => remove_at(items, i).map(Value::Array),
        _ => Err(SeqError::IndexOutOfRange { index, len }),
    }
}

/// `index_of` for a JSON array, using structural equality.
pub fn index_of_value(needle: &Value, haystack: &Value) -> Result<Option<usize>, SeqError> {
    Ok(index_of(needle, as_array(haystack)?))
}

fn as_array(value: &Value) -> Result<&[Value], SeqError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(SeqError::NotASequence {
            kind: kind_name(other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn remove_at_drops_one_element() {
        let data = vec!["a", "b", "c", "d"];
        assert_eq!(remove_at(&data, 0).unwrap(), vec!["b", "c", "d"]);
        assert_eq!(remove_at(&data, 2).unwrap(), vec!["a", "b", "d"]);
        assert_eq!(remove_at(&data, 3).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn remove_at_single_element_leaves_empty() {
        assert!(remove_at(&[42], 0).unwrap().is_empty());
    }

    #[test]
    fn remove_at_rejects_index_at_or_past_len() {
        assert_eq!(
            remove_at(&[1, 2, 3], 3),
            Err(SeqError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            remove_at::<u8>(&[], 0),
            Err(SeqError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn index_of_finds_first_occurrence() {
        let data = vec![3, 1, 4, 1, 5];
        assert_eq!(index_of(&1, &data), Some(1));
        assert_eq!(index_of(&5, &data), Some(4));
        assert_eq!(index_of(&9, &data), None);
        assert_eq!(index_of(&1, &[]), None);
    }

    #[test]
    fn index_of_compares_structurally() {
        let data = vec![vec![1, 2], vec![3], vec![1, 2]];
        assert_eq!(index_of(&vec![3], &data), Some(1));
        assert_eq!(index_of(&vec![1, 2], &data), Some(0));
    }

    #[test]
    fn remove_at_value_on_array() {
        let value = json!([1, "two", {"three": 3}]);
        assert_eq!(remove_at_value(&value, 1).unwrap(), json!([1, {"three": 3}]));
        assert_eq!(value, json!([1, "two", {"three": 3}]));
    }

    #[test]
    fn remove_at_value_rejects_negative_and_large_indices() {
        let value = json!([1, 2]);
        assert_eq!(
            remove_at_value(&value, -1),
            Err(SeqError::IndexOutOfRange { index: -1, len: 2 })
        );
        assert_eq!(
            remove_at_value(&value, 2),
            Err(SeqError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn value_helpers_reject_non_arrays() {
        assert_eq!(
            remove_at_value(&json!({"a": 1}), 0),
            Err(SeqError::NotASequence { kind: "object" })
        );
        assert_eq!(
            index_of_value(&json!(1), &json!("abc")),
            Err(SeqError::NotASequence { kind: "string" })
        );
    }

    #[test]
    fn index_of_value_uses_deep_equality() {
        let haystack = json!([{"id": 1, "tags": ["a"]}, {"id": 2, "tags": ["b"]}]);
        assert_eq!(
            index_of_value(&json!({"tags": ["b"], "id": 2}), &haystack),
            Ok(Some(1))
        );
        assert_eq!(index_of_value(&json!({"id": 3}), &haystack), Ok(None));
        // 1 and 1.0 are different JSON numbers
        assert_eq!(index_of_value(&json!(1.0), &json!([1])), Ok(None));
    }
}
