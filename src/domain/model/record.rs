use serde::*;
use serde_json::Value;

/// One parsed post. The payload stays untyped JSON because any key may be
/// absent and nested lookups must never take the whole pipeline down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record(pub Value);

impl Record {
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// Top-level key lookup. None when the key is absent or the record is
    /// not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Chained lookup with default-on-miss at every level.
    pub fn path(&self, keys: &[&str]) -> Option<&Value> {
        let mut current = &self.0;
        for key in keys {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }
}

// Record to Value
impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.0
    }
}

// Value to Record
impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Record(value)
    }
}

/// Ordered collection of records, input-file order. Built once at load time
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Value>> for RecordSet {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values.into_iter().map(Record::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_should_resolve_nested_paths() {
        let record = Record::from(json!({
            "user": { "screen_name": "a", "followers_count": 5 }
        }));

        assert_eq!(
            record.path(&["user", "screen_name"]),
            Some(&json!("a"))
        );
        assert_eq!(record.path(&["user", "location"]), None);
        assert_eq!(record.path(&["retweeted_status", "text"]), None);
    }

    #[test]
    fn it_should_not_fail_on_non_object_records() {
        let record = Record::from(json!([1, 2, 3]));

        assert!(!record.is_object());
        assert_eq!(record.get("user"), None);
        assert_eq!(record.path(&["user", "screen_name"]), None);
    }

    #[test]
    fn it_should_keep_input_order() {
        let set = RecordSet::from(vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]);

        assert_eq!(set.len(), 3);
        let ns: Vec<_> = set.iter().map(|r| r.get("n").cloned()).collect();
        assert_eq!(ns, vec![Some(json!(1)), Some(json!(2)), Some(json!(3))]);
    }
}
