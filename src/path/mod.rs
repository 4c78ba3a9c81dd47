//! Dotted-path navigation over document trees
//!
//! `server.hosts.0.name` is split on `.`; a segment written as a canonical
//! non-negative integer can also address a sequence element. Reads walk YAML
//! source trees, writes build the JSON tree produced by an export.

use crate::domain::value::key_to_string;
use serde_json::{Map as JsonMap, Value as JsonValue};
use serde_yaml::Value as YamlValue;

pub const DELIMITER: char = '.';

/// One component of a dotted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub raw: &'a str,
    /// Set when `raw` is the canonical decimal form of an index (`0`, `12`, not `01`).
    pub index: Option<usize>,
}

impl<'a> Segment<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let index = raw.parse::<usize>().ok().filter(|i| i.to_string() == raw);
        Self { raw, index }
    }
}

pub fn segments(path: &str) -> impl Iterator<Item = Segment<'_>> {
    path.split(DELIMITER).map(Segment::parse)
}

/// Find the node at `path`. The empty path addresses the root itself.
pub fn lookup<'a>(root: &'a YamlValue, path: &str) -> Option<&'a YamlValue> {
    if path.is_empty() {
        return Some(root);
    }
    segments(path).try_fold(root, child)
}

fn child<'a>(node: &'a YamlValue, segment: Segment<'_>) -> Option<&'a YamlValue> {
    match node {
        YamlValue::Mapping(map) => map.get(segment.raw).or_else(|| {
            // Integer, boolean and null keys are addressed by their string form.
            map.iter()
                .find(|(key, _)| !key.is_string() && key_to_string(key) == segment.raw)
                .map(|(_, value)| value)
        }),
        YamlValue::Sequence(items) => segment.index.and_then(|i| items.get(i)),
        YamlValue::Tagged(tagged) => child(&tagged.value, segment),
        _ => None,
    }
}

/// Set `value` at `path` inside `root`, creating intermediate containers.
///
/// `sequence_len` reports the length of the source sequence found at a path
/// prefix, or `None` when the source node there is not a sequence. A missing
/// intermediate becomes a sequence only when the source node is one and the
/// following segment indexes inside it; otherwise it becomes a mapping, so
/// integer mapping keys stay keys. Skipped sequence slots are padded with
/// `null`. Scalars in the way are replaced. A write that would need a
/// non-index segment, or an index past the end, inside an existing sequence
/// is dropped and the sequence is left intact. The empty path is a no-op.
pub fn assign<F>(root: &mut JsonValue, path: &str, value: JsonValue, sequence_len: F)
where
    F: Fn(&str) -> Option<usize>,
{
    if path.is_empty() {
        return;
    }
    let parsed: Vec<Segment<'_>> = segments(path).collect();

    let mut node = root;
    let mut container_len = None;
    let mut start = 0;
    for (i, segment) in parsed.iter().enumerate() {
        let Some(next) = slot(node, *segment, container_len) else {
            tracing::debug!("Export of '{}' blocked by a sequence at '{}'", path, segment.raw);
            return;
        };
        let Some(following) = parsed.get(i + 1) else {
            *next = value;
            return;
        };

        let end = start + segment.raw.len();
        container_len = sequence_len(&path[..end]);
        start = end + DELIMITER.len_utf8();

        if !(next.is_object() || next.is_array()) {
            let wants_sequence = matches!(
                (following.index, container_len),
                (Some(index), Some(len)) if index < len
            );
            *next = if wants_sequence {
                JsonValue::Array(Vec::new())
            } else {
                JsonValue::Object(JsonMap::new())
            };
        }
        node = next;
    }
}

/// Slot for `segment` inside `node`. Sequences only grow up to one past
/// their current end or up to the source sequence length, whichever is larger.
fn slot<'a>(
    node: &'a mut JsonValue,
    segment: Segment<'_>,
    sequence_len: Option<usize>,
) -> Option<&'a mut JsonValue> {
    match node {
        JsonValue::Object(map) => Some(map.entry(segment.raw).or_insert(JsonValue::Null)),
        JsonValue::Array(items) => {
            let index = segment.index?;
            let limit = (items.len() + 1).max(sequence_len.unwrap_or(0));
            if index >= limit {
                return None;
            }
            if items.len() <= index {
                items.resize(index + 1, JsonValue::Null);
            }
            Some(&mut items[index])
        }
        other => {
            *other = JsonValue::Object(JsonMap::new());
            slot(other, segment, sequence_len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(text: &str) -> YamlValue {
        serde_yaml::from_str(text).expect("yaml")
    }

    #[test]
    fn segment_index_must_be_canonical() {
        assert_eq!(Segment::parse("3").index, Some(3));
        assert_eq!(Segment::parse("03").index, None);
        assert_eq!(Segment::parse("+3").index, None);
        assert_eq!(Segment::parse("port").index, None);
    }

    #[test]
    fn lookup_walks_nested_mappings() {
        let root = doc("server:\n  http:\n    port: 8080\n");
        assert_eq!(lookup(&root, "server.http.port").and_then(YamlValue::as_i64), Some(8080));
        assert!(lookup(&root, "server.https.port").is_none());
    }

    #[test]
    fn lookup_indexes_sequences() {
        let root = doc("hosts:\n  - name: a\n  - name: b\n");
        assert_eq!(lookup(&root, "hosts.1.name"), Some(&YamlValue::from("b")));
        assert!(lookup(&root, "hosts.2.name").is_none());
        assert!(lookup(&root, "hosts.first").is_none());
    }

    #[test]
    fn lookup_matches_non_string_keys_by_text() {
        let root = doc("ports:\n  8080: web\n  true: flag\n");
        assert_eq!(lookup(&root, "ports.8080"), Some(&YamlValue::from("web")));
        assert_eq!(lookup(&root, "ports.true"), Some(&YamlValue::from("flag")));
    }

    #[test]
    fn lookup_stops_at_scalars() {
        let root = doc("name: app\n");
        assert!(lookup(&root, "name.length").is_none());
    }

    #[test]
    fn empty_path_is_the_root() {
        let root = doc("a: 1\n");
        assert_eq!(lookup(&root, ""), Some(&root));
    }

    fn no_sequences(_: &str) -> Option<usize> {
        None
    }

    #[test]
    fn assign_creates_nested_objects() {
        let mut out = json!({});
        assign(&mut out, "server.http.port", json!(8080), no_sequences);
        assign(&mut out, "server.name", json!("edge"), no_sequences);
        similar_asserts::assert_eq!(
            out,
            json!({"server": {"http": {"port": 8080}, "name": "edge"}})
        );
    }

    #[test]
    fn assign_creates_padded_arrays_inside_source_sequences() {
        let mut out = json!({});
        assign(&mut out, "hosts.1.name", json!("b"), |p| (p == "hosts").then_some(2));
        similar_asserts::assert_eq!(out, json!({"hosts": [null, {"name": "b"}]}));
    }

    #[test]
    fn assign_keeps_integer_keys_of_mappings() {
        let mut out = json!({});
        assign(&mut out, "ports.8080", json!("web"), no_sequences);
        assign(&mut out, "ids.99999999999999999", json!("x"), no_sequences);
        similar_asserts::assert_eq!(
            out,
            json!({"ports": {"8080": "web"}, "ids": {"99999999999999999": "x"}})
        );
    }

    #[test]
    fn assign_uses_mapping_for_index_past_source_sequence() {
        let mut out = json!({});
        assign(&mut out, "hosts.5.name", json!("f"), |p| (p == "hosts").then_some(2));
        similar_asserts::assert_eq!(out, json!({"hosts": {"5": {"name": "f"}}}));
    }

    #[test]
    fn assign_leaves_existing_arrays_alone_for_key_segments() {
        let mut out = json!({"hosts": ["a", "b"]});
        assign(&mut out, "hosts.primary", json!("c"), no_sequences);
        similar_asserts::assert_eq!(out, json!({"hosts": ["a", "b"]}));
    }

    #[test]
    fn assign_bounds_growth_of_existing_arrays() {
        let mut out = json!({"hosts": ["a"]});
        assign(&mut out, "hosts.18446744073709551615", json!("z"), no_sequences);
        assign(&mut out, "hosts.9", json!("z"), no_sequences);
        similar_asserts::assert_eq!(out, json!({"hosts": ["a"]}));

        assign(&mut out, "hosts.1", json!("b"), no_sequences);
        assign(&mut out, "hosts.3", json!("d"), |p| (p == "hosts").then_some(4));
        similar_asserts::assert_eq!(out, json!({"hosts": ["a", "b", null, "d"]}));
    }

    #[test]
    fn assign_replaces_scalars_in_the_way() {
        let mut out = json!({});
        assign(&mut out, "db", json!("sqlite"), no_sequences);
        assign(&mut out, "db.file", json!("app.db"), no_sequences);
        similar_asserts::assert_eq!(out, json!({"db": {"file": "app.db"}}));
    }

    #[test]
    fn later_assignment_overwrites_subtree() {
        let mut out = json!({});
        assign(&mut out, "db.file", json!("app.db"), no_sequences);
        assign(&mut out, "db", json!("sqlite"), no_sequences);
        similar_asserts::assert_eq!(out, json!({"db": "sqlite"}));
    }

    #[test]
    fn assign_with_empty_path_does_nothing() {
        let mut out = json!({});
        assign(&mut out, "", json!(1), no_sequences);
        assert_eq!(out, json!({}));
    }
}
