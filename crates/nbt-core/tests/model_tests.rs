use nbt_core::{Compound, Config, List, NbtError, Tag, Value};
use serde_json::json;

// ============================================================================
// Value
// ============================================================================

#[test]
fn value_reports_active_tag() {
    assert_eq!(Value::from(1i8).tag(), Tag::Byte);
    assert_eq!(Value::from(1i16).tag(), Tag::Short);
    assert_eq!(Value::from(1i32).tag(), Tag::Int);
    assert_eq!(Value::from(1i64).tag(), Tag::Long);
    assert_eq!(Value::from(1.0f32).tag(), Tag::Float);
    assert_eq!(Value::from(1.0f64).tag(), Tag::Double);
    assert_eq!(Value::from(vec![1i8]).tag(), Tag::ByteArray);
    assert_eq!(Value::from("s").tag(), Tag::String);
    assert_eq!(Value::from(List::new(Tag::Int)).tag(), Tag::List);
    assert_eq!(Value::from(Compound::new()).tag(), Tag::Compound);
    assert_eq!(Value::from(vec![1i32]).tag(), Tag::IntArray);
    assert_eq!(Value::from(vec![1i64]).tag(), Tag::LongArray);
}

#[test]
fn accessor_returns_matching_payload() {
    assert_eq!(Value::from(127i8).as_byte().unwrap(), 127);
    assert_eq!(Value::from(32767i16).as_short().unwrap(), 32767);
    assert_eq!(Value::from(0.75f32).as_float().unwrap(), 0.75);
    assert_eq!(Value::from("Eggbert").as_string().unwrap(), "Eggbert");
    assert_eq!(Value::from(vec![1i64, 2]).as_long_array().unwrap(), &vec![1, 2]);
}

#[test]
fn accessor_of_wrong_kind_is_type_mismatch() {
    let err = Value::from(127i8).as_int().unwrap_err();
    assert!(
        matches!(
            err,
            NbtError::TypeMismatch {
                expected: Tag::Int,
                found: Tag::Byte
            }
        ),
        "got {err:?}"
    );

    let err = Value::from("text").as_compound().unwrap_err();
    assert!(matches!(
        err,
        NbtError::TypeMismatch {
            expected: Tag::Compound,
            found: Tag::String
        }
    ));
}

#[test]
fn no_implicit_numeric_widening() {
    assert!(Value::from(1i32).as_long().is_err());
    assert!(Value::from(1.0f32).as_double().is_err());
}

#[test]
fn reassignment_switches_kind() {
    let mut value = Value::from("a string");
    value = Value::from(vec![1i32, 2, 3]);
    assert_eq!(value.tag(), Tag::IntArray);
    value = Value::from(Compound::new());
    assert_eq!(value.tag(), Tag::Compound);
    value = Value::from(5i8);
    assert_eq!(value.as_byte().unwrap(), 5);
}

#[test]
fn mutable_accessor_edits_in_place() {
    let mut value = Value::from(vec![1i8, 2]);
    value.as_byte_array_mut().unwrap().push(3);
    assert_eq!(value.as_byte_array().unwrap(), &vec![1, 2, 3]);
}

#[test]
fn clone_is_deep() {
    let mut inner = Compound::new();
    inner.insert("name", "Hampus");
    let original = Value::from(inner);

    let mut copy = original.clone();
    copy.as_compound_mut().unwrap().insert("name", "Eggbert");

    let name = original.as_compound().unwrap().get("name").unwrap();
    assert_eq!(name.as_string().unwrap(), "Hampus");
}

// ============================================================================
// Compound
// ============================================================================

#[test]
fn compound_insert_and_get() {
    let mut c = Compound::new();
    assert!(c.insert("intTest", 2147483647i32).is_none());
    assert_eq!(c.get("intTest").unwrap().as_int().unwrap(), 2147483647);
    assert!(c.get("missing").is_none());
    assert!(c.contains_key("intTest"));
    assert_eq!(c.len(), 1);
}

#[test]
fn compound_insert_replaces_and_keeps_position() {
    let mut c = Compound::new();
    c.insert("a", 1i8);
    c.insert("b", 2i8);
    c.insert("c", 3i8);

    let old = c.insert("b", "two");
    assert_eq!(old, Some(Value::Byte(2)));
    assert_eq!(c.len(), 3);
    assert_eq!(c.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(c.get("b").unwrap().as_string().unwrap(), "two");
}

#[test]
fn compound_iterates_in_insertion_order() {
    let keys = ["zeta", "alpha", "mid", "beta"];
    let c: Compound = keys.iter().map(|k| (*k, 0i32)).collect();

    let first: Vec<&String> = c.iter().map(|(k, _)| k).collect();
    let second: Vec<&String> = (&c).into_iter().map(|(k, _)| k).collect();
    assert_eq!(first, keys);
    assert_eq!(first, second);
}

#[test]
fn compound_remove_reports_existence() {
    let mut c = Compound::new();
    c.insert("a", 1i8);
    c.insert("b", 2i8);
    c.insert("c", 3i8);

    assert!(c.remove("b"));
    assert!(!c.remove("b"));
    assert!(!c.remove("never"));
    assert_eq!(c.keys().collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn compound_take_returns_value() {
    let mut c = Compound::new();
    c.insert("x", 9i64);
    assert_eq!(c.take("x"), Some(Value::Long(9)));
    assert!(c.is_empty());
}

#[test]
fn compound_equality_ignores_order() {
    let a: Compound = [("x", 1i8), ("y", 2i8)].into_iter().collect();
    let b: Compound = [("y", 2i8), ("x", 1i8)].into_iter().collect();
    assert_eq!(a, b);
}

// ============================================================================
// List
// ============================================================================

#[test]
fn list_accepts_declared_kind() {
    let mut list = List::new(Tag::Long);
    for v in 11i64..=15 {
        list.push(v).unwrap();
    }
    assert_eq!(list.len(), 5);
    assert_eq!(list.element_type(), Some(Tag::Long));
    assert_eq!(list.get(0).unwrap().as_long().unwrap(), 11);
    assert_eq!(list.get(4).unwrap().as_long().unwrap(), 15);
}

#[test]
fn list_rejects_other_kind() {
    let mut list = List::new(Tag::Long);
    let err = list.push(5i32).unwrap_err();
    assert!(matches!(
        err,
        NbtError::TypeMismatch {
            expected: Tag::Long,
            found: Tag::Int
        }
    ));
    assert!(list.is_empty());
}

#[test]
fn empty_typed_list_keeps_its_type() {
    let list = List::new(Tag::Compound);
    assert!(list.is_empty());
    assert_eq!(list.element_type(), Some(Tag::Compound));
}

#[test]
fn untyped_list_adopts_first_kind() {
    let mut list = List::untyped();
    assert_eq!(list.element_type(), None);
    list.push("first").unwrap();
    assert_eq!(list.element_type(), Some(Tag::String));
    assert!(list.push(1i8).is_err());
}

#[test]
fn untyped_list_keeps_type_after_pop() {
    let mut list = List::untyped();
    list.push(1.5f64).unwrap();
    list.pop();
    assert_eq!(list.element_type(), Some(Tag::Double));
}

#[test]
fn list_index_out_of_bounds() {
    let mut list = List::from_values(Tag::Int, [1i32, 2]).unwrap();
    assert!(matches!(
        list.get(2).unwrap_err(),
        NbtError::IndexOutOfBounds { index: 2, len: 2 }
    ));
    assert!(matches!(
        list.get_mut(7).unwrap_err(),
        NbtError::IndexOutOfBounds { index: 7, len: 2 }
    ));
}

#[test]
fn list_from_values_stops_at_mismatch() {
    let values = vec![Value::Int(1), Value::Long(2)];
    assert!(List::from_values(Tag::Int, values).is_err());
}

#[test]
fn list_of_compounds_iterates_in_order() {
    let mut list = List::new(Tag::Compound);
    for i in 0..2 {
        let mut c = Compound::new();
        c.insert("created-on", 1264099775885i64);
        c.insert("name", format!("Compound tag #{i}"));
        list.push(c).unwrap();
    }
    let names: Vec<String> = list
        .iter()
        .map(|v| v.as_compound().unwrap().get("name").unwrap().as_string().unwrap().clone())
        .collect();
    assert_eq!(names, vec!["Compound tag #0", "Compound tag #1"]);
}

// ============================================================================
// serde interop
// ============================================================================

#[test]
fn document_serializes_to_ordered_json() {
    let mut c = Compound::new();
    c.insert("b", 1i8);
    c.insert("a", "x");
    c.insert("list", List::from_values(Tag::Long, [1i64, 2]).unwrap());
    c.insert("bytes", vec![-1i8, 0]);
    c.insert("half", 0.5f32);

    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(
        json,
        r#"{"b":1,"a":"x","list":[1,2],"bytes":[-1,0],"half":0.5}"#
    );
}

#[test]
fn nested_document_serializes_to_json_value() {
    let mut inner = Compound::new();
    inner.insert("value", 0.75f32);
    let mut outer = Compound::new();
    outer.insert("ham", inner);
    outer.insert("empty", List::new(Tag::Int));

    assert_eq!(
        serde_json::to_value(&outer).unwrap(),
        json!({"ham": {"value": 0.75}, "empty": []})
    );
}

#[test]
fn tag_display_uses_canonical_names() {
    assert_eq!(Tag::ByteArray.to_string(), "TAG_Byte_Array");
    assert_eq!(Tag::from_byte(12), Some(Tag::LongArray));
    assert_eq!(Tag::from_byte(0), None);
    assert_eq!(Tag::from_byte(13), None);
    assert_eq!(Tag::Compound.as_byte(), 10);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_deserializes_with_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.root_tag);
    assert_eq!(config.max_depth, nbt_core::config::DEFAULT_MAX_DEPTH);

    let config: Config = serde_json::from_str(r#"{"root_tag": true}"#).unwrap();
    assert!(config.root_tag);
}

#[test]
fn config_builders() {
    let config = Config::default().with_root_tag(true).with_max_depth(8);
    assert!(config.root_tag);
    assert_eq!(config.max_depth, 8);
}
