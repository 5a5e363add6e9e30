//! Integration tests for the built-in type registry
//!
//! Exercises lookups, categories and the shared handle through the public
//! coltypes API the way schema tooling consumes it.

use coltypes::prelude::*;

/// Every canonical built-in name with its code and category
const BUILTIN: &[(&str, i32, TypeCategory)] = &[
    (names::ARRAY, 2003, TypeCategory::Special),
    (names::BIGINT, -5, TypeCategory::Numeric),
    (names::BINARY, -2, TypeCategory::Binary),
    (names::BIT, -7, TypeCategory::Numeric),
    (names::BLOB, 2004, TypeCategory::Binary),
    (names::BOOLEAN, 16, TypeCategory::Numeric),
    (names::CHAR, 1, TypeCategory::Textual),
    (names::CLOB, 2005, TypeCategory::Textual),
    (names::DATALINK, 70, TypeCategory::Special),
    (names::DATE, 91, TypeCategory::DateTime),
    (names::DECIMAL, 3, TypeCategory::Numeric),
    (names::DISTINCT, 2001, TypeCategory::Special),
    (names::DOUBLE, 8, TypeCategory::Numeric),
    (names::FLOAT, 6, TypeCategory::Numeric),
    (names::INTEGER, 4, TypeCategory::Numeric),
    (names::JAVA_OBJECT, 2000, TypeCategory::Special),
    (names::LONGNVARCHAR, -16, TypeCategory::Textual),
    (names::LONGVARBINARY, -4, TypeCategory::Binary),
    (names::LONGVARCHAR, -1, TypeCategory::Textual),
    (names::NCHAR, -15, TypeCategory::Textual),
    (names::NCLOB, 2011, TypeCategory::Textual),
    (names::NULL, 0, TypeCategory::Special),
    (names::NUMERIC, 2, TypeCategory::Numeric),
    (names::NVARCHAR, -9, TypeCategory::Textual),
    (names::OTHER, 1111, TypeCategory::Special),
    (names::REAL, 7, TypeCategory::Numeric),
    (names::REF, 2006, TypeCategory::Special),
    (names::SMALLINT, 5, TypeCategory::Numeric),
    (names::SQLXML, 2009, TypeCategory::Textual),
    (names::STRUCT, 2002, TypeCategory::Special),
    (names::TIME, 92, TypeCategory::DateTime),
    (names::TIMESTAMP, 93, TypeCategory::DateTime),
    (names::TIMESTAMPLTZ, -102, TypeCategory::DateTime),
    (names::TIMESTAMPTZ, -101, TypeCategory::DateTime),
    (names::TINYINT, -6, TypeCategory::Numeric),
    (names::VARBINARY, -3, TypeCategory::Binary),
    (names::VARCHAR, 12, TypeCategory::Textual),
];

#[test]
fn test_builtin_table_is_reproduced_exactly() {
    let types = TypeMap::builtin();

    for &(name, code, category) in BUILTIN {
        assert_eq!(types.code_for_name(name), Some(code), "{}", name);
        assert_eq!(types.code_for_name(&name.to_lowercase()), Some(code), "{}", name);
        assert_eq!(types.name_for_code(code), name);
        assert_eq!(types.category_of(code), Some(category), "{}", name);
    }

    assert_eq!(types.registry().len(), BUILTIN.len());
}

#[test]
fn test_free_functions_match_handle() {
    let types = TypeMap::builtin();

    assert_eq!(code_for_name("Timestamp"), types.code_for_name("Timestamp"));
    assert_eq!(name_for_code(codes::NCLOB), types.name_for_code(codes::NCLOB));
    assert_eq!(
        describe_codes(&[codes::BIT, codes::DATE]),
        types.describe_codes(&[codes::BIT, codes::DATE])
    );
}

#[test]
fn test_legacy_boolean_aliases() {
    let types = TypeMap::builtin();

    assert_eq!(types.code_for_name(names::BOOLEANINT), Some(codes::TINYINT));
    assert_eq!(types.code_for_name(names::BOOLEANCHAR), Some(codes::CHAR));
    assert_eq!(types.name_for_code(codes::TINYINT), names::TINYINT);
    assert_eq!(types.name_for_code(codes::CHAR), names::CHAR);
}

#[test]
fn test_unregistered_values_degrade_gracefully() {
    let types = TypeMap::builtin();

    assert_eq!(types.code_for_name("not-a-type"), None);
    assert_eq!(types.code_for_name(names::UUID), None);
    assert_eq!(types.name_for_code(99999), "99999");
    assert_eq!(types.category_of(99999), None);
    assert!(!types.is_numeric(99999));
    assert!(!types.is_date_time(99999));
    assert!(!types.is_text(99999));
    assert!(!types.is_binary(99999));
    assert!(!types.is_special(99999));
}

#[test]
fn test_describe_codes() {
    let types = TypeMap::builtin();

    assert_eq!(types.describe_codes(&[]), "");
    assert_eq!(
        types.describe_codes(&[codes::VARCHAR, codes::TIMESTAMP]),
        "VARCHAR, TIMESTAMP"
    );
    assert_eq!(
        types.describe_codes(&[codes::BLOB, -155, codes::BLOB]),
        "BLOB, -155, BLOB"
    );
}

#[test]
fn test_category_predicates_are_exclusive() {
    let types = TypeMap::builtin();

    for &(name, code, category) in BUILTIN {
        let flags = [
            (TypeCategory::Numeric, types.is_numeric(code)),
            (TypeCategory::DateTime, types.is_date_time(code)),
            (TypeCategory::Textual, types.is_text(code)),
            (TypeCategory::Binary, types.is_binary(code)),
            (TypeCategory::Special, types.is_special(code)),
        ];
        let set: Vec<TypeCategory> = flags
            .iter()
            .filter(|(_, hit)| *hit)
            .map(|(category, _)| *category)
            .collect();
        assert_eq!(set, vec![category], "{}", name);
    }
}

#[test]
fn test_lookups_are_stable_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let types = TypeMap::builtin();
                (
                    types.code_for_name("nvarchar"),
                    types.describe_codes(&[codes::REF, codes::STRUCT]),
                )
            })
        })
        .collect();

    for handle in handles {
        let (code, described) = handle.join().unwrap();
        assert_eq!(code, Some(codes::NVARCHAR));
        assert_eq!(described, "REF, STRUCT");
    }
}

#[test]
fn test_snapshot_json_lists_every_type() {
    let json = TypeMap::builtin().registry().to_json().unwrap();
    let snapshot: RegistrySnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot.types.len(), BUILTIN.len());
    assert_eq!(snapshot.aliases.len(), 2);
}
