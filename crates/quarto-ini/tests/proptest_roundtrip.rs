/*
 * proptest_roundtrip.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property-based tests for INI round-tripping.
 *
 * Generated models only use names and values that render as plain entry
 * lines: no leading `[`, no comment markers, no surrounding whitespace.
 */

use proptest::prelude::*;
use quarto_ini::{Ini, parse, to_ini_string};
use std::collections::BTreeMap;

fn option_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,8}"
}

fn section_name() -> impl Strategy<Value = String> {
    // The `s_` prefix keeps generated names clear of `default`.
    "s_[A-Za-z0-9 _.-]{0,8}[A-Za-z0-9]"
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 =:/.,;#_-]{0,16}".prop_map(|s| s.trim().to_string())
}

fn options() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(option_name(), value(), 0..6)
}

fn model() -> impl Strategy<Value = Ini> {
    (
        options(),
        prop::collection::vec((section_name(), options()), 0..5),
    )
        .prop_map(|(defaults, sections)| {
            let mut ini = Ini::new();
            for (option, value) in defaults {
                ini.set("default", option, value).unwrap();
            }
            for (name, options) in sections {
                if ini.add_section(&name).is_err() {
                    continue;
                }
                for (option, value) in options {
                    ini.set(&name, option, value).unwrap();
                }
            }
            ini
        })
}

proptest! {
    #[test]
    fn roundtrip_preserves_model(ini in model()) {
        let reparsed = parse(&to_ini_string(&ini)).unwrap();
        prop_assert_eq!(&reparsed, &ini);
        prop_assert_eq!(
            reparsed.sections().collect::<Vec<_>>(),
            ini.sections().collect::<Vec<_>>()
        );
    }

    #[test]
    fn serialization_is_idempotent(ini in model()) {
        let once = to_ini_string(&ini);
        let twice = to_ini_string(&parse(&once).unwrap());
        prop_assert_eq!(twice, once);
    }
}
