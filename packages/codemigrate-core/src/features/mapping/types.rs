//! Type and import mapping tables
//!
//! Deterministic table lookups with two extensions: single-parameter generic
//! containers and bracketed array types. Unknown or custom types pass through
//! unchanged; correctness checking is the validator's job, not the mapper's.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Java type name → Python type name.
static TYPE_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("int", "int"),
        ("long", "int"),
        ("short", "int"),
        ("byte", "int"),
        ("float", "float"),
        ("double", "float"),
        ("boolean", "bool"),
        ("char", "str"),
        ("String", "str"),
        ("void", "None"),
        ("Integer", "int"),
        ("Long", "int"),
        ("Float", "float"),
        ("Double", "float"),
        ("Boolean", "bool"),
        ("Character", "str"),
        ("List", "list"),
        ("ArrayList", "list"),
        ("Set", "set"),
        ("HashSet", "set"),
        ("Map", "dict"),
        ("HashMap", "dict"),
    ])
});

/// Java import path → Python import statement. Entries mapping to the empty
/// string are Java-only imports covered by Python builtins and are dropped.
static IMPORT_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("java.util.List", "from typing import List"),
        ("java.util.ArrayList", ""),
        ("java.util.Set", "from typing import Set"),
        ("java.util.HashSet", ""),
        ("java.util.Map", "from typing import Dict"),
        ("java.util.HashMap", ""),
        ("java.io.IOException", ""),
        ("java.lang.String", ""),
    ])
});

fn lookup(ty: &str) -> String {
    TYPE_MAPPING.get(ty).map_or_else(|| ty.to_string(), |t| (*t).to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Map a Java type to its Python equivalent.
///
/// Only the outer/inner pair of a generic is looked up, so nested generics
/// beyond one level resolve incorrectly (`List<List<String>>` → `List[list]`).
/// Known limitation, pinned by tests.
pub fn map_type(java_type: &str) -> String {
    if let Some(open) = java_type.find('<') {
        let base = &java_type[..open];
        // Inner parameter up to the next '<' (if any), trailing '>' stripped.
        let rest = &java_type[open + 1..];
        let inner = rest
            .split('<')
            .next()
            .unwrap_or("")
            .trim_end_matches('>');

        let mapped_base = lookup(base);
        match mapped_base.as_str() {
            "list" | "set" => {
                return format!("{}[{}]", capitalize(&mapped_base), lookup(inner.trim()));
            }
            "dict" => {
                return match inner.split_once(',') {
                    Some((key, value)) => {
                        format!("Dict[{}, {}]", lookup(key.trim()), lookup(value.trim()))
                    }
                    None => format!("Dict[str, {}]", lookup(inner.trim())),
                };
            }
            // Unknown generic containers pass through whole.
            _ => {}
        }
    }

    if let Some(base) = java_type.strip_suffix("[]") {
        return format!("List[{}]", lookup(base));
    }

    lookup(java_type)
}

/// Map Java import paths to Python import statements, deduplicated and sorted.
/// Unmapped paths are dropped; they have no Python-side counterpart.
pub fn map_imports<S: AsRef<str>>(java_imports: &[S]) -> Vec<String> {
    let mut mapped: Vec<String> = java_imports
        .iter()
        .filter_map(|imp| IMPORT_MAPPING.get(imp.as_ref()))
        .filter(|stmt| !stmt.is_empty())
        .map(|stmt| (*stmt).to_string())
        .collect();
    mapped.sort();
    mapped.dedup();
    mapped
}
