//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `ARCOSPHERE::*::V1\0` naming convention
//! 5. No raw `ARCOSPHERE::` domain literals in library source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use arcosphere_kernel::proof::hash_domain::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        let text = std::str::from_utf8(&bytes[..bytes.len() - 1]).unwrap();
        assert!(text.starts_with("ARCOSPHERE::"), "{domain}: {text}");
        assert!(text.ends_with("::V1"), "{domain}: {text}");
        assert!(
            text.chars()
                .all(|c| c.is_ascii_uppercase() || c == '_' || c == ':' || c.is_ascii_digit()),
            "{domain}: {text}"
        );
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn no_raw_domain_literals_outside_hash_domain() {
    let root = workspace_root();
    let mut files = Vec::new();
    for krate in ["kernel", "search", "harness"] {
        rust_files(&root.join(krate).join("src"), &mut files);
    }
    assert!(!files.is_empty(), "no source files found under {}", root.display());

    let needle = concat!("b\"", "ARCOSPHERE::");
    for file in files {
        if file.ends_with("hash_domain.rs") {
            continue;
        }
        let text = std::fs::read_to_string(&file).unwrap();
        assert!(
            !text.contains(needle),
            "raw domain literal in {}",
            file.display()
        );
    }
}
