use super::{args, write_file};
use crate::compare::CompareOptions;
use crate::models::EntityKind;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

const STRICT_HCL: &str = "nil_same_as_empty    = false\nskip_volatile_fields = false\n";

fn resolve(options: Option<&Path>, nil_distinct: bool, keep_volatile: bool) -> CompareOptions {
    let mut args = args(EntityKind::Acl, Path::new("a.json"), Path::new("b.json"));
    args.options = options.map(Path::to_path_buf);
    args.nil_distinct = nil_distinct;
    args.keep_volatile = keep_volatile;
    args.resolve_options().unwrap()
}

#[test]
fn no_file_and_no_flags_is_default() {
    assert_eq!(resolve(None, false, false), CompareOptions::DEFAULT);
}

#[test]
fn flags_override_defaults() {
    assert_eq!(
        resolve(None, true, false),
        CompareOptions::DEFAULT.with_nil_same_as_empty(false)
    );
    assert_eq!(
        resolve(None, false, true),
        CompareOptions::DEFAULT.with_skip_volatile_fields(false)
    );
    assert_eq!(resolve(None, true, true), CompareOptions::STRICT);
}

#[test]
fn file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let strict = write_file(&dir, "strict.hcl", STRICT_HCL);

    assert_eq!(resolve(Some(&strict), false, false), CompareOptions::STRICT);
}

#[test]
fn flags_are_applied_on_top_of_the_file() {
    let dir = TempDir::new().unwrap();
    let partial = write_file(&dir, "volatile.hcl", "skip_volatile_fields = true\n");

    assert_eq!(
        resolve(Some(&partial), true, false),
        CompareOptions {
            nil_same_as_empty: false,
            skip_volatile_fields: true,
        }
    );
    assert_eq!(
        resolve(Some(&partial), false, true),
        CompareOptions::DEFAULT.with_skip_volatile_fields(false)
    );
    assert_eq!(resolve(Some(&partial), true, true), CompareOptions::STRICT);
}

#[test]
fn flags_never_loosen_a_strict_file() {
    let dir = TempDir::new().unwrap();
    let strict = write_file(&dir, "strict.hcl", STRICT_HCL);

    for (nil_distinct, keep_volatile) in [(true, false), (false, true), (true, true)] {
        assert_eq!(
            resolve(Some(&strict), nil_distinct, keep_volatile),
            CompareOptions::STRICT
        );
    }
}

#[test]
fn unreadable_options_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.hcl");

    let mut args = args(EntityKind::Acl, Path::new("a.json"), Path::new("b.json"));
    args.options = Some(missing);

    assert!(args.resolve_options().is_err());
}
