use retab::error::Error;
use retab::ignore::build_ignore_set;

#[test]
fn test_default_patterns_always_present() {
    let glob_set = build_ignore_set(&[]).unwrap();

    assert!(glob_set.is_match("script.py.hbs"));
    assert!(glob_set.is_match("app/pro/nested/script.py.hbs"));
    assert!(!glob_set.is_match("deploy.yml.hbs"));
    assert!(!glob_set.is_match("script.py"));
}

#[test]
fn test_configured_patterns_extend_defaults() {
    let extra = vec!["*.bak.hbs".to_string(), "legacy/**".to_string()];
    let glob_set = build_ignore_set(&extra).unwrap();

    assert!(glob_set.is_match("old.bak.hbs"));
    assert!(glob_set.is_match("legacy/app/main.ts.hbs"));
    assert!(glob_set.is_match("script.py.hbs")); // Default pattern still works
    assert!(!glob_set.is_match("app/main.ts.hbs"));
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let extra = vec!["[".to_string()];
    match build_ignore_set(&extra) {
        Err(Error::IgnoreError(_)) => (),
        _ => panic!("Expected IgnoreError variant"),
    }
}
