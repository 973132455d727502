use super::*;
use pretty_assertions::assert_eq;

fn scopes() -> Scopes<i32> {
    Scopes::new("global")
}

#[test]
fn test_set_and_get() {
    let mut env = scopes();
    assert_eq!(env.set("x", 1), None);
    assert_eq!(env.get("x"), Some(&1));
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_set_returns_previous_binding() {
    let mut env = scopes();
    env.set("x", 1);
    assert_eq!(env.set("x", 2), Some(1));
    assert_eq!(env.get("x"), Some(&2));
}

#[test]
fn test_lookup_falls_through_to_parent() {
    let mut env = scopes();
    env.set("x", 1);
    env.push("block");
    assert_eq!(env.get("x"), Some(&1));
}

#[test]
fn test_shadowing_and_pop() {
    let mut env = scopes();
    env.set("x", 1);
    env.push("block");
    assert_eq!(env.set("x", 2), None);
    assert_eq!(env.get("x"), Some(&2));
    assert!(env.pop());
    assert_eq!(env.get("x"), Some(&1));
}

#[test]
fn test_root_is_never_popped() {
    let mut env = scopes();
    assert!(!env.pop());
    assert_eq!(env.len(), 1);
    env.truncate(0);
    assert_eq!(env.len(), 1);
}

#[test]
fn test_assign_writes_owning_scope() {
    let mut env = scopes();
    env.set("x", 1);
    env.push("block");
    assert_eq!(env.assign("x", 5), Ok(1));
    env.pop();
    assert_eq!(env.get("x"), Some(&5));
}

#[test]
fn test_assign_unbound() {
    let mut env = scopes();
    env.push("block");
    assert_eq!(env.assign("missing", 1), Err(Unbound));
}

#[test]
fn test_path() {
    let mut env = scopes();
    env.push("outer");
    env.push("inner");
    assert_eq!(env.path(), vec!["global", "outer", "inner"]);
    assert_eq!(env.path_string(), "global::outer::inner");
}

#[test]
fn test_push_with_parent_skips_intermediate_scopes() {
    let mut env = scopes();
    env.set("g", 1);
    let captured = env.push("decl");
    env.set("captured", 2);
    env.push("caller");
    env.set("caller_local", 3);

    env.push_with_parent("frame", captured);
    assert_eq!(env.path(), vec!["global", "decl", "frame"]);
    assert_eq!(env.get("captured"), Some(&2));
    assert_eq!(env.get("g"), Some(&1));
    assert_eq!(env.get("caller_local"), None);

    env.pop();
    assert_eq!(env.get("caller_local"), Some(&3));
}

#[test]
fn test_stale_ids_are_detected() {
    let mut env = scopes();
    let first = env.push("first");
    assert!(env.is_live(first));
    env.pop();
    assert!(!env.is_live(first));

    // Same slot, new scope.
    let second = env.push("second");
    assert_eq!(first.index(), second.index());
    assert!(!env.is_live(first));
    assert!(env.is_live(second));
}

#[test]
fn test_push_with_stale_parent_uses_root() {
    let mut env = scopes();
    let gone = env.push("gone");
    env.pop();
    env.push("other");
    env.push_with_parent("frame", gone);
    assert_eq!(env.path(), vec!["global", "frame"]);
}

#[test]
fn test_assign_leaves_inner_bindings_behind() {
    let mut env = scopes();
    env.set("x", 1);
    env.push("block");
    env.set("y", 2);
    assert_eq!(env.assign("x", 10), Ok(1));
    env.pop();
    assert_eq!(env.get("x"), Some(&10));
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_clone_is_independent() {
    let mut env = scopes();
    env.set("x", 1);
    let snapshot = env.clone();
    env.set("x", 2);
    assert_eq!(snapshot.get("x"), Some(&1));
}
