use std::collections::HashMap;

use super::{EnvProvider, HashMapProvider, ProcessEnvProvider};

#[test]
fn test_process_env() {
    let mut env = ProcessEnvProvider;
    let name = "__EXPANDVARS_ENV_TEST_VAR__";
    let value = "foobar";
    env.set_var(name, value);
    let result = env.get_var(name);
    std::env::remove_var(name);
    assert_eq!(Some(value.to_string()), result);
    assert_eq!(None, env.get_var(name));
}

#[test]
fn test_process_env_rejects_nul() {
    let mut env = ProcessEnvProvider;
    let name = "__EXPANDVARS_ENV_NUL_VAR__";
    env.set_var(name, "a\0b");
    assert_eq!(None, env.get_var(name));
}

#[test]
fn test_process_env_drops_unexportable_names() {
    let mut env = ProcessEnvProvider;
    env.set_var("", "x");
    env.set_var("__EXPANDVARS=ENV__", "x");
    assert_eq!(None, env.get_var("__EXPANDVARS"));
    assert!(std::env::vars_os().all(|(k, _)| k != "__EXPANDVARS"));
}

#[test]
fn test_hashmap() {
    let mut env = HashMapProvider::from(HashMap::new());
    let name = "__TEST_VAR__";
    let value = "foobar";
    env.set_var(name, value);
    assert_eq!(Some(value.to_string()), env.get_var(name));
    assert_eq!(Some(value.to_string()), env.remove_var(name));
    assert_eq!(None, env.get_var(name));
}

#[test]
fn test_hashmap_from_iter() {
    let env: HashMapProvider = [("A", "1"), ("B", "")].into_iter().collect();
    assert_eq!(Some("1".to_string()), env.get_var("A"));
    assert_eq!(Some(String::new()), env.get_var("B"));
    assert_eq!(None, env.get_var("C"));
    assert_eq!(2, env.into_inner().len());
}

#[test]
fn test_mut_ref_provider() {
    fn set_through<E: EnvProvider>(mut env: E) {
        env.set_var("X", "y");
    }
    let mut env = HashMapProvider::new();
    set_through(&mut env);
    assert_eq!(Some("y".to_string()), env.get_var("X"));
}
