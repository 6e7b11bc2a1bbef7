use cookiekit::cookies::line::encode_value;
use cookiekit::cookies::manager::CookieManager;
use cookiekit::cookies::memory::MemoryJar;
use cookiekit::CookieJar;
use std::rc::Rc;

fn manager() -> CookieManager<MemoryJar> {
    CookieManager::new(MemoryJar::new())
}

#[test]
fn test_absent_cookie() {
    let cookies = manager();
    for name in ["sid", "theme", "a"] {
        assert_eq!(cookies.get(name), "");
        assert!(!cookies.exists(name));
    }
}

#[test]
fn test_set_then_get() {
    let cookies = manager();
    cookies.set("sid", "abc123", 60, "/");
    cookies.set("theme", "dark", 120, "/settings");

    assert!(cookies.exists("sid"));
    assert_eq!(cookies.get("sid"), "abc123");
    assert!(cookies.exists("theme"));
    assert_eq!(cookies.get("theme"), "dark");
}

#[test]
fn test_zero_ttl_is_already_expired() {
    let cookies = manager();
    cookies.set("gone", "1", 0, "/");

    assert!(!cookies.exists("gone"));
    assert_eq!(cookies.get_opt("gone"), None);
}

#[test]
fn test_delete_is_idempotent() {
    let cookies = manager();
    cookies.set("sid", "abc", 60, "/");

    cookies.delete("sid");
    assert!(!cookies.exists("sid"));
    cookies.delete("sid");
    assert!(!cookies.exists("sid"));
}

#[test]
fn test_delete_absent_is_noop() {
    let cookies = manager();
    cookies.set("keep", "1", 60, "/");
    cookies.delete("missing");

    assert_eq!(cookies.jar().read(), "keep=1");
}

#[test]
fn test_overwrite() {
    let cookies = manager();
    cookies.set("a", "1", 60, "/");
    cookies.set("a", "2", 60, "/");

    assert_eq!(cookies.get("a"), "2");
    assert_eq!(cookies.jar().read(), "a=2");
}

#[test]
fn test_update_matches_set() {
    let via_update = manager();
    let via_set = manager();

    via_update.update("n", "v", 60, "/");
    via_set.set("n", "v", 60, "/");

    assert_eq!(via_update.exists("n"), via_set.exists("n"));
    assert_eq!(via_update.get("n"), via_set.get("n"));
    assert_eq!(via_update.jar().read(), via_set.jar().read());

    via_update.update("n", "w", 60, "/");
    assert_eq!(via_update.get("n"), "w");
}

#[test]
fn test_clear_all() {
    let cookies = manager();
    let names = ["a", "b", "c"];
    for name in names {
        cookies.set(name, "x", 60, "/");
    }
    cookies.set("scoped", "y", 60, "/app");

    cookies.clear_all();

    for name in names.iter().chain(["scoped"].iter()) {
        assert!(!cookies.exists(name), "{} survived clear_all", name);
    }
    assert!(cookies.jar().is_empty());

    cookies.clear_all();
    assert!(cookies.jar().is_empty());
}

#[test]
fn test_encoded_value_round_trip() {
    let cookies = manager();
    cookies.set("a", &encode_value("x y"), 60, "/");

    assert_eq!(cookies.jar().read(), "a=x%20y");
    assert_eq!(cookies.get("a"), "x y");
}

#[test]
fn test_encoded_separators_round_trip() {
    let cookies = manager();
    cookies.set("a", &encode_value("k=v; other"), 60, "/");
    cookies.set("b", "2", 60, "/");

    assert!(cookies.exists("b"));
    assert_eq!(cookies.get("b"), "2");
    assert!(cookies.get("a").starts_with("k=v"));
}

#[test]
fn test_empty_value_reads_like_absent() {
    let cookies = manager();
    cookies.set("flag", "", 60, "/");

    assert!(cookies.exists("flag"));
    assert_eq!(cookies.get("flag"), "");
    assert_eq!(cookies.get_opt("flag"), Some(String::new()));
    assert_eq!(cookies.get_opt("other"), None);
}

#[test]
fn test_shared_jar() {
    let jar = Rc::new(MemoryJar::new());
    let writer = CookieManager::new(Rc::clone(&jar));
    let reader = CookieManager::new(Rc::clone(&jar));

    writer.set("sid", "abc", 60, "/");
    assert_eq!(reader.get("sid"), "abc");

    reader.clear_all();
    assert!(!writer.exists("sid"));
}

#[test]
fn test_outside_writes_are_visible() {
    let cookies = manager();
    cookies.jar().write("external=1; Path=/").unwrap();

    assert!(cookies.exists("external"));
    assert_eq!(cookies.names(), vec!["external"]);
}
