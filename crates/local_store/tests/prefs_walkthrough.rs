use std::{cell::RefCell, rc::Rc};

use local_store::{
    clear_storage, get_item, local_store, remove_item, selected_host_strategy, set_item,
    subscribe, unsubscribe, HostStrategy, LocalStore, MemoryLogger, MemoryStorageArea,
    StorageAction, StorageArea,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Prefs {
    theme: String,
    #[serde(default)]
    lang: Option<String>,
}

#[test]
fn prefs_walkthrough() {
    let area = MemoryStorageArea::default();
    let store = LocalStore::new(area.clone(), MemoryLogger::default());
    let actions = Rc::new(RefCell::new(Vec::new()));
    {
        let actions = Rc::clone(&actions);
        store
            .changes()
            .subscribe(move |event| actions.borrow_mut().push(event.action));
    }

    assert!(store.set_item("prefs", None, &json!({ "theme": "dark" }), false));
    assert_eq!(
        store.get_value("prefs", None),
        Some(json!({ "theme": "dark" }))
    );

    assert!(store.set_item("prefs", Some("lang"), "en", false));
    assert_eq!(
        store.get_value("prefs", None),
        Some(json!({ "theme": "dark", "lang": "en" }))
    );
    assert_eq!(
        store.get_item::<Prefs>("prefs", None),
        Some(Prefs {
            theme: "dark".to_string(),
            lang: Some("en".to_string()),
        })
    );

    assert!(store.remove_item("prefs", Some("theme"), false));
    assert_eq!(store.get_value("prefs", None), Some(json!({ "lang": "en" })));

    assert!(store.remove_item("prefs", None, false));
    assert_eq!(store.get_value("prefs", None), None);
    assert!(area.is_empty());

    assert_eq!(
        *actions.borrow(),
        vec![
            StorageAction::Added,
            StorageAction::Added,
            StorageAction::Removed,
            StorageAction::Removed,
        ]
    );
    assert!(store.logger().errors().is_empty());
}

#[test]
fn typed_records_round_trip() {
    let store = LocalStore::new(MemoryStorageArea::default(), MemoryLogger::default());
    let prefs = Prefs {
        theme: "light".to_string(),
        lang: None,
    };

    assert!(store.set_item("prefs", None, &prefs, false));
    assert_eq!(store.get_item::<Prefs>("prefs", None), Some(prefs));
    assert_eq!(store.get_item::<Option<String>>("prefs", Some("lang")), Some(None));
}

#[test]
fn clear_removes_every_previously_set_key() {
    let area = MemoryStorageArea::default();
    let store = LocalStore::new(area.clone(), MemoryLogger::default());
    for (index, key) in ["a", "b", "c"].into_iter().enumerate() {
        assert!(store.set_item(key, None, &index, false));
    }
    assert!(store.set_item("d", Some("field"), &true, false));
    assert_eq!(area.len(), 4);

    assert!(store.clear_storage(false));
    for key in ["a", "b", "c", "d"] {
        assert_eq!(store.get_value(key, None), None);
    }
}

#[test]
fn stores_over_separate_areas_are_isolated() {
    let first = LocalStore::new(MemoryStorageArea::default(), MemoryLogger::default());
    let second = LocalStore::new(MemoryStorageArea::default(), MemoryLogger::default());

    assert!(first.set_item("k", None, "first", false));
    assert_eq!(second.get_value("k", None), None);
    assert!(second.clear_storage(false));
    assert_eq!(first.get_item::<String>("k", None), Some("first".to_string()));
}

#[test]
fn default_store_follows_selected_host() {
    let store = local_store();
    match selected_host_strategy() {
        HostStrategy::Memory => {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let id = {
                let seen = Rc::clone(&seen);
                subscribe(move |event| seen.borrow_mut().push(event.key.clone()))
            };

            assert!(set_item("walkthrough", Some("n"), &1, false));
            assert_eq!(get_item::<i64>("walkthrough", Some("n")), Some(1));
            assert_eq!(
                store.area().get_raw("walkthrough").expect("load"),
                Some("{\"n\":1}".to_string())
            );
            assert!(remove_item("walkthrough", None, false));
            assert!(clear_storage(false));

            assert!(unsubscribe(id));
            assert_eq!(
                *seen.borrow(),
                vec!["walkthrough".to_string(), "walkthrough".to_string()]
            );
        }
        _ if !store.is_available() => {
            assert!(!set_item("walkthrough", None, &1, false));
            assert_eq!(get_item::<i64>("walkthrough", None), None);
            assert!(!remove_item("walkthrough", None, false));
            assert!(!clear_storage(false));
        }
        HostStrategy::Browser | HostStrategy::Absent => {}
    }
}
