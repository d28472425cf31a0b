use corkboard_core::{BoardStore, ItemPatch, MemorySlot, DEFAULT_ITEM_WIDTH};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn setup() -> BoardStore<MemorySlot> {
    BoardStore::open_with_rng(MemorySlot::new(), StdRng::seed_from_u64(7))
}

#[test]
fn add_item_assigns_unique_ids_and_increasing_z_index() {
    let mut store = setup();

    let mut ids = HashSet::new();
    let mut last_z = 0;
    for _ in 0..25 {
        let id = store.add_item();
        assert!(ids.insert(id.clone()), "duplicate id {id}");

        let z_index = store.item(&id).unwrap().z_index;
        assert!(z_index > last_z);
        last_z = z_index;
    }
    assert_eq!(store.z_counter(), last_z);
}

#[test]
fn add_item_spawns_inside_region_with_bounded_rotation() {
    let mut store = setup();

    for _ in 0..50 {
        let id = store.add_item();
        let item = store.item(&id).unwrap();
        assert!((200.0..600.0).contains(&item.x), "x out of range: {}", item.x);
        assert!((100.0..400.0).contains(&item.y), "y out of range: {}", item.y);
        assert!((-8.0..=8.0).contains(&item.rotation));
        let tenths = item.rotation * 10.0;
        assert!((tenths - tenths.round()).abs() < 1e-9, "not one decimal: {}", item.rotation);
    }
}

#[test]
fn add_item_at_uses_given_position_and_blank_defaults() {
    let mut store = setup();

    let id = store.add_item_at(12.5, -40.0);
    let item = store.item(&id).unwrap();
    assert_eq!((item.x, item.y), (12.5, -40.0));
    assert_eq!(item.width, DEFAULT_ITEM_WIDTH);
    assert!(item.title.is_empty());
    assert!(item.description.is_empty());
    assert_eq!(item.photo_src, None);
    assert_eq!(item.category, None);
}

#[test]
fn update_item_merges_given_fields_only() {
    let mut store = setup();
    let id = store.add_item_at(0.0, 0.0);
    let z_before = store.item(&id).unwrap().z_index;

    store.update_item(
        &id,
        ItemPatch {
            title: Some("Suspect".to_string()),
            photo_src: Some(Some("data:image/png;base64,AAAA".to_string())),
            category: Some(Some("person".to_string())),
            ..ItemPatch::default()
        },
    );

    let item = store.item(&id).unwrap();
    assert_eq!(item.title, "Suspect");
    assert_eq!(item.photo_src.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(item.category.as_deref(), Some("person"));
    assert_eq!(item.description, "");
    assert_eq!(item.z_index, z_before);
}

#[test]
fn update_item_on_missing_id_is_silent_noop() {
    let mut store = setup();
    store.add_item();
    let before = store.items().to_vec();

    store.update_item("missing", ItemPatch::title("ghost"));

    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn move_item_sets_position_and_raises_to_top() {
    let mut store = setup();
    let first = store.add_item();
    let _second = store.add_item();
    let _third = store.add_item();

    store.move_item(&first, 321.0, 123.0);

    let moved = store.item(&first).unwrap();
    assert_eq!((moved.x, moved.y), (321.0, 123.0));
    let max_z = store.items().iter().map(|item| item.z_index).max().unwrap();
    assert_eq!(moved.z_index, max_z);
    assert_eq!(store.items_by_z().last().unwrap().id, first);
}

#[test]
fn move_item_on_missing_id_does_not_consume_counter() {
    let mut store = setup();
    store.add_item();
    let counter = store.z_counter();

    store.move_item("missing", 1.0, 1.0);

    assert_eq!(store.z_counter(), counter);
}

#[test]
fn bring_to_front_keeps_position() {
    let mut store = setup();
    let first = store.add_item_at(5.0, 6.0);
    store.add_item();

    store.bring_to_front(&first);

    let item = store.item(&first).unwrap();
    assert_eq!((item.x, item.y), (5.0, 6.0));
    assert_eq!(item.z_index, store.z_counter());
}

#[test]
fn items_keep_insertion_order_while_display_order_follows_z_index() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();
    store.move_item(&a, 0.0, 0.0);

    let inserted: Vec<_> = store.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(inserted, vec![a.clone(), b.clone()]);

    let displayed: Vec<_> = store.items_by_z().iter().map(|item| item.id.clone()).collect();
    assert_eq!(displayed, vec![b, a]);
}

#[test]
fn delete_item_removes_item_and_touching_connections() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();
    let c = store.add_item();
    store.start_connect(&a);
    store.finish_connect(&b).unwrap();
    store.start_connect(&c);
    store.finish_connect(&a).unwrap();
    store.start_connect(&b);
    let kept = store.finish_connect(&c).unwrap();

    store.delete_item(&a);

    assert!(store.item(&a).is_none());
    assert!(store.connections().iter().all(|connection| !connection.touches(&a)));
    assert_eq!(store.connections().len(), 1);
    assert_eq!(store.connections()[0].id, kept);
}

#[test]
fn delete_item_on_missing_id_is_silent_noop() {
    let mut store = setup();
    store.add_item();

    store.delete_item("missing");

    assert_eq!(store.items().len(), 1);
}
