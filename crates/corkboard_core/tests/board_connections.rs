use corkboard_core::{BoardStore, ConnectState, MemorySlot};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn setup() -> BoardStore<MemorySlot> {
    BoardStore::open_with_rng(MemorySlot::new(), StdRng::seed_from_u64(11))
}

fn assert_idle(store: &BoardStore<MemorySlot>) {
    assert!(!store.connect_mode());
    assert_eq!(store.connect_from(), None);
    assert_eq!(store.connect_state(), &ConnectState::Idle);
}

#[test]
fn start_connect_enters_pending_state() {
    let mut store = setup();
    let a = store.add_item();

    store.start_connect(&a);

    assert!(store.connect_mode());
    assert_eq!(store.connect_from(), Some(&a));
}

#[test]
fn finish_connect_creates_connection_and_returns_to_idle() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();

    store.start_connect(&a);
    let id = store.finish_connect(&b).unwrap();

    assert_idle(&store);
    assert_eq!(store.connections().len(), 1);
    let connection = &store.connections()[0];
    assert_eq!(connection.id, id);
    assert_eq!(connection.from_id, a);
    assert_eq!(connection.to_id, b);
}

#[test]
fn reverse_direction_does_not_create_second_connection() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();
    store.start_connect(&a);
    store.finish_connect(&b).unwrap();

    store.start_connect(&b);
    assert_eq!(store.finish_connect(&a), None);

    store.start_connect(&a);
    assert_eq!(store.finish_connect(&b), None);

    assert_idle(&store);
    assert_eq!(store.connections().len(), 1);
}

#[test]
fn self_connection_is_ignored_and_returns_to_idle() {
    let mut store = setup();
    let a = store.add_item();

    store.start_connect(&a);
    assert_eq!(store.finish_connect(&a), None);

    assert_idle(&store);
    assert!(store.connections().is_empty());
}

#[test]
fn finish_connect_while_idle_creates_nothing() {
    let mut store = setup();
    let _a = store.add_item();
    let b = store.add_item();

    assert_eq!(store.finish_connect(&b), None);
    assert!(store.connections().is_empty());
    assert_idle(&store);
}

#[test]
fn finish_connect_to_missing_item_is_ignored() {
    let mut store = setup();
    let a = store.add_item();

    store.start_connect(&a);
    assert_eq!(store.finish_connect("missing"), None);

    assert!(store.connections().is_empty());
    assert_idle(&store);
}

#[test]
fn cancel_connect_discards_pending_source() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();

    store.start_connect(&a);
    store.cancel_connect();
    assert_idle(&store);

    assert_eq!(store.finish_connect(&b), None);
    assert!(store.connections().is_empty());
}

#[test]
fn deleting_pending_source_cancels_gesture() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();

    store.start_connect(&a);
    store.delete_item(&a);

    assert_idle(&store);
    assert_eq!(store.finish_connect(&b), None);
}

#[test]
fn remove_connection_is_unconditional_and_tolerates_missing_ids() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();
    store.start_connect(&a);
    let id = store.finish_connect(&b).unwrap();

    store.remove_connection("missing");
    assert_eq!(store.connections().len(), 1);

    store.remove_connection(&id);
    assert!(store.connections().is_empty());
    assert_eq!(store.items().len(), 2);
}

#[test]
fn connections_of_lists_both_directions() {
    let mut store = setup();
    let a = store.add_item();
    let b = store.add_item();
    let c = store.add_item();
    store.start_connect(&a);
    store.finish_connect(&b).unwrap();
    store.start_connect(&c);
    store.finish_connect(&a).unwrap();

    assert_eq!(store.connections_of(&a).count(), 2);
    assert_eq!(store.connections_of(&b).count(), 1);
    assert_eq!(
        store.neighbors(&a).collect::<Vec<_>>(),
        vec![b.as_str(), c.as_str()]
    );
    assert_eq!(store.neighbors(&b).collect::<Vec<_>>(), vec![a.as_str()]);
    assert_eq!(store.neighbors("missing").count(), 0);
}

#[test]
fn link_then_delete_source_leaves_only_target() {
    let mut store = setup();
    let item1 = store.add_item();
    let item2 = store.add_item();
    assert!(store.item(&item2).unwrap().z_index > store.item(&item1).unwrap().z_index);

    store.start_connect(&item1);
    store.finish_connect(&item2).unwrap();
    assert_eq!(store.connections()[0].from_id, item1);
    assert_eq!(store.connections()[0].to_id, item2);

    store.delete_item(&item1);

    assert!(store.connections().is_empty());
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].id, item2);
}
