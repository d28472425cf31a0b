//! `BoardStore`: board aggregate, mutation operations and write-through
//! persistence.

use super::{BoardError, ConnectState};
use crate::model::background::{Background, BackgroundPatch};
use crate::model::category::{default_categories, Category, CategoryId, CategoryPatch};
use crate::model::connection::{Connection, ConnectionId};
use crate::model::item::{
    Item, ItemId, ItemPatch, MAX_ROTATION_DEGREES, SPAWN_X_MIN, SPAWN_X_SPAN, SPAWN_Y_MIN,
    SPAWN_Y_SPAN,
};
use crate::model::snapshot::{BoardSnapshot, SnapshotError, SnapshotResult};
use crate::slot::{BoardSlot, SlotError, STORAGE_KEY};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Borrowed view of the persisted part of the board, encoded on every save.
#[derive(Serialize)]
struct PersistedBoard<'a> {
    items: &'a [Item],
    connections: &'a [Connection],
    categories: &'a [Category],
    background: &'a Background,
}

/// Single owner of one board's state.
///
/// Callers read through the accessors and mutate only through the
/// operations below, which keep items, connections and the stacking
/// counter consistent and write the board to the slot after each change.
pub struct BoardStore<S: BoardSlot> {
    slot: S,
    rng: StdRng,
    items: Vec<Item>,
    connections: Vec<Connection>,
    categories: Vec<Category>,
    background: Background,
    connect: ConnectState,
    z_counter: i64,
    last_saved: Option<String>,
    last_save_error: Option<SlotError>,
}

impl<S: BoardSlot> BoardStore<S> {
    /// Restores a board from `slot`, or starts a default board.
    pub fn open(slot: S) -> Self {
        Self::open_with_rng(slot, StdRng::from_os_rng())
    }

    /// Like [`BoardStore::open`] with a caller-provided random source, so
    /// spawn positions and tilts are reproducible.
    pub fn open_with_rng(slot: S, rng: StdRng) -> Self {
        let restored = restore_snapshot(&slot);
        let mut store = Self {
            slot,
            rng,
            items: Vec::new(),
            connections: Vec::new(),
            categories: default_categories(),
            background: Background::default(),
            connect: ConnectState::Idle,
            z_counter: 0,
            last_saved: None,
            last_save_error: None,
        };

        if let Some(snapshot) = restored {
            store.z_counter = snapshot.max_z_index();
            store.items = snapshot.items;
            store.connections = snapshot.connections;
            if let Some(categories) = snapshot.categories {
                store.categories = categories;
            }
            if let Some(background) = snapshot.background {
                store.background = background;
            }
        }

        // Restored contents already match the slot; only later changes write.
        store.last_saved = store.encode().ok();
        store
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in display order: lowest `z_index` first, ties in insertion order.
    pub fn items_by_z(&self) -> Vec<&Item> {
        let mut ordered: Vec<&Item> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.z_index);
        ordered
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Connections with `item_id` at either end.
    pub fn connections_of<'a>(
        &'a self,
        item_id: &'a str,
    ) -> impl Iterator<Item = &'a Connection> {
        self.connections
            .iter()
            .filter(move |connection| connection.touches(item_id))
    }

    /// Ids of the cards linked to `item_id`, in connection order.
    pub fn neighbors<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.connections
            .iter()
            .filter_map(move |connection| connection.other_end(item_id))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Category of an item; `None` when uncategorized or the category is gone.
    pub fn item_category(&self, item_id: &str) -> Option<&Category> {
        let category_id = self.item(item_id)?.category.as_deref()?;
        self.category(category_id)
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn connect_state(&self) -> &ConnectState {
        &self.connect
    }

    pub fn connect_mode(&self) -> bool {
        self.connect.is_pending()
    }

    pub fn connect_from(&self) -> Option<&ItemId> {
        self.connect.source()
    }

    /// Highest stacking value handed out so far.
    pub fn z_counter(&self) -> i64 {
        self.z_counter
    }

    /// Error from the most recent failed save, cleared by the next good one.
    pub fn last_save_error(&self) -> Option<&SlotError> {
        self.last_save_error.as_ref()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Adds a blank card at a random spot in the spawn region.
    pub fn add_item(&mut self) -> ItemId {
        let x = SPAWN_X_MIN + self.rng.random::<f64>() * SPAWN_X_SPAN;
        let y = SPAWN_Y_MIN + self.rng.random::<f64>() * SPAWN_Y_SPAN;
        self.add_item_at(x, y)
    }

    /// Adds a blank card at `(x, y)` on top of every other card.
    pub fn add_item_at(&mut self, x: f64, y: f64) -> ItemId {
        let rotation = self.random_rotation();
        let z_index = self.next_z();
        let item = Item::new(x, y, rotation, z_index);
        let id = item.id.clone();
        debug!("event=item_add module=store status=ok z_index={z_index}");
        self.items.push(item);
        self.persist();
        id
    }

    pub fn update_item(&mut self, id: &str, patch: ItemPatch) {
        let Some(item) = self.item_mut(id) else {
            return;
        };
        if item.apply(patch) {
            self.persist();
        }
    }

    /// Moves a card and raises it to the top of the stack.
    pub fn move_item(&mut self, id: &str, x: f64, y: f64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let z_index = self.next_z();
        let item = &mut self.items[index];
        item.x = x;
        item.y = y;
        item.z_index = z_index;
        self.persist();
    }

    /// Raises a card to the top of the stack without moving it.
    pub fn bring_to_front(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let z_index = self.next_z();
        self.items[index].z_index = z_index;
        self.persist();
    }

    /// Removes a card together with every connection touching it.
    pub fn delete_item(&mut self, id: &str) {
        let items_before = self.items.len();
        let connections_before = self.connections.len();
        self.items.retain(|item| item.id != id);
        self.connections.retain(|connection| !connection.touches(id));

        if self.connect_from().is_some_and(|from| from == id) {
            self.connect = ConnectState::Idle;
        }

        if self.items.len() != items_before || self.connections.len() != connections_before {
            debug!(
                "event=item_delete module=store status=ok removed_connections={}",
                connections_before - self.connections.len()
            );
            self.persist();
        }
    }

    /// Picks the source card of a link gesture.
    pub fn start_connect(&mut self, item_id: &str) {
        self.connect = ConnectState::Pending {
            from: item_id.to_string(),
        };
    }

    /// Completes a link gesture on `target_id` and returns to idle.
    ///
    /// Returns the new connection id, or `None` when nothing was created:
    /// no gesture in progress, target equals source, either card is gone,
    /// or the pair is already linked in either direction.
    pub fn finish_connect(&mut self, target_id: &str) -> Option<ConnectionId> {
        let source = self.connect.take_source()?;
        if source == target_id
            || self.item(&source).is_none()
            || self.item(target_id).is_none()
            || self
                .connections
                .iter()
                .any(|connection| connection.joins(&source, target_id))
        {
            debug!("event=connect_finish module=store status=ignored");
            return None;
        }

        let connection = Connection::new(source, target_id);
        let id = connection.id.clone();
        self.connections.push(connection);
        self.persist();
        Some(id)
    }

    pub fn cancel_connect(&mut self) {
        self.connect = ConnectState::Idle;
    }

    pub fn remove_connection(&mut self, id: &str) {
        let before = self.connections.len();
        self.connections.retain(|connection| connection.id != id);
        if self.connections.len() != before {
            self.persist();
        }
    }

    /// Appends a placeholder category and returns its id.
    pub fn add_category(&mut self) -> CategoryId {
        let category = Category::placeholder();
        let id = category.id.clone();
        self.categories.push(category);
        self.persist();
        id
    }

    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) {
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
        else {
            return;
        };
        if category.apply(patch) {
            self.persist();
        }
    }

    /// Removes a category. Items keep their (now dangling) reference.
    pub fn delete_category(&mut self, id: &str) {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        if self.categories.len() != before {
            self.persist();
        }
    }

    pub fn set_background(&mut self, patch: BackgroundPatch) {
        if self.background.apply(patch) {
            self.persist();
        }
    }

    /// Replaces items and connections wholesale; replaces categories and
    /// background only when the snapshot carries them.
    ///
    /// Connection endpoints are not checked against the imported items.
    pub fn import_board(&mut self, snapshot: BoardSnapshot) {
        self.z_counter = snapshot.max_z_index();
        self.items = snapshot.items;
        self.connections = snapshot.connections;
        if let Some(categories) = snapshot.categories {
            self.categories = categories;
        }
        if let Some(background) = snapshot.background {
            self.background = background;
        }
        self.connect = ConnectState::Idle;

        info!(
            "event=board_import module=store status=ok items={} connections={}",
            self.items.len(),
            self.connections.len()
        );
        self.persist();
    }

    /// Parses `json` and imports it. Nothing changes when parsing fails.
    pub fn import_json(&mut self, json: &str) -> Result<(), BoardError> {
        let snapshot = BoardSnapshot::from_json(json)?;
        self.import_board(snapshot);
        Ok(())
    }

    /// Owned copy of the persisted part of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            items: self.items.clone(),
            connections: self.connections.clone(),
            categories: Some(self.categories.clone()),
            background: Some(self.background.clone()),
        }
    }

    /// The board in its serialized blob form.
    pub fn export_json(&self) -> Result<String, BoardError> {
        Ok(self.encode()?)
    }

    fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn next_z(&mut self) -> i64 {
        self.z_counter += 1;
        self.z_counter
    }

    fn random_rotation(&mut self) -> f64 {
        let spread = self.rng.random::<f64>() * 2.0 * MAX_ROTATION_DEGREES - MAX_ROTATION_DEGREES;
        (spread * 10.0).round() / 10.0
    }

    fn encode(&self) -> SnapshotResult<String> {
        let board = PersistedBoard {
            items: &self.items,
            connections: &self.connections,
            categories: &self.categories,
            background: &self.background,
        };
        serde_json::to_string(&board).map_err(SnapshotError::from)
    }

    /// Writes the board to the slot unless it equals the last saved blob.
    fn persist(&mut self) {
        let blob = match self.encode() {
            Ok(blob) => blob,
            Err(err) => {
                warn!("event=board_save module=store status=error error_code=encode_failed error={err}");
                return;
            }
        };
        if self.last_saved.as_deref() == Some(blob.as_str()) {
            return;
        }

        match self.slot.write(STORAGE_KEY, &blob) {
            Ok(()) => {
                debug!(
                    "event=board_save module=store status=ok bytes={}",
                    blob.len()
                );
                self.last_saved = Some(blob);
                self.last_save_error = None;
            }
            Err(err) => {
                warn!(
                    "event=board_save module=store status=error error_code=slot_write_failed bytes={} error={}",
                    blob.len(),
                    err
                );
                self.last_save_error = Some(err);
            }
        }
    }
}

fn restore_snapshot<S: BoardSlot>(slot: &S) -> Option<BoardSnapshot> {
    let blob = match slot.read(STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!("event=board_restore module=store status=empty");
            return None;
        }
        Err(err) => {
            warn!("event=board_restore module=store status=error error_code=slot_read_failed error={err}");
            return None;
        }
    };

    match BoardSnapshot::from_json(&blob) {
        Ok(snapshot) => {
            info!(
                "event=board_restore module=store status=ok items={} connections={}",
                snapshot.items.len(),
                snapshot.connections.len()
            );
            Some(snapshot)
        }
        Err(err) => {
            warn!("event=board_restore module=store status=error error_code=corrupt_blob error={err}");
            None
        }
    }
}
