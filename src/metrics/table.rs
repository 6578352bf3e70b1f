//! Most-recently-updated-first table of event aggregates
//!
//! Entries live in an arena and are addressed by stable [`EntryId`] handles.
//! Display order is an explicit doubly-linked list threaded through the
//! arena, with a name index on the side, so promoting an entry to the front
//! is O(1) and never invalidates other handles. Entries are never removed one
//! at a time; [`MetricTable::reset`] drops them all.

use super::aggregate::HostAggregate;
use crate::catalog::{EventCatalog, EventInfo};
use crate::constants::columns::EVENT_NAME;
use crate::constants::table::INITIAL_NAME_COLUMN_WIDTH;
use crate::types::MetricRow;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// Candidate rows of one batch; typical batches carry a few dozen events
type Candidates<'a> = SmallVec<[(&'a str, usize); 64]>;

/// Stable handle to a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

/// One event's row in the table
#[derive(Debug, Clone)]
pub struct TableEntry {
    name: String,
    info: EventInfo,
    aggregate: HostAggregate,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

impl TableEntry {
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog description captured when the entry was created
    #[must_use]
    #[inline]
    pub fn info(&self) -> &EventInfo {
        &self.info
    }

    #[must_use]
    #[inline]
    pub fn aggregate(&self) -> &HostAggregate {
        &self.aggregate
    }

    #[inline]
    pub fn aggregate_mut(&mut self) -> &mut HostAggregate {
        &mut self.aggregate
    }

    /// Next entry in display order
    #[must_use]
    #[inline]
    pub fn next(&self) -> Option<EntryId> {
        self.next
    }
}

/// Ordered collection of event aggregates
#[derive(Debug, Clone)]
pub struct MetricTable {
    entries: Vec<TableEntry>,
    index: HashMap<String, EntryId>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    longest_name: usize,
    name_column_width: usize,
}

impl Default for MetricTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
            longest_name: EVENT_NAME.len(),
            name_column_width: INITIAL_NAME_COLUMN_WIDTH,
        }
    }

    /// Apply one batch of metric rows at time `now`
    ///
    /// Rows are dropped when they are per-thread detail, carry a zero value,
    /// or name an event the catalog does not know. Survivors are applied in
    /// descending name order (ties keep row order), each moving its entry to
    /// the front, so the events touched by this batch end up at the front in
    /// ascending name order.
    ///
    /// Returns the number of rows applied.
    pub fn ingest(&mut self, rows: &[MetricRow], catalog: &dyn EventCatalog, now: f64) -> usize {
        let mut candidates: Candidates<'_> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_thread_group())
            .map(|(row_index, row)| (row.name.as_str(), row_index))
            .collect();
        candidates.sort_unstable_by(|a, b| b.0.cmp(a.0).then(a.1.cmp(&b.1)));

        let mut applied = 0;
        for (name, row_index) in candidates {
            let row = &rows[row_index];

            if row.value == 0 {
                continue;
            }

            let existing = self.index.get(name).copied();
            let id = match existing {
                Some(id) => {
                    self.move_to_front(id);
                    id
                }
                None => {
                    let Some(info) = catalog.describe(name) else {
                        debug!("Dropping row for unknown event '{}'", name);
                        continue;
                    };
                    self.push_front(name, info.clone())
                }
            };

            self.entries[id.0]
                .aggregate
                .ingest(&row.host_name, row.kind, row.value, now);
            self.longest_name = self.longest_name.max(name.len());
            applied += 1;
        }

        self.name_column_width = self.longest_name + 1;
        applied
    }

    /// Drop every entry
    ///
    /// The name column keeps the width of the longest name ever seen.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    /// Entries in display order, front first
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            table: self,
            cursor: self.head,
        }
    }

    /// Entries with at least one fresh host, in display order
    pub fn visible_entries(&self, now: f64) -> impl Iterator<Item = &TableEntry> {
        self.entries().filter(move |e| e.aggregate.is_fresh(now))
    }

    #[must_use]
    pub fn fresh_count(&self, now: f64) -> usize {
        self.visible_entries(now).count()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.index.get(name).map(|id| &self.entries[id.0])
    }

    /// First entry in display order
    #[must_use]
    #[inline]
    pub fn front(&self) -> Option<EntryId> {
        self.head
    }

    /// Mutable access by handle
    ///
    /// # Panics
    /// Panics if the handle predates the last [`reset`](Self::reset).
    pub fn entry_mut(&mut self, id: EntryId) -> &mut TableEntry {
        &mut self.entries[id.0]
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Width of the event name column, including one space of padding
    #[must_use]
    #[inline]
    pub fn name_column_width(&self) -> usize {
        self.name_column_width
    }

    fn push_front(&mut self, name: &str, info: EventInfo) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(TableEntry {
            name: name.to_owned(),
            info,
            aggregate: HostAggregate::new(),
            prev: None,
            next: self.head,
        });
        self.link_head(id);
        self.index.insert(name.to_owned(), id);
        debug!("New table entry '{}'", name);
        id
    }

    fn move_to_front(&mut self, id: EntryId) {
        if self.head == Some(id) {
            return;
        }
        self.unlink(id);
        self.entries[id.0].prev = None;
        self.entries[id.0].next = self.head;
        self.link_head(id);
    }

    /// Make `id` (already pointing at the old head) the new head
    fn link_head(&mut self, id: EntryId) {
        match self.head {
            Some(old_head) => self.entries[old_head.0].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn unlink(&mut self, id: EntryId) {
        let (prev, next) = {
            let entry = &self.entries[id.0];
            (entry.prev, entry.next)
        };

        match prev {
            Some(p) => self.entries[p.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n.0].prev = prev,
            None => self.tail = prev,
        }
    }
}

/// Iterator over entries in display order
pub struct Entries<'a> {
    table: &'a MetricTable,
    cursor: Option<EntryId>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a TableEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = &self.table.entries[id.0];
        self.cursor = entry.next;
        Some(entry)
    }
}
