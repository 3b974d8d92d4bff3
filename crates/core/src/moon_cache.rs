// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast_domain::MoonRecord;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use time::Date;

/// Moon records keyed by date.
///
/// Records never expire; a date's phase does not change once known.
#[derive(Debug, Clone, Default)]
pub struct MoonCache {
    records: HashMap<Date, MoonRecord>,
}

impl MoonCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record, replacing any previous record for the same date.
    pub fn insert(&mut self, record: MoonRecord) {
        self.records.insert(record.date, record.normalized());
    }

    /// Stores many records; returns how many were supplied.
    pub fn extend(&mut self, records: impl IntoIterator<Item = MoonRecord>) -> usize {
        let mut count: usize = 0;
        for record in records {
            self.insert(record);
            count += 1;
        }
        count
    }

    #[must_use]
    pub fn get(&self, date: Date) -> Option<&MoonRecord> {
        self.records.get(&date)
    }

    /// Returns the cached record for `date`, fetching and caching it on a miss.
    ///
    /// # Errors
    ///
    /// Returns whatever `fetch` returns; nothing is cached on failure.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        date: Date,
        fetch: impl FnOnce(Date) -> Result<MoonRecord, E>,
    ) -> Result<&MoonRecord, E> {
        match self.records.entry(date) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut record: MoonRecord = fetch(date)?.normalized();
                record.date = date;
                Ok(entry.insert(record))
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
