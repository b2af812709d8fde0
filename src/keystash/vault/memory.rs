use super::{Vault, VaultData};
use crate::attributes::{keys, AttrValue, Attributes, ItemClass};
use crate::error::{status, StatusCode};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredRecord {
    id: Uuid,
    class: ItemClass,
    attributes: Attributes,
}

/// In-memory vault.
///
/// Follows keychain rules: every record and query names a class, a record's
/// identity is its class plus the values of the class's search keys, and
/// creation/modification dates are stamped by the vault. Records are kept in insertion order, so a
/// single-match lookup returns the oldest match.
///
/// A `Mutex` serializes callers, so one vault can be shared across threads
/// behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryVault {
    records: Mutex<Vec<StoredRecord>>,
    simulated_status: Mutex<Option<StatusCode>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next vault call return `code` without touching any record.
    pub fn simulate_status(&self, code: StatusCode) {
        *lock(&self.simulated_status) = Some(code);
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all stored records, oldest first.
    pub fn records(&self) -> Vec<Attributes> {
        lock(&self.records)
            .iter()
            .map(|record| record.attributes.clone())
            .collect()
    }

    fn take_simulated_status(&self) -> Option<StatusCode> {
        lock(&self.simulated_status).take()
    }
}

impl Vault for MemoryVault {
    fn add(&self, attributes: &Attributes) -> StatusCode {
        if let Some(code) = self.take_simulated_status() {
            return code;
        }
        let Some(class) = class_of(attributes) else {
            return status::PARAM;
        };
        if attributes.keys().any(|key| keys::is_control_key(key)) {
            return status::PARAM;
        }

        let mut records = lock(&self.records);
        let duplicate = records.iter().any(|record| {
            record.class == class && same_identity(class, &record.attributes, attributes)
        });
        if duplicate {
            return status::DUPLICATE_ITEM;
        }

        let now = AttrValue::Timestamp(Utc::now());
        let mut stored = attributes.clone();
        stored.insert(keys::CREATION_DATE.to_string(), now.clone());
        stored.insert(keys::MODIFICATION_DATE.to_string(), now);

        let id = Uuid::new_v4();
        trace!(%id, %class, "record added");
        records.push(StoredRecord {
            id,
            class,
            attributes: stored,
        });
        status::SUCCESS
    }

    fn delete(&self, query: &Attributes) -> StatusCode {
        if let Some(code) = self.take_simulated_status() {
            return code;
        }
        if class_of(query).is_none() {
            return status::PARAM;
        }

        let mut records = lock(&self.records);
        let before = records.len();
        records.retain(|record| {
            let hit = matches(&record.attributes, query);
            if hit {
                trace!(id = %record.id, "record deleted");
            }
            !hit
        });

        if records.len() == before {
            status::ITEM_NOT_FOUND
        } else {
            status::SUCCESS
        }
    }

    fn update(&self, query: &Attributes, attributes: &Attributes) -> StatusCode {
        if let Some(code) = self.take_simulated_status() {
            return code;
        }
        if class_of(query).is_none() {
            return status::PARAM;
        }
        if attributes
            .keys()
            .any(|key| key == keys::CLASS || keys::is_control_key(key))
        {
            return status::PARAM;
        }

        let mut records = lock(&self.records);
        let targets: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(&record.attributes, query))
            .map(|(index, _)| index)
            .collect();
        if targets.is_empty() {
            return status::ITEM_NOT_FOUND;
        }

        let now = AttrValue::Timestamp(Utc::now());
        let updated: Vec<(usize, Attributes)> = targets
            .iter()
            .map(|&index| {
                let mut merged = records[index].attributes.clone();
                merged.extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
                merged.insert(keys::MODIFICATION_DATE.to_string(), now.clone());
                (index, merged)
            })
            .collect();

        // Nothing is applied if any result would collide with another record.
        for (position, (index, candidate)) in updated.iter().enumerate() {
            let class = records[*index].class;
            let clashes_untouched = records.iter().enumerate().any(|(other, record)| {
                !targets.contains(&other)
                    && record.class == class
                    && same_identity(class, &record.attributes, candidate)
            });
            let clashes_updated = updated[..position].iter().any(|(other, merged)| {
                records[*other].class == class && same_identity(class, merged, candidate)
            });
            if clashes_untouched || clashes_updated {
                return status::DUPLICATE_ITEM;
            }
        }

        for (index, merged) in updated {
            trace!(id = %records[index].id, "record updated");
            records[index].attributes = merged;
        }
        status::SUCCESS
    }

    fn find(&self, query: &Attributes) -> (StatusCode, Option<VaultData>) {
        if let Some(code) = self.take_simulated_status() {
            return (code, None);
        }
        if class_of(query).is_none() {
            return (status::PARAM, None);
        }

        let return_attributes = flag(query, keys::RETURN_ATTRIBUTES);
        let return_data = flag(query, keys::RETURN_DATA);
        let limit_all =
            query.get(keys::MATCH_LIMIT).and_then(AttrValue::as_str) == Some(keys::MATCH_LIMIT_ALL);

        let records = lock(&self.records);
        let found: Vec<&StoredRecord> = records
            .iter()
            .filter(|record| matches(&record.attributes, query))
            .collect();
        let Some(&first) = found.first() else {
            return (status::ITEM_NOT_FOUND, None);
        };
        trace!(matches = found.len(), "records found");

        if !return_attributes && !return_data {
            return (status::SUCCESS, None);
        }

        let project = |record: &StoredRecord| -> Attributes {
            if return_attributes {
                let mut projected = record.attributes.clone();
                if !return_data {
                    projected.remove(keys::DATA);
                }
                projected
            } else {
                record
                    .attributes
                    .get_key_value(keys::DATA)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .into_iter()
                    .collect()
            }
        };

        let data = if limit_all {
            VaultData::Records(found.iter().map(|record| project(*record)).collect())
        } else if return_attributes {
            VaultData::Attributes(project(first))
        } else {
            let secret = first
                .attributes
                .get(keys::DATA)
                .and_then(AttrValue::as_bytes)
                .map(<[u8]>::to_vec)
                .unwrap_or_default();
            VaultData::Data(secret)
        };
        (status::SUCCESS, Some(data))
    }
}

/// Lock, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn class_of(attributes: &Attributes) -> Option<ItemClass> {
    attributes.get(keys::CLASS).and_then(ItemClass::of)
}

fn flag(query: &Attributes, key: &str) -> bool {
    query.get(key).and_then(AttrValue::as_bool).unwrap_or(false)
}

/// Every non-control query entry is present on the record with an equal value.
fn matches(record: &Attributes, query: &Attributes) -> bool {
    query
        .iter()
        .filter(|(key, _)| !keys::is_control_key(key))
        .all(|(key, value)| record.get(key) == Some(value))
}

/// Equal values (absent == absent) for every search key of `class`.
fn same_identity(class: ItemClass, a: &Attributes, b: &Attributes) -> bool {
    class.search_keys().all(|key| a.get(key) == b.get(key))
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::item::{GenericPassword, InternetPassword, SecureItem};

    pub struct VaultFixture {
        pub vault: MemoryVault,
    }

    impl Default for VaultFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl VaultFixture {
        pub fn new() -> Self {
            Self {
                vault: MemoryVault::new(),
            }
        }

        pub fn with_item(self, item: impl AsRef<SecureItem>) -> Self {
            let code = self.vault.add(item.as_ref().attributes());
            assert_eq!(code, status::SUCCESS, "fixture add failed");
            self
        }

        pub fn with_internet_password(self, server: &str, account: &str, secret: &str) -> Self {
            let mut password = InternetPassword::new();
            password.set_server(server);
            password.set_account(account);
            password.set_data(secret);
            self.with_item(password)
        }

        pub fn with_generic_password(self, service: &str, account: &str, secret: &str) -> Self {
            let mut password = GenericPassword::new();
            password.set_service(service);
            password.set_account(account);
            password.set_data(secret);
            self.with_item(password)
        }
    }
}
