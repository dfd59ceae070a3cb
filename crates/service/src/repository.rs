use async_trait::async_trait;
use sea_orm::DbErr;

use crate::errors::ServiceError;

/// Storage contract shared by every entity repository.
///
/// `Record` is the id-less payload written on create and update; `Entity` is
/// what comes back with its store-assigned id.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Send;
    type Record: Send;

    async fn get_by_id(&self, id: i32) -> Result<Option<Self::Entity>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<Self::Entity>, ServiceError>;
    async fn add(&self, record: Self::Record) -> Result<Self::Entity, ServiceError>;
    /// `None` when no row has this id.
    async fn update(&self, id: i32, record: Self::Record) -> Result<Option<Self::Entity>, ServiceError>;
    /// Fails with not-found when no row has this id.
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Result of a single `UPDATE ... WHERE id = ?`; a row that vanished is `None`, not a failure.
pub(crate) fn updated<M, E: From<M>>(res: Result<M, DbErr>) -> Result<Option<E>, ServiceError> {
    match res {
        Ok(model) => Ok(Some(model.into())),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// In-memory table backing the mock repositories used in tests and doc examples
pub mod mock {
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    pub struct MemoryTable<T> {
        rows: Mutex<(i32, BTreeMap<i32, T>)>, // (last assigned id, rows)
    }

    impl<T> Default for MemoryTable<T> {
        fn default() -> Self {
            Self { rows: Mutex::new((0, BTreeMap::new())) }
        }
    }

    impl<T: Clone> MemoryTable<T> {
        fn lock(&self) -> MutexGuard<'_, (i32, BTreeMap<i32, T>)> {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn insert_with(&self, build: impl FnOnce(i32) -> T) -> T {
            let mut guard = self.lock();
            guard.0 += 1;
            let id = guard.0;
            let row = build(id);
            guard.1.insert(id, row.clone());
            row
        }

        pub fn get(&self, id: i32) -> Option<T> {
            self.lock().1.get(&id).cloned()
        }

        pub fn all(&self) -> Vec<T> {
            self.lock().1.values().cloned().collect()
        }

        pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
            self.lock().1.values().filter(|row| pred(row)).cloned().collect()
        }

        pub fn replace_with(&self, id: i32, build: impl FnOnce(i32) -> T) -> Option<T> {
            let mut guard = self.lock();
            let slot = guard.1.get_mut(&id)?;
            *slot = build(id);
            Some(slot.clone())
        }

        pub fn remove(&self, id: i32) -> bool {
            self.lock().1.remove(&id).is_some()
        }

        pub fn contains(&self, id: i32) -> bool {
            self.lock().1.contains_key(&id)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::MemoryTable;

        #[test]
        fn ids_are_never_reused() {
            let table = MemoryTable::<(i32, &str)>::default();
            let a = table.insert_with(|id| (id, "a"));
            assert!(table.remove(a.0));
            let b = table.insert_with(|id| (id, "b"));
            assert_eq!(a.0, 1);
            assert_eq!(b.0, 2);
            assert!(table.replace_with(a.0, |id| (id, "x")).is_none());
            assert_eq!(table.all(), vec![(2, "b")]);
        }
    }
}
