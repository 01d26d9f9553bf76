//! Colección tipada sobre el almacén de entidades
//!
//! Cada operación lee la colección completa, la modifica en memoria y la
//! vuelve a escribir. No hay transacciones: gana el último escritor.

use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::cache::{EntityStore, StoreExt};
use crate::models::Identified;
use crate::utils::errors::AppResult;

pub struct Collection<T> {
    store: Arc<dyn EntityStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Identified + Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(store: Arc<dyn EntityStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub async fn load(&self) -> AppResult<Vec<T>> {
        self.store.get_or(self.key, Vec::new()).await
    }

    pub async fn save(&self, items: &[T]) -> AppResult<()> {
        self.store.set(self.key, items).await
    }

    pub async fn find(&self, id: &str) -> AppResult<Option<T>> {
        Ok(self.load().await?.into_iter().find(|item| item.id() == id))
    }

    pub async fn insert(&self, item: T) -> AppResult<T> {
        let mut items = self.load().await?;
        items.push(item.clone());
        self.save(&items).await?;
        Ok(item)
    }

    /// Reemplaza el elemento con la misma identidad; `None` si no existe
    pub async fn replace(&self, item: T) -> AppResult<Option<T>> {
        let mut items = self.load().await?;
        match items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => *slot = item.clone(),
            None => return Ok(None),
        }
        self.save(&items).await?;
        Ok(Some(item))
    }

    /// Elimina por identidad; devuelve si existía
    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryStore, DRIVERS_KEY};
    use crate::models::fixtures::driver;
    use crate::models::{Driver, DriverStatus};

    fn collection() -> Collection<Driver> {
        Collection::new(Arc::new(MemoryStore::new()), DRIVERS_KEY)
    }

    #[tokio::test]
    async fn test_empty_collection_loads_as_empty_vec() {
        assert!(collection().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_replace_remove() {
        let drivers = collection();
        drivers.insert(driver("A", 0, DriverStatus::Available)).await.unwrap();
        drivers.insert(driver("B", 0, DriverStatus::Available)).await.unwrap();

        let mut updated = driver("A", 4, DriverStatus::Unavailable);
        updated.name = "Ana".to_string();
        assert!(drivers.replace(updated).await.unwrap().is_some());
        assert!(drivers.replace(driver("Z", 0, DriverStatus::Available)).await.unwrap().is_none());

        let found = drivers.find("A").await.unwrap().unwrap();
        assert_eq!(found.name, "Ana");
        assert_eq!(found.total_trips, 4);

        assert!(drivers.remove("A").await.unwrap());
        assert!(!drivers.remove("A").await.unwrap());
        let ids: Vec<String> = drivers.load().await.unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["B".to_string()]);
    }
}
