use crate::core::{CatalogEntry, scanner::LoadedCatalog};

/// Entries that are still in use (not vanished or obsolete).
pub fn active_entries(loaded: &LoadedCatalog) -> impl Iterator<Item = &CatalogEntry> {
    loaded.catalog.entries().filter(|e| e.status.is_active())
}
