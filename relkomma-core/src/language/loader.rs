//! Language table loader
//!
//! Embedded tables are parsed on first use and cached for the lifetime of
//! the process.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::language::tables::LanguageTables;

type Embedded = HashMap<&'static str, std::result::Result<Arc<LanguageTables>, String>>;

/// Embedded language configurations
static EMBEDDED: OnceLock<Embedded> = OnceLock::new();

/// Load language tables by code ("de" or "german")
pub fn get_tables(code: &str) -> Result<Arc<LanguageTables>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        let german = load_embedded_language("de", include_str!("../../configs/german.toml"));
        if let Err(e) = &german {
            log::warn!("Failed to load German tables: {e}");
        }
        map.insert("de", german.clone());
        map.insert("german", german);
        map
    });

    match embedded.get(code) {
        Some(Ok(tables)) => Ok(Arc::clone(tables)),
        Some(Err(e)) => Err(CoreError::Config(e.clone())),
        None => Err(CoreError::Config(format!("Unknown language code: {code}"))),
    }
}

/// Load embedded language from TOML string
fn load_embedded_language(
    code: &str,
    toml_str: &str,
) -> std::result::Result<Arc<LanguageTables>, String> {
    LanguageTables::from_toml_str(toml_str)
        .map(Arc::new)
        .map_err(|e| format!("Failed to parse {code} tables: {e}"))
}
