//! Monument record sources.
//!
//! Records come from `*.json` files in a local directory (one object or an
//! array of objects per file). When too few records load, the bundled
//! reference set of Prague landmarks is appended.

use crate::record::MonumentRecord;
use monuqa_core::{AppError, AppResult};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Below this many loaded records the reference set is appended.
pub const MIN_LOADED_RECORDS: usize = 3;

/// The five bundled reference monuments.
pub fn reference_monuments() -> Vec<MonumentRecord> {
    let data = json!([
        {
            "name": "Prague Castle",
            "description": "Prague Castle is a castle complex built in the 9th century. It is the largest ancient castle complex in the world according to Guinness Book of Records, covering an area of almost 70,000 square meters. The castle has been a symbol of Czech statehood for more than a thousand years.",
            "construction_year": "880",
            "historical_period": "9th century - present",
            "architecture_style": "Gothic, Renaissance, Baroque",
            "location": "Hradčany, Prague Castle District",
            "type": "Castle Complex",
            "significance": "Official residence of the President of the Czech Republic, seat of Bohemian kings and Holy Roman emperors",
            "notable_figures": ["Prince Bořivoj", "Charles IV", "Rudolf II"],
            "historical_events": ["Founded by Prince Bořivoj around 880", "Became seat of Holy Roman Emperor", "St. Vitus Cathedral construction started in 1344"]
        },
        {
            "name": "Charles Bridge",
            "description": "Charles Bridge is a historic stone gothic bridge that connects the Old Town and Lesser Town. It was built to replace the older Judith Bridge that was badly damaged by a flood in 1342.",
            "construction_year": "1357-1402",
            "historical_period": "14th-15th century",
            "architecture_style": "Gothic",
            "location": "Over Vltava River, connecting Old Town and Lesser Town",
            "type": "Bridge",
            "significance": "One of Prague's most iconic landmarks, adorned with 30 baroque statues",
            "notable_figures": ["Charles IV", "Peter Parler"],
            "historical_events": ["Construction began in 1357", "Completed in early 15th century", "Baroque statues added in 17th-18th centuries"]
        },
        {
            "name": "Old Town Square",
            "description": "Old Town Square is a historic square in the Old Town quarter of Prague. It features Gothic churches, colorful baroque buildings and the famous Astronomical Clock.",
            "construction_year": "12th century",
            "historical_period": "Medieval - present",
            "architecture_style": "Gothic, Renaissance, Baroque",
            "location": "Old Town, Prague",
            "type": "Historic Square",
            "significance": "Historic center of Prague, site of many important historical events",
            "notable_figures": ["Jan Hus"],
            "historical_events": ["Medieval marketplace", "Site of Jan Hus execution in 1415", "1968 demonstrations"]
        },
        {
            "name": "Astronomical Clock",
            "description": "The Prague Astronomical Clock is a medieval astronomical clock attached to the Old Town Hall. It's the third-oldest astronomical clock in the world and the oldest clock still operating.",
            "construction_year": "1410",
            "historical_period": "15th century",
            "architecture_style": "Gothic",
            "location": "Old Town Hall, Old Town Square",
            "type": "Astronomical Clock",
            "significance": "Third-oldest astronomical clock in the world, major tourist attraction",
            "notable_figures": ["Master Hanuš", "Mikuláš of Kadaň"],
            "historical_events": ["Installed in 1410", "Legend of Master Hanuš blinding", "Renovated multiple times"]
        },
        {
            "name": "St. Vitus Cathedral",
            "description": "St. Vitus Cathedral is a Roman Catholic metropolitan cathedral located within Prague Castle complex. It is the seat of the Archbishop of Prague and contains the tombs of many Bohemian kings and Holy Roman Emperors.",
            "construction_year": "1344-1929",
            "historical_period": "14th-20th century",
            "architecture_style": "Gothic",
            "location": "Prague Castle complex",
            "type": "Cathedral",
            "significance": "Most important church in Czech Republic, coronation site of Bohemian kings",
            "notable_figures": ["Charles IV", "Peter Parler", "Matthias of Arras"],
            "historical_events": ["Construction started by Charles IV in 1344", "Completed in 1929", "Coronations of Bohemian kings"]
        }
    ]);

    records_from_value(data)
}

/// Split a parsed file into records: arrays yield one record per item.
fn records_from_value(value: Value) -> Vec<MonumentRecord> {
    match value {
        Value::Array(items) => items.into_iter().map(MonumentRecord::from).collect(),
        other => vec![MonumentRecord::from(other)],
    }
}

/// Parse one JSON file into records.
pub fn load_file(path: &Path) -> AppResult<Vec<MonumentRecord>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| {
        AppError::Knowledge(format!("Failed to parse records in {:?}: {}", path, e))
    })?;
    Ok(records_from_value(value))
}

/// Load every `*.json` file under `dir`, in path order.
///
/// Unreadable or malformed files are logged and skipped.
pub fn load_records(dir: &Path) -> AppResult<Vec<MonumentRecord>> {
    if !dir.is_dir() {
        return Err(AppError::Knowledge(format!(
            "Record directory does not exist: {:?}",
            dir
        )));
    }

    let mut records = Vec::new();
    let entries = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"));

    for entry in entries {
        match load_file(entry.path()) {
            Ok(loaded) => {
                tracing::debug!("Loaded {} records from {:?}", loaded.len(), entry.path());
                records.extend(loaded);
            }
            Err(e) => tracing::warn!("Skipping {:?}: {}", entry.path(), e),
        }
    }

    tracing::info!("Loaded {} records from {:?}", records.len(), dir);
    Ok(records)
}

/// Records from `dir` (if given), topped up with the reference set.
pub fn load_or_reference(dir: Option<&Path>) -> AppResult<Vec<MonumentRecord>> {
    let mut records = match dir {
        Some(dir) => load_records(dir)?,
        None => Vec::new(),
    };

    if records.len() < MIN_LOADED_RECORDS {
        tracing::warn!(
            "Only {} records loaded; adding the reference monument set",
            records.len()
        );
        records.extend(reference_monuments());
    }

    Ok(records)
}
