use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use activitydb_boundary::Activity;
use activitydb_core::{
    repositories::ActivityRepo,
    usecases::{self, NewActivity},
};
use activitydb_db_sqlite::Connections;

/// Read a JSON array of activities and store them in the database.
///
/// Returns the number of imported activities.
pub fn import_activities_from_file(connections: &Connections, path: &Path) -> Result<usize> {
    log::info!("Importing activities from {}", path.display());
    let json = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    let activities: Vec<Activity> = serde_json::from_str(&json)
        .with_context(|| format!("Unable to parse activities from {}", path.display()))?;
    let db = connections.exclusive()?;
    Ok(import_activities(&db, activities))
}

/// Invalid activities are skipped.
pub fn import_activities<R: ActivityRepo>(repo: &R, activities: Vec<Activity>) -> usize {
    let total = activities.len();
    let mut imported = 0;
    for activity in activities {
        let Activity {
            id,
            title,
            date,
            description,
            category,
        } = activity;
        let new_activity = NewActivity {
            id: (!id.trim().is_empty()).then(|| id.clone()),
            title,
            date,
            description,
            category,
        };
        match usecases::create_activity(repo, new_activity) {
            Ok(id) => {
                log::debug!("Imported activity {id}");
                imported += 1;
            }
            Err(err) => {
                log::warn!("Skipping activity '{id}': {err}");
            }
        }
    }
    if imported < total {
        log::warn!("Skipped {} of {total} activities", total - imported);
    }
    imported
}
