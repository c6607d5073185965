use std::collections::HashMap;
use std::path::Path;

use chrono::TimeZone;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::bucket::{group_by_day, WorkoutsByDay};
use crate::detail::WorkoutDetail;
use crate::error::LoadError;
use crate::models::{SamplePoint, WorkoutMetadata, WorkoutRecord};

pub const WORKOUT_LIST_FILE: &str = "list_workouts.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const DIAGRAM_FILE: &str = "diagram_data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutListDocument {
    #[serde(default)]
    pub description: String,
    pub data: Vec<WorkoutRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub description: String,
    pub workouts: HashMap<String, WorkoutMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutDiagram {
    #[serde(default)]
    pub description: String,
    pub data: Vec<SamplePoint>,
    #[serde(default)]
    pub states: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramDocument {
    #[serde(default)]
    pub description: String,
    pub workouts: HashMap<String, WorkoutDiagram>,
}

/// Decode one document; errors carry the JSON path of the offending field.
pub fn decode_document<T: DeserializeOwned>(
    document: &'static str,
    raw: &str,
) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(de).map_err(|e| LoadError::decode(document, e))
}

fn read_required(path: &Path) -> Result<String, LoadError> {
    log::info!("reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// bad optional docs mean "no data", the calendar still loads
fn decode_optional<T: DeserializeOwned>(document: &'static str, raw: Option<&str>) -> Option<T> {
    match decode_document(document, raw?) {
        Ok(doc) => Some(doc),
        Err(err) => {
            log::warn!("ignoring {document}: {err}");
            None
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, LoadError> {
    if !path.exists() {
        log::warn!("{} not found, continuing without it", path.display());
        return Ok(None);
    }
    read_required(path).map(Some)
}

/// Everything loaded for one session. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct WorkoutSnapshot {
    workouts: Vec<WorkoutRecord>,
    metadata: HashMap<String, WorkoutMetadata>,
    diagrams: HashMap<String, WorkoutDiagram>,
}

impl WorkoutSnapshot {
    pub fn new(
        workouts: Vec<WorkoutRecord>,
        metadata: HashMap<String, WorkoutMetadata>,
        diagrams: HashMap<String, WorkoutDiagram>,
    ) -> Self {
        Self {
            workouts,
            metadata,
            diagrams,
        }
    }

    /// Build from raw document text. Only the workout list must decode;
    /// absent or malformed metadata and diagram documents are logged and
    /// mean "no data available" for every workout.
    pub fn from_json_strs(
        workout_list: &str,
        metadata: Option<&str>,
        diagrams: Option<&str>,
    ) -> Result<Self, LoadError> {
        let list: WorkoutListDocument = decode_document(WORKOUT_LIST_FILE, workout_list)?;
        let metadata = decode_optional::<MetadataDocument>(METADATA_FILE, metadata)
            .map(|doc| doc.workouts)
            .unwrap_or_default();
        let diagrams = decode_optional::<DiagramDocument>(DIAGRAM_FILE, diagrams)
            .map(|doc| doc.workouts)
            .unwrap_or_default();
        log::info!(
            "loaded {} workouts, {} metadata entries, {} diagrams",
            list.data.len(),
            metadata.len(),
            diagrams.len()
        );
        Ok(Self::new(list.data, metadata, diagrams))
    }

    /// Load `list_workouts.json`, `metadata.json` and `diagram_data.json`
    /// from `dir`. Only the workout list is required.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let list = read_required(&dir.join(WORKOUT_LIST_FILE))?;
        let metadata = read_optional(&dir.join(METADATA_FILE))?;
        let diagrams = read_optional(&dir.join(DIAGRAM_FILE))?;
        Self::from_json_strs(&list, metadata.as_deref(), diagrams.as_deref())
    }

    pub fn workouts(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    /// Lookup by id; also finds workouts whose timestamp did not parse.
    pub fn workout(&self, id: &str) -> Option<&WorkoutRecord> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn metadata_for(&self, id: &str) -> Option<&WorkoutMetadata> {
        self.metadata.get(id)
    }

    pub fn samples_for(&self, id: &str) -> &[SamplePoint] {
        self.diagrams.get(id).map(|d| d.data.as_slice()).unwrap_or(&[])
    }

    pub fn states_for(&self, id: &str) -> &[String] {
        self.diagrams.get(id).map(|d| d.states.as_slice()).unwrap_or(&[])
    }

    pub fn group_by_day<Tz: TimeZone>(&self, tz: &Tz) -> WorkoutsByDay {
        group_by_day(&self.workouts, tz)
    }

    /// Detail view for the workout with `id`, `None` if no such workout.
    pub fn detail(&self, id: &str) -> Option<WorkoutDetail> {
        let record = self.workout(id)?;
        Some(WorkoutDetail::derive(
            record,
            self.metadata_for(id),
            self.samples_for(id),
        ))
    }
}
