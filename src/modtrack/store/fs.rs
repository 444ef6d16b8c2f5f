use super::DataStore;
use crate::error::{ModtrackError, Result};
use crate::fields::{
    Deadline, FieldRules, FieldValue, Name, Remark, Resource, Tag, Teacher, TimeSlot, Venue,
};
use crate::model::Module;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the whole tracker in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ModtrackError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self, rules: &FieldRules) -> Result<Vec<Module>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ModtrackError::Io)?;
        let data: JsonTracker =
            serde_json::from_str(&content).map_err(ModtrackError::Serialization)?;
        let modules = data
            .modules
            .into_iter()
            .map(|record| record.into_module(rules))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(path = %self.path.display(), count = modules.len(), "loaded modules");
        Ok(modules)
    }

    fn save(&mut self, modules: &[Module]) -> Result<()> {
        self.ensure_parent()?;
        let data = JsonTracker {
            modules: modules.iter().map(JsonModule::from).collect(),
        };
        let content = serde_json::to_string_pretty(&data).map_err(ModtrackError::Serialization)?;
        fs::write(&self.path, content).map_err(ModtrackError::Io)?;
        tracing::debug!(path = %self.path.display(), count = modules.len(), "saved modules");
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonTracker {
    #[serde(default)]
    modules: Vec<JsonModule>,
}

/// On-disk shape of one module. Every field is optional here so that a
/// missing field is reported by name instead of as a serde error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonModule {
    name: Option<String>,
    resource: Option<String>,
    time_slot: Option<String>,
    venue: Option<String>,
    #[serde(default)]
    tagged: Vec<String>,
    remark: Option<String>,
    deadline: Option<String>,
    teacher: Option<String>,
}

impl JsonModule {
    fn into_module(self, rules: &FieldRules) -> Result<Module> {
        let name: Name = required(rules, self.name)?;
        let resource: Resource = required(rules, self.resource)?;
        let time_slot: TimeSlot = required(rules, self.time_slot)?;
        let venue: Venue = required(rules, self.venue)?;
        let tags = self
            .tagged
            .iter()
            .map(|raw| checked::<Tag>(rules, raw))
            .collect::<Result<Vec<_>>>()?;
        let remark: Remark = optional(rules, self.remark)?;
        let deadline: Deadline = optional(rules, self.deadline)?;
        let teacher: Teacher = optional(rules, self.teacher)?;

        Ok(Module::new(name, resource, time_slot, venue)
            .with_tags(tags)
            .with_remark(remark)
            .with_deadline(deadline)
            .with_teacher(teacher))
    }
}

impl From<&Module> for JsonModule {
    fn from(module: &Module) -> Self {
        Self {
            name: Some(module.name().to_string()),
            resource: Some(module.resource().to_string()),
            time_slot: Some(module.time_slot().to_string()),
            venue: Some(module.venue().to_string()),
            tagged: module.tags().iter().map(|t| t.to_string()).collect(),
            remark: Some(module.remark().to_string()),
            deadline: Some(module.deadline().to_string()),
            teacher: Some(module.teacher().to_string()),
        }
    }
}

fn required<T: FieldValue>(rules: &FieldRules, raw: Option<String>) -> Result<T> {
    let raw = raw.ok_or_else(|| {
        ModtrackError::IllegalValue(format!("Module's {} field is missing!", T::KIND.label()))
    })?;
    checked(rules, &raw)
}

fn optional<T: FieldValue + Default>(rules: &FieldRules, raw: Option<String>) -> Result<T> {
    match raw {
        Some(raw) => checked(rules, &raw),
        None => Ok(T::default()),
    }
}

fn checked<T: FieldValue>(rules: &FieldRules, raw: &str) -> Result<T> {
    rules
        .parse(raw)
        .map_err(|violation| ModtrackError::IllegalValue(violation.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::standard_rules;
    use crate::test_utils::{cs3219, typical_modules};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("modules.json"))
    }

    fn write(dir: &TempDir, json: &str) -> FileStore {
        let store = store_in(dir);
        fs::write(store.path(), json).unwrap();
        store
    }

    fn load_err(json: &str) -> String {
        let dir = TempDir::new().unwrap();
        write(&dir, json)
            .load(standard_rules())
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load(standard_rules()).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("modules.json"));
        let mut modules = typical_modules();
        modules.push(cs3219());

        store.save(&modules).unwrap();
        assert_eq!(store.load(standard_rules()).unwrap(), modules);
    }

    #[test]
    fn test_writes_camel_case_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&[cs3219()]).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\"timeSlot\": \"300123 11:00\""));
        assert!(text.contains("\"tagged\": ["));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let dir = TempDir::new().unwrap();
        let store = write(
            &dir,
            r#"{"modules":[{"name":"CS2040S","resource":"r","timeSlot":"010323 10:00","venue":"LT19"}]}"#,
        );
        let modules = store.load(standard_rules()).unwrap();
        assert_eq!(modules.len(), 1);
        assert!(modules[0].deadline().is_empty());
        assert!(modules[0].tags().is_empty());
    }

    #[test]
    fn test_missing_required_field_is_named() {
        let err = load_err(r#"{"modules":[{"name":"CS2040S","resource":"r","venue":"LT19"}]}"#);
        assert!(err.contains("Module's TimeSlot field is missing!"), "{err}");
    }

    #[test]
    fn test_invalid_value_reports_constraint() {
        let err = load_err(
            r#"{"modules":[{"name":"CS2040S!","resource":"r","timeSlot":"010323 10:00","venue":"LT19"}]}"#,
        );
        assert!(err.contains(standard_rules().message(crate::fields::FieldKind::Name)));

        let err = load_err(
            r#"{"modules":[{"name":"CS2040S","resource":"r","timeSlot":"010323 10:00","venue":"LT19","tagged":["a b"]}]}"#,
        );
        assert!(err.contains(standard_rules().message(crate::fields::FieldKind::Tag)));
    }

    #[test]
    fn test_padded_values_are_trimmed_on_load() {
        let dir = TempDir::new().unwrap();
        let store = write(
            &dir,
            r#"{"modules":[{"name":" CS2040S ","resource":"r","timeSlot":" 010323 10:00 ","venue":"  LT19  ","remark":"  hi  ","tagged":[" Lab "]}]}"#,
        );
        let modules = store.load(standard_rules()).unwrap();
        let typed = Module::new(
            Name::parse("CS2040S").unwrap(),
            Resource::parse("r").unwrap(),
            TimeSlot::parse("010323 10:00").unwrap(),
            Venue::parse("LT19").unwrap(),
        )
        .with_remark(Remark::parse("hi").unwrap())
        .with_tags(vec![Tag::parse("Lab").unwrap()]);
        assert_eq!(modules[0].venue().as_str(), "LT19");
        assert_eq!(modules[0].remark().as_str(), "hi");
        assert_eq!(modules, vec![typed]);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let err = write(&dir, "{not json").load(standard_rules()).unwrap_err();
        assert!(matches!(err, ModtrackError::Serialization(_)));
    }
}
