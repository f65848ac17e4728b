use contracts::domain::release::{Release, UpdateReleaseDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

use crate::domain::releases::api;
use crate::shared::http::ApiClient;

/// Editable fields of a release. Title and author live inside the
/// metadata object; every other metadata key is carried through untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReleaseForm {
    pub release_type: String,
    pub status: String,
    pub file_path: String,
    pub title: String,
    pub author: String,
    metadata: Map<String, Value>,
}

impl ReleaseForm {
    pub fn from_release(release: &Release) -> Self {
        let metadata = release.release_metadata.clone().unwrap_or_default();
        let text = |key: &str| {
            metadata
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            release_type: release.release_type.clone(),
            status: release.status.clone(),
            file_path: release.file_path.clone().unwrap_or_default(),
            title: text("title"),
            author: text("author"),
            metadata,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.release_type.trim().is_empty() {
            return Err("Release type is required".to_string());
        }
        if self.status.trim().is_empty() {
            return Err("Status is required".to_string());
        }
        Ok(())
    }

    pub fn to_update(&self) -> UpdateReleaseDto {
        let mut metadata = self.metadata.clone();
        for (key, value) in [("title", &self.title), ("author", &self.author)] {
            let value = value.trim();
            if value.is_empty() {
                metadata.remove(key);
            } else {
                metadata.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
        let file_path = self.file_path.trim();

        UpdateReleaseDto {
            release_type: Some(self.release_type.clone()),
            status: Some(self.status.clone()),
            file_path: (!file_path.is_empty()).then(|| file_path.to_string()),
            release_metadata: Some(metadata),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ReleaseEditViewModel {
    pub id: i64,
    pub form: RwSignal<Option<ReleaseForm>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    client: StoredValue<ApiClient>,
}

impl ReleaseEditViewModel {
    pub fn new(id: i64, client: ApiClient) -> Self {
        Self {
            id,
            form: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            client: StoredValue::new(client),
        }
    }

    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::get_release(&vm.client.get_value(), vm.id).await {
                Ok(release) => vm.form.set(Some(ReleaseForm::from_release(&release))),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }

    pub fn update(&self, apply: impl FnOnce(&mut ReleaseForm)) {
        self.form.update(|f| {
            if let Some(form) = f.as_mut() {
                apply(form);
            }
        });
    }

    /// Validates and sends the form; `on_saved` runs after a 2xx answer.
    pub fn save_command(&self, on_saved: impl FnOnce() + 'static) {
        if self.saving.get_untracked() {
            return;
        }
        let Some(form) = self.form.get_untracked() else {
            return;
        };
        if let Err(message) = form.validate() {
            self.error.set(Some(message));
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let result = api::update_release(&vm.client.get_value(), vm.id, &form.to_update()).await;
            vm.saving.set(false);
            match result {
                Ok(_) => on_saved(),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn release(metadata: Value) -> Release {
        serde_json::from_value(json!({
            "id": 1,
            "user_id": 1,
            "release_type": "EBOOK",
            "status": "draft",
            "release_metadata": metadata,
            "config": {"zip_size": 50},
            "created_at": "2025-01-01T00:00:00",
        }))
        .unwrap()
    }

    #[test]
    fn test_from_release_reads_metadata() {
        let form = ReleaseForm::from_release(&release(json!({"title": "Test Book", "isbn": "123"})));
        assert_eq!(form.title, "Test Book");
        assert_eq!(form.author, "");
        assert_eq!(form.file_path, "");
        assert_eq!(form.release_type, "EBOOK");
    }

    #[test]
    fn test_to_update_merges_into_metadata() {
        let mut form = ReleaseForm::from_release(&release(json!({"title": "Original", "isbn": "123"})));
        form.title = "  Updated Title ".to_string();
        form.author = "Someone".to_string();
        form.status = "completed".to_string();

        let dto = form.to_update();
        assert_eq!(dto.status.as_deref(), Some("completed"));
        assert_eq!(dto.file_path, None);
        let metadata = dto.release_metadata.unwrap();
        assert_eq!(metadata["title"], "Updated Title");
        assert_eq!(metadata["author"], "Someone");
        assert_eq!(metadata["isbn"], "123");
    }

    #[test]
    fn test_to_update_drops_cleared_fields() {
        let mut form = ReleaseForm::from_release(&release(json!({"title": "T", "author": "A"})));
        form.author = "   ".to_string();
        form.file_path = "/srv/releases/t".to_string();

        let dto = form.to_update();
        assert!(!dto.release_metadata.unwrap().contains_key("author"));
        assert_eq!(dto.file_path.as_deref(), Some("/srv/releases/t"));
    }

    #[test]
    fn test_validate_requires_type_and_status() {
        let mut form = ReleaseForm::from_release(&release(Value::Null));
        assert!(form.validate().is_ok());
        form.status.clear();
        assert_eq!(form.validate(), Err("Status is required".to_string()));
    }
}
