use contracts::domain::rule::{ExtractedMetadata, Rule};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::domain::rules::api::{self, RuleUpload};
use crate::domain::rules::validation::{default_rule_name, validate_rule_file_name};
use crate::shared::components::{decode_nfo, NfoViewer};
use crate::shared::http::use_api;

/// Text fields of the upload form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadFields {
    pub name: String,
    pub scene: String,
    pub section: String,
    pub year: String,
}

impl UploadFields {
    /// Fills fields the user left empty from what the server extracted.
    pub fn backfill(&mut self, extracted: &ExtractedMetadata) {
        fn fill(field: &mut String, value: Option<String>) {
            if field.trim().is_empty() {
                if let Some(value) = value {
                    *field = value;
                }
            }
        }
        fill(&mut self.scene, extracted.scene.clone());
        fill(&mut self.section, extracted.section.clone());
        fill(&mut self.year, extracted.year.map(|y| y.to_string()));
    }

    fn into_upload(self, file_name: String, content: Vec<u8>) -> RuleUpload {
        RuleUpload {
            file_name,
            content,
            name: self.name,
            scene: self.scene,
            section: self.section,
            year: self.year,
        }
    }
}

/// A picked file whose bytes have been read.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Tracks the file input. Reads finish asynchronously, so each pick gets a
/// ticket and only the latest pick's read may fill the selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilePick {
    ticket: u64,
    reading: bool,
    selected: Option<SelectedFile>,
}

impl FilePick {
    /// Starts a new pick and drops the previous selection.
    pub fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.reading = true;
        self.selected = None;
        self.ticket
    }

    /// Applies a finished read. Returns false when a newer pick superseded it.
    pub fn finish(&mut self, ticket: u64, read: Option<SelectedFile>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.reading = false;
        self.selected = read;
        true
    }

    /// Clears the selection, e.g. after a rejected file name.
    pub fn reset(&mut self) {
        self.ticket += 1;
        self.reading = false;
        self.selected = None;
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }
}

async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, wasm_bindgen::JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn RuleUploadPanel(on_uploaded: Callback<Rule>) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let fields = RwSignal::new(UploadFields::default());
    let pick = RwSignal::new(FilePick::default());
    let preview = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let name = file.name();
        if let Err(e) = validate_rule_file_name(&name) {
            client.with_value(|c| c.toasts().error(e.to_string(), None));
            error.set(Some(e.to_string()));
            pick.update(FilePick::reset);
            preview.set(String::new());
            input.set_value("");
            return;
        }

        error.set(None);
        fields.update(|f| {
            if f.name.trim().is_empty() {
                f.name = default_rule_name(&name);
            }
        });
        let mut ticket = 0;
        pick.update(|p| ticket = p.begin());
        preview.set(String::new());
        spawn_local(async move {
            let read = match read_file_bytes(&file).await {
                Ok(bytes) => Some(SelectedFile { name, bytes }),
                Err(e) => {
                    log::error!("Failed to read rule file: {:?}", e);
                    None
                }
            };
            let text = read.as_ref().map(|f| decode_nfo(&f.bytes));
            let mut current = false;
            pick.update(|p| current = p.finish(ticket, read));
            if !current {
                return;
            }
            if let Some(text) = text {
                preview.set(text);
            } else {
                error.set(Some("Could not read the selected file".to_string()));
                input.set_value("");
            }
        });
    };

    let upload = move |_| {
        if uploading.get_untracked() {
            return;
        }
        let Some(file) = pick.with_untracked(|p| p.selected().cloned()) else {
            error.set(Some("Choose a .nfo or .txt file first".to_string()));
            return;
        };
        let request = fields.get_untracked().into_upload(file.name, file.bytes);
        uploading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::upload_rule(&client.get_value(), request).await {
                Ok(response) => {
                    if let Some(extracted) = response.metadata_extracted.as_ref() {
                        fields.update(|f| f.backfill(extracted));
                    }
                    on_uploaded.run(response.rule);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            uploading.set(false);
        });
    };

    let text_field = move |id: &'static str, label: &'static str, read: fn(&UploadFields) -> String, write: fn(&mut UploadFields, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    prop:value=move || fields.with(read)
                    on:input=move |ev| fields.update(|f| write(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="card rule-upload">
            <div class="card__header"><h5>"Upload a rule"</h5></div>
            <div class="card__body">
                <div class="form-group">
                    <label for="rule-file">"File (.nfo, .txt)"</label>
                    <input type="file" id="rule-file" accept=".nfo,.txt" on:change=on_file />
                </div>
                {text_field("upload-name", "Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("upload-scene", "Scene", |f| f.scene.clone(), |f, v| f.scene = v)}
                {text_field("upload-section", "Section", |f| f.section.clone(), |f, v| f.section = v)}
                {text_field("upload-year", "Year", |f| f.year.clone(), |f, v| f.year = v)}

                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=upload
                    disabled=Signal::derive(move || {
                        uploading.get() || pick.with(|p| p.selected().is_none())
                    })
                >
                    {move || {
                        if uploading.get() {
                            "Uploading..."
                        } else if pick.with(FilePick::is_reading) {
                            "Reading file..."
                        } else {
                            "Upload"
                        }
                    }}
                </Button>

                <Show when=move || preview.with(|c| !c.is_empty())>
                    <div class="rule-upload__preview">
                        <NfoViewer content=preview line_numbers=true />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_only_empty_fields() {
        let mut fields = UploadFields {
            name: "2024_EBOOK".into(),
            scene: "French".into(),
            ..Default::default()
        };
        fields.backfill(&ExtractedMetadata {
            scene: Some("English".into()),
            section: Some("EBOOK".into()),
            year: Some(2024),
        });
        assert_eq!(fields.scene, "French");
        assert_eq!(fields.section, "EBOOK");
        assert_eq!(fields.year, "2024");
    }

    #[test]
    fn test_into_upload_keeps_fields() {
        let fields = UploadFields {
            name: "n".into(),
            year: "2023".into(),
            ..Default::default()
        };
        let upload = fields.into_upload("n.txt".into(), vec![0xDB, b'x']);
        assert_eq!(upload.file_name, "n.txt");
        assert_eq!(upload.content, vec![0xDB, b'x']);
        assert_eq!(upload.year, "2023");
    }

    fn selected(name: &str) -> Option<SelectedFile> {
        Some(SelectedFile {
            name: name.into(),
            bytes: name.as_bytes().to_vec(),
        })
    }

    #[test]
    fn test_pick_not_ready_until_read_finishes() {
        let mut pick = FilePick::default();
        let ticket = pick.begin();
        assert!(pick.is_reading());
        assert!(pick.selected().is_none());

        assert!(pick.finish(ticket, selected("a.nfo")));
        assert!(!pick.is_reading());
        assert_eq!(pick.selected().map(|f| f.name.as_str()), Some("a.nfo"));
    }

    #[test]
    fn test_stale_read_is_ignored() {
        let mut pick = FilePick::default();
        let first = pick.begin();
        let second = pick.begin();

        assert!(pick.finish(second, selected("b.nfo")));
        assert!(!pick.finish(first, selected("a.nfo")));
        assert_eq!(pick.selected().map(|f| f.name.as_str()), Some("b.nfo"));

        let third = pick.begin();
        pick.reset();
        assert!(!pick.finish(third, selected("c.nfo")));
        assert!(pick.selected().is_none());
    }

    #[test]
    fn test_failed_read_clears_selection() {
        let mut pick = FilePick::default();
        let first = pick.begin();
        pick.finish(first, selected("a.nfo"));

        let second = pick.begin();
        assert!(pick.finish(second, None));
        assert!(pick.selected().is_none());
        assert!(!pick.is_reading());
    }
}
