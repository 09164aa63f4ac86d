//! File Picker Component
//!
//! `<input type="file">` that reads the chosen files into memory.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::api::Upload;

/// Inline preview source for a picked image.
pub fn data_url(upload: &Upload) -> String {
    let mime = upload.mime.as_deref().unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(&upload.bytes))
}

async fn read_file(file: web_sys::File) -> Result<Upload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("could not read {}", file.name()))?;
    let mime = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(Upload {
        file_name: file.name(),
        mime,
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn FilePicker(
    #[prop(into)] label: String,
    #[prop(optional)] multiple: bool,
    #[prop(into)] on_files: Callback<Vec<Upload>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };
        let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        // Picking the same file again must fire change
        input.set_value("");

        spawn_local(async move {
            let mut uploads = Vec::with_capacity(files.len());
            for file in files {
                match read_file(file).await {
                    Ok(upload) => uploads.push(upload),
                    Err(e) => log::warn!("[UPLOAD] {e}"),
                }
            }
            if !uploads.is_empty() {
                on_files.run(uploads);
            }
        });
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="file" accept="image/*" multiple=multiple on:change=on_change />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let upload = Upload {
            file_name: "a.png".into(),
            mime: Some("image/png".into()),
            bytes: b"hi".to_vec(),
        };
        assert_eq!(data_url(&upload), "data:image/png;base64,aGk=");

        let bare = Upload { mime: None, ..upload };
        assert!(data_url(&bare).starts_with("data:application/octet-stream;base64,"));
    }
}
