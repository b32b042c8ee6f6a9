use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_document(_url: &str) -> Result<FetchedDocument, DocumentFetchError> {
    Err(DocumentFetchError::Network(unsupported()))
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn viewport() -> Option<Viewport> {
    None
}

pub fn set_body_text_selection(_enabled: bool) -> Result<(), String> {
    Ok(())
}

pub fn set_document_title(_title: &str) -> Result<(), String> {
    Ok(())
}
