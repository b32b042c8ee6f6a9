use super::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn body() -> Result<web_sys::HtmlElement, String> {
    window()?
        .document()
        .and_then(|document| document.body())
        .ok_or_else(|| "document body unavailable".to_string())
}

pub async fn fetch_document(url: &str) -> Result<FetchedDocument, DocumentFetchError> {
    let window = window().map_err(DocumentFetchError::Network)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| DocumentFetchError::Network(format!("{err:?}")))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| DocumentFetchError::Network("fetch did not yield a Response".to_string()))?;
    if !response.ok() {
        return Err(DocumentFetchError::Status(response.status()));
    }

    let content_type = response.headers().get("content-type").ok().flatten();
    let text = response
        .text()
        .map_err(|err| DocumentFetchError::Decode(format!("{err:?}")))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|err| DocumentFetchError::Decode(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| DocumentFetchError::Decode("response body is not text".to_string()))?;

    Ok(FetchedDocument { content_type, body })
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        .map(|_| ())
        .map_err(|err| format!("window.open failed: {err:?}"))
}

pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as i32, height as i32))
}

pub fn set_body_text_selection(enabled: bool) -> Result<(), String> {
    let style = body()?.style();
    let result = if enabled {
        style.remove_property("user-select").map(|_| ())
    } else {
        style.set_property("user-select", "none")
    };
    result.map_err(|err| format!("body user-select update failed: {err:?}"))
}

pub fn set_document_title(title: &str) -> Result<(), String> {
    window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())?
        .set_title(title);
    Ok(())
}
