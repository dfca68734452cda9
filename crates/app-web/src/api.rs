//! Tone service client: one GET per submission, Basic auth, JSON body.

use app_core::{ToneResponse, ToneScore};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::js_error;

const TONE_API_URL: &str =
    "https://api.us-south.tone-analyzer.watson.cloud.ibm.com/v3/tone?version=2017-09-21";

/// Injected at build time; the key never lives in the source tree.
const TONE_API_KEY: Option<&str> = option_env!("TONE_API_KEY");

pub async fn fetch_tone_scores(text: &str) -> anyhow::Result<Vec<ToneScore>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let key = TONE_API_KEY.ok_or_else(|| {
        anyhow::anyhow!("tone service credentials missing; build with TONE_API_KEY set")
    })?;

    let encoded: String = js_sys::encode_uri_component(text).into();
    let url = format!("{TONE_API_URL}&text={encoded}");
    let auth = window
        .btoa(&format!("apikey:{key}"))
        .map_err(js_error)?;

    let init = web::RequestInit::new();
    init.set_method("GET");
    let request = web::Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Authorization", &format!("Basic {auth}"))
        .map_err(js_error)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch resolved to a non-Response value"))?;
    if !resp.ok() {
        anyhow::bail!("tone service returned status {}", resp.status());
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("tone response body was not text"))?;
    Ok(ToneResponse::parse(&body)?.into_scores())
}
