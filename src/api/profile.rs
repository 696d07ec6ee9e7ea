//! Consultancy Profile Commands

use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::client::Call;
use super::endpoints;
use crate::error::{ApiError, ApiResult};
use crate::models::{Consultancy, ConsultancyPatch};

pub async fn get_profile() -> ApiResult<Consultancy> {
    Call::get(endpoints::PROFILE).send_json().await
}

pub async fn update_profile(patch: &ConsultancyPatch) -> ApiResult<Consultancy> {
    Call::put(endpoints::PROFILE).json(patch)?.send_json().await
}

/// Replace the logo with `file` (multipart `profile_image`).
pub async fn upload_logo(file: &File) -> ApiResult<Consultancy> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("profile_image", file, &file.name())
        .map_err(js_error)?;
    Call::put(endpoints::PROFILE).form(form).send_json().await
}

/// Delete the account and, with it, the consultancy.
pub async fn delete_account() -> ApiResult<()> {
    Call::delete(endpoints::PROFILE).send_unit().await
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}
