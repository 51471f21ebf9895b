//! HTTP client for the remote processing gateway.
//!
//! Every tool page talks to the gateway through this one client. The base
//! URL is injected at construction time (the app decides where it comes
//! from), so a page under test can be pointed at a mock endpoint. All
//! failure paths come back as already-normalized display strings; nothing
//! here panics on a bad response body.
//!
//! Synchronous tools expect the converted bytes directly in the response
//! body. The asynchronous PDF-to-images tool instead expects a JSON
//! acknowledgement carrying a task id, which is then polled and finally
//! redeemed against the download route. Retrieving the result conceptually
//! lets the gateway clean up the stored artifact, so a download link is
//! only good once.

use std::rc::Rc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use common::model::error::{
    message_from_binary_body, message_from_json_body, message_from_transport,
    GENERIC_TRANSPORT_ERROR, UNREADABLE_RESPONSE,
};
use common::model::job::{JobStatus, JobStatusResponse, SubmitAccepted};
use common::requests::{
    CropParams, EditImageParams, InsertImageParams, PdfToImagesParams, SplitParams, TargetFormat,
};

#[derive(Clone, PartialEq)]
pub struct Gateway {
    base_url: Rc<str>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base_url: Rc::from(base),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn merge_pdfs(&self, files: &[File]) -> Result<Vec<u8>, String> {
        let form = form_with_files("files", files)?;
        self.post_binary("/pdf/merge-pdfs", form).await
    }

    pub async fn split_pdf(&self, file: &File, params: &SplitParams) -> Result<Vec<u8>, String> {
        let form = form_with_file("file", file)?;
        self.post_binary(&format!("/pdf/split-pdf?{}", params.query()), form)
            .await
    }

    pub async fn add_page_numbers(&self, file: &File) -> Result<Vec<u8>, String> {
        let form = form_with_file("file", file)?;
        self.post_binary("/pdf/add-page-numbers", form).await
    }

    pub async fn insert_image(
        &self,
        pdf: &File,
        image: &File,
        params: &InsertImageParams,
    ) -> Result<Vec<u8>, String> {
        let form = empty_form()?;
        append_file(&form, "pdf_file", pdf)?;
        append_file(&form, "image_file", image)?;
        self.post_binary(&format!("/pdf/insert-image?{}", params.query()), form)
            .await
    }

    pub async fn pdf_to_docx(&self, file: &File) -> Result<Vec<u8>, String> {
        let form = form_with_file("file", file)?;
        self.post_binary("/pdf/pdf-to-docx", form).await
    }

    pub async fn change_format(
        &self,
        file: &File,
        format: TargetFormat,
    ) -> Result<Vec<u8>, String> {
        let form = form_with_file("file", file)?;
        self.post_binary(&format!("/image/change-format?{}", format.query()), form)
            .await
    }

    pub async fn images_to_pdf(&self, files: &[File]) -> Result<Vec<u8>, String> {
        let form = form_with_files("files", files)?;
        self.post_binary("/image/images-to-pdf", form).await
    }

    pub async fn edit_image(
        &self,
        file: &File,
        params: &EditImageParams,
    ) -> Result<Vec<u8>, String> {
        let form = form_with_file("file", file)?;
        self.post_binary(&format!("/image/edit-image?{}", params.query()), form)
            .await
    }

    pub async fn crop_image(&self, file: &File, params: &CropParams) -> Result<Vec<u8>, String> {
        let form = form_with_file("file", file)?;
        self.post_binary(&format!("/image/crop-image?{}", params.query()), form)
            .await
    }

    /// Submits the asynchronous conversion and returns the assigned task id.
    pub async fn submit_pdf_to_images(
        &self,
        file: &File,
        params: &PdfToImagesParams,
    ) -> Result<String, String> {
        let form = form_with_file("file", file)?;
        let accepted: SubmitAccepted = self
            .post_json(&format!("/pdf/convert-pdf-async?{}", params.query()), form)
            .await?;
        Ok(accepted.task_id)
    }

    /// One status request for a submitted job.
    pub async fn job_status(&self, task_id: &str) -> Result<JobStatus, String> {
        let url = format!("{}/pdf/status/{}", self.base_url, task_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| message_from_transport(&err.to_string()))?;
        if !response.ok() {
            return Err(rejection_message_json(&response).await);
        }
        let body: JobStatusResponse = response
            .json()
            .await
            .map_err(|_| UNREADABLE_RESPONSE.to_string())?;
        Ok(body.status)
    }

    /// Download route for a completed job's ZIP bundle.
    pub fn download_url(&self, task_id: &str) -> String {
        format!("{}/pdf/download-images/{}", self.base_url, task_id)
    }

    async fn post_binary(&self, path_and_query: &str, form: FormData) -> Result<Vec<u8>, String> {
        let response = self.post(path_and_query, form).await?;
        if !response.ok() {
            return Err(rejection_message_binary(&response).await);
        }
        response
            .binary()
            .await
            .map_err(|_| UNREADABLE_RESPONSE.to_string())
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        form: FormData,
    ) -> Result<T, String> {
        let response = self.post(path_and_query, form).await?;
        if !response.ok() {
            return Err(rejection_message_json(&response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|_| UNREADABLE_RESPONSE.to_string())
    }

    // The browser sets the multipart boundary itself when the body is a
    // FormData, so no Content-Type header is set here.
    async fn post(&self, path_and_query: &str, form: FormData) -> Result<Response, String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        Request::post(&url)
            .body(form)
            .map_err(|err| message_from_transport(&err.to_string()))?
            .send()
            .await
            .map_err(|err| message_from_transport(&err.to_string()))
    }
}

/// Rejection body of a call that expected bytes: decode, then normalize.
async fn rejection_message_binary(response: &Response) -> String {
    match response.binary().await {
        Ok(bytes) => message_from_binary_body(&String::from_utf8_lossy(&bytes)),
        Err(_) => UNREADABLE_RESPONSE.to_string(),
    }
}

async fn rejection_message_json(response: &Response) -> String {
    match response.text().await {
        Ok(text) => message_from_json_body(&text),
        Err(_) => UNREADABLE_RESPONSE.to_string(),
    }
}

fn empty_form() -> Result<FormData, String> {
    FormData::new().map_err(|_| GENERIC_TRANSPORT_ERROR.to_string())
}

fn append_file(form: &FormData, field: &str, file: &File) -> Result<(), String> {
    form.append_with_blob(field, file)
        .map_err(|_| GENERIC_TRANSPORT_ERROR.to_string())
}

fn form_with_file(field: &str, file: &File) -> Result<FormData, String> {
    let form = empty_form()?;
    append_file(&form, field, file)?;
    Ok(form)
}

/// Builds a form with one repeated field per file, preserving selection
/// order (the gateway merges/combines in the order the parts arrive).
fn form_with_files(field: &str, files: &[File]) -> Result<FormData, String> {
    let form = empty_form()?;
    for file in files {
        append_file(&form, field, file)?;
    }
    Ok(form)
}
