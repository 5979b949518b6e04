use std::time::Duration;

use reqwest::{
    Client,
    Response,
};

use crate::core::FlashdeckError;

pub fn http_client() -> Result<Client, FlashdeckError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| FlashdeckError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn ensure_success(response: &Response) -> Result<(), FlashdeckError> {
    if !response.status().is_success() {
        return Err(FlashdeckError::HttpStatus {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(())
}
