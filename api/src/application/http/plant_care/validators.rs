use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePlantPhotoRequest {
    /// Raw base64, or a `data:<mime>;base64,` URL.
    #[serde(default)]
    #[validate(length(min = 1, message = "Base64 image is required"))]
    pub base64_image: String,
    pub plant_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlantContentRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Plant name is required"))]
    pub plant_name: String,
    pub species: Option<String>,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}

#[derive(Debug, PartialEq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Decodes the uploaded image, honoring a data URL prefix when present.
pub fn decode_image(encoded: &str) -> Result<DecodedImage, ApiError> {
    let (mime_type, payload) = match encoded.trim().strip_prefix("data:") {
        Some(data_url) => {
            let (header, payload) = data_url
                .split_once(',')
                .ok_or_else(|| ApiError::BadRequest("Invalid image data URL".to_string()))?;
            let mime_type = header
                .strip_suffix(";base64")
                .filter(|mime| mime.starts_with("image/"))
                .ok_or_else(|| ApiError::BadRequest("Invalid image data URL".to_string()))?;
            (mime_type.to_string(), payload)
        }
        None => (DEFAULT_IMAGE_MIME_TYPE.to_string(), encoded),
    };

    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let data = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| ApiError::BadRequest(format!("Invalid base64 image: {}", e)))?;

    if data.is_empty() {
        return Err(ApiError::BadRequest("Base64 image is required".to_string()));
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(DecodedImage { mime_type, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_raw_base64_defaults_to_jpeg() {
        let image = decode_image("/9j/4A==").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, vec![0xff, 0xd8, 0xff, 0xe0]);
    }

    #[test]
    fn test_decode_data_url() {
        let image = decode_image("data:image/png;base64,iVBO\nRw==").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(
            decode_image("not base64!"),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            decode_image("data:text/plain;base64,aGVsbG8="),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(decode_image("data:image/png"), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_request_validation_messages() {
        let request: AnalyzePlantPhotoRequest =
            serde_json::from_str(r#"{ "plantName": "Monstera" }"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Base64 image is required"));

        let request: GeneratePlantContentRequest =
            serde_json::from_str(r#"{ "plantName": " Pothos " }"#).unwrap();
        assert_eq!(request.plant_name, "Pothos");
        assert!(request.validate().is_ok());

        let request: GeneratePlantContentRequest =
            serde_json::from_str(r#"{ "plantName": "   " }"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Plant name is required"));
    }
}
