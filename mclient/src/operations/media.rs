use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest, FilePart};
use serde_json::{Value, json};

use crate::{ImageMemory, MemoryClient};

impl MemoryClient {
    pub async fn store_image(
        &self,
        user_id: &str,
        image: ImageMemory,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("store_image", "memories/image").with_json(json!({
            "user_id": user_id,
            "image_url": image.image_url,
            "image_base64": image.image_base64,
            "description": image.description,
            "metadata": image.metadata.unwrap_or_default(),
        })))
        .await
    }

    /// The user id travels as a query parameter; the bytes as multipart field `file`.
    pub async fn upload_image(
        &self,
        user_id: &str,
        image_data: Vec<u8>,
        filename: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("upload_image", "memories/image/upload")
                .with_query("user_id", user_id)
                .with_file(FilePart::new(filename, image_data)),
        )
        .await
    }

    pub async fn search_images(
        &self,
        user_id: &str,
        query: &str,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::post("search_images", "memories/image/search").with_json(json!({
                "user_id": user_id,
                "query": query,
                "limit": limit,
            })),
        )
        .await
    }
}
