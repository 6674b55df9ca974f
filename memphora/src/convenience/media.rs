use mclient::ImageMemory;
use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn store_image(&self, image: ImageMemory) -> JsonObject {
        best_effort("store_image", self.client().store_image(self.user(), image)).await
    }

    pub async fn upload_image(&self, image_data: Vec<u8>, filename: &str) -> JsonObject {
        best_effort(
            "upload_image",
            self.client()
                .upload_image(self.user(), image_data, filename),
        )
        .await
    }

    pub async fn search_images(&self, query: &str, limit: u64) -> Vec<Value> {
        best_effort(
            "search_images",
            self.client().search_images(self.user(), query, limit),
        )
        .await
    }
}
