use gloo::net::http::Request;
use shared::{Restaurant, RestaurantDraft, RestaurantUiConfig};

/// API client for communicating with the restaurant backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: RestaurantUiConfig::default().api_base_url,
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/restaurants", self.base_url)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/restaurants/{}", self.base_url, id)
    }

    /// Test connection to the backend
    pub async fn test_connection(&self) -> Result<(), String> {
        match Request::get(&self.collection_url()).send().await {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("Connection failed: {}", e)),
        }
    }

    /// Fetch the full restaurant list
    pub async fn get_restaurants(&self) -> Result<Vec<Restaurant>, String> {
        match Request::get(&self.collection_url()).send().await {
            Ok(response) => match response.json::<Vec<Restaurant>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse restaurants: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch restaurants: {}", e)),
        }
    }

    /// Create a restaurant; the backend assigns the id
    pub async fn create_restaurant(&self, draft: RestaurantDraft) -> Result<Restaurant, String> {
        match Request::post(&self.collection_url())
            .json(&draft)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Restaurant>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Replace the restaurant with the given id (full update)
    pub async fn update_restaurant(
        &self,
        id: i64,
        draft: RestaurantDraft,
    ) -> Result<Restaurant, String> {
        let record = draft.into_restaurant(id);

        match Request::put(&self.record_url(id))
            .json(&record)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Restaurant>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete the restaurant with the given id
    pub async fn delete_restaurant(&self, id: i64) -> Result<(), String> {
        match Request::delete(&self.record_url(id)).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
