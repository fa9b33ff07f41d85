//! Cliente HTTP de FoodData Central.
//!
//! Implementa el trait `FoodCatalog` de core. La búsqueda es un POST a
//! `/v1/foods/search` y el detalle un GET a `/v1/food/{id}`; los nutrientes
//! del detalle vienen por 100 g y se mapean por nombre a las cuatro
//! magnitudes que maneja el dominio.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use gofit_core::catalog::{CatalogError, FoodCatalog};
use gofit_domain::{FoodDetail, FoodSummary};

use crate::config::FdcConfig;

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
struct SearchFood {
    description: String,
    #[serde(rename = "fdcId")]
    fdc_id: u32,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    description: String,
    #[serde(rename = "foodNutrients", default)]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrient {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: f64,
}

/// Cliente del catálogo configurado por entorno.
#[derive(Clone)]
pub struct FdcClient {
    http: reqwest::Client,
    config: FdcConfig,
}

impl FdcClient {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::new(FdcConfig::from_env())
    }

    pub fn new(config: FdcConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(config.timeout)
                                             .build()
                                             .map_err(|e| CatalogError::Config(e.to_string()))?;
        Ok(FdcClient { http, config })
    }

    fn search_url(&self) -> String {
        format!("{}/v1/foods/search?api_key={}", self.config.base_url, self.config.api_key)
    }

    fn detail_url(&self, fdc_id: u32) -> String {
        format!("{}/v1/food/{}?api_key={}", self.config.base_url, fdc_id, self.config.api_key)
    }
}

fn map_http(e: reqwest::Error) -> CatalogError {
    if e.is_decode() {
        CatalogError::Decode(e.to_string())
    } else {
        CatalogError::Http(e.to_string())
    }
}

fn detail_from_response(fdc_id: u32, resp: DetailResponse) -> FoodDetail {
    let mut detail = FoodDetail { fdc_id,
                                  name: resp.description,
                                  calories: 0.0,
                                  proteins: 0.0,
                                  carbohydrates: 0.0,
                                  lipids: 0.0 };
    for nutrient in resp.food_nutrients {
        match nutrient.name.as_str() {
            "Energy" => detail.calories = nutrient.value,
            "Protein" => detail.proteins = nutrient.value,
            "Carbohydrate, by difference" => detail.carbohydrates = nutrient.value,
            "Total lipid (fat)" => detail.lipids = nutrient.value,
            _ => {}
        }
    }
    detail
}

#[async_trait]
impl FoodCatalog for FdcClient {
    async fn search(&self, query: &str) -> Result<Vec<FoodSummary>, CatalogError> {
        let response = self.http
                           .post(self.search_url())
                           .json(&SearchRequest { query })
                           .send()
                           .await
                           .map_err(map_http)?;
        if !response.status().is_success() {
            return Err(CatalogError::Http(format!("search failed: {}", response.status())));
        }
        let decoded: SearchResponse = response.json().await.map_err(map_http)?;
        Ok(decoded.foods
                  .into_iter()
                  .map(|f| FoodSummary { fdc_id: f.fdc_id, description: f.description })
                  .collect())
    }

    async fn lookup_details(&self, fdc_id: u32) -> Result<FoodDetail, CatalogError> {
        let response = self.http.get(self.detail_url(fdc_id)).send().await.map_err(map_http)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(fdc_id));
        }
        if !response.status().is_success() {
            return Err(CatalogError::Http(format!("detail failed: {}", response.status())));
        }
        let decoded: DetailResponse = response.json().await.map_err(map_http)?;
        Ok(detail_from_response(fdc_id, decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_response_shape() {
        let raw = r#"{"foods": [
            {"description": "Banana, raw", "fdcId": 1102653},
            {"description": "Banana bread", "fdcId": 174922}
        ]}"#;
        let decoded: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.foods.len(), 2);
        assert_eq!(decoded.foods[0].fdc_id, 1102653);
        assert_eq!(decoded.foods[1].description, "Banana bread");
    }

    #[test]
    fn maps_known_nutrients_and_ignores_the_rest() {
        let raw = r#"{"description": "Banana, raw", "foodNutrients": [
            {"name": "Energy", "unitName": "kcal", "value": 89.0},
            {"name": "Protein", "unitName": "g", "value": 1.1},
            {"name": "Carbohydrate, by difference", "unitName": "g", "value": 22.8},
            {"name": "Total lipid (fat)", "unitName": "g", "value": 0.3},
            {"name": "Fiber, total dietary", "unitName": "g", "value": 2.6}
        ]}"#;
        let decoded: DetailResponse = serde_json::from_str(raw).unwrap();
        let detail = detail_from_response(1102653, decoded);
        assert_eq!(detail.name, "Banana, raw");
        assert_eq!(detail.calories, 89.0);
        assert_eq!(detail.proteins, 1.1);
        assert_eq!(detail.carbohydrates, 22.8);
        assert_eq!(detail.lipids, 0.3);
    }

    #[test]
    fn missing_nutrients_default_to_zero() {
        let raw = r#"{"description": "Mystery food"}"#;
        let decoded: DetailResponse = serde_json::from_str(raw).unwrap();
        let detail = detail_from_response(42, decoded);
        assert_eq!(detail.calories, 0.0);
        assert_eq!(detail.fdc_id, 42);
    }
}
