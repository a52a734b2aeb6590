//! Zoho bridge: OAuth2 token exchange proxy and one-way CRM asset export
//!
//! Stateless gateway to the external provider. Tokens are never stored;
//! the caller supplies the access token for CRM pushes.

use serde_json::{json, Value};

use crate::{
    config::{CrmConfig, OauthConfig},
    error::{AppError, AppResult},
    models::{asset::Asset, enums::AssetStatus},
};

#[derive(Clone)]
pub struct ZohoService {
    client: reqwest::Client,
    oauth: OauthConfig,
    crm: CrmConfig,
}

impl ZohoService {
    pub fn new(oauth: OauthConfig, crm: CrmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            oauth,
            crm,
        }
    }

    /// Build the provider's authorization-code URL
    pub fn authorize_url(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope=ZohoCRM.modules.ALL&access_type=offline",
            self.oauth.authorize_url, self.oauth.client_id, self.oauth.redirect_uri
        )
    }

    /// Exchange an authorization code for tokens; the provider's JSON
    /// response is relayed as-is
    pub async fn exchange_code(&self, code: &str) -> AppResult<Value> {
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("client_id", &self.oauth.client_id),
            ("client_secret", &self.oauth.client_secret),
            ("redirect_uri", &self.oauth.redirect_uri),
            ("code", code),
        ])
        .await
    }

    /// Refresh an access token
    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<Value> {
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("client_id", &self.oauth.client_id),
            ("client_secret", &self.oauth.client_secret),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn token_request(&self, params: &[(&str, &str)]) -> AppResult<Value> {
        let response = self
            .client
            .post(&self.oauth.token_url)
            .form(params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Token endpoint unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Token endpoint returned {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid token response: {}", e)))
    }

    /// Push an asset record to the CRM, keyed by the caller-supplied token
    pub async fn sync_asset(&self, access_token: &str, asset: &Asset) -> AppResult<Value> {
        let record = json!({
            "data": [{
                "Product_Name": asset.name,
                "Product_Code": asset.asset_tag,
                "Product_Category": asset.category,
                "Manufacturer": asset.brand,
                "Description": asset.notes,
                "Product_Active": asset.status != AssetStatus::Retired,
            }]
        });

        let response = self
            .client
            .post(format!("{}/Products", self.crm.base_url))
            .header("Authorization", format!("Zoho-oauthtoken {}", access_token))
            .json(&record)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("CRM unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "CRM returned {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid CRM response: {}", e)))
    }
}
