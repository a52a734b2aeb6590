//! Business logic services

pub mod assets;
pub mod assignments;
pub mod categories;
pub mod requests;
pub mod stats;
pub mod zoho;

use crate::{
    config::{CrmConfig, OauthConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub assignments: assignments::AssignmentsService,
    pub requests: requests::RequestsService,
    pub categories: categories::CategoriesService,
    pub stats: stats::StatsService,
    pub zoho: zoho::ZohoService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, oauth_config: OauthConfig, crm_config: CrmConfig) -> Self {
        Self {
            assets: assets::AssetsService::new(repository.clone()),
            assignments: assignments::AssignmentsService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            zoho: zoho::ZohoService::new(oauth_config, crm_config),
        }
    }
}
