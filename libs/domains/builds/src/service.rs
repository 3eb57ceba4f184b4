//! Business logic for PC builds

use std::sync::Arc;
use uuid::Uuid;

use crate::error::{BuildError, BuildResult};
use crate::models::{BuildQuery, CreatePcBuild, PcBuild, PcUsage, UpdatePcBuild};
use crate::repository::BuildRepository;

/// Parse a usage profile received over the wire
fn parse_usage(raw: &str) -> BuildResult<PcUsage> {
    raw.parse()
        .map_err(|_| BuildError::Validation("Invalid usage type".to_string()))
}

pub struct BuildService<R: BuildRepository> {
    repository: Arc<R>,
}

impl<R: BuildRepository> BuildService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of builds, optionally narrowed to a usage profile.
    ///
    /// Page numbers start at 1; zero and absent both read the first page.
    pub async fn get_builds(&self, query: BuildQuery) -> BuildResult<Vec<PcBuild>> {
        let usage = query.usage.as_deref().map(parse_usage).transpose()?;
        let page = query.page.unwrap_or(1).max(1);

        self.repository.list(usage, page).await
    }

    pub async fn get_build(&self, id: Uuid) -> BuildResult<PcBuild> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BuildError::BuildNotFound(id))
    }

    /// Every build for one usage profile; an empty profile is a 404
    pub async fn get_builds_by_usage(&self, raw: &str) -> BuildResult<Vec<PcBuild>> {
        let usage = parse_usage(raw)?;
        let builds = self.repository.for_usage(usage).await?;

        if builds.is_empty() {
            return Err(BuildError::NoneForUsage(usage));
        }
        Ok(builds)
    }

    pub async fn create_build(&self, input: CreatePcBuild) -> BuildResult<PcBuild> {
        let usage = parse_usage(&input.usage)?;

        self.repository.create(usage, input).await
    }

    pub async fn update_build(&self, id: Uuid, input: UpdatePcBuild) -> BuildResult<PcBuild> {
        let usage = input.usage.as_deref().map(parse_usage).transpose()?;

        self.repository.update(id, usage, input).await
    }

    pub async fn delete_build(&self, id: Uuid) -> BuildResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(BuildError::BuildNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBuildRepository;

    fn create_input(usage: &str) -> CreatePcBuild {
        CreatePcBuild {
            usage: usage.to_string(),
            product_id: None,
            processor_id: None,
            motherboard_id: None,
            ram_id: None,
            graphic_card_id: None,
            primary_storage_id: None,
            secondary_storage_id: None,
            case_id: None,
            cooler_id: None,
            power_supply_id: None,
            operating_system_id: None,
        }
    }

    #[tokio::test]
    async fn listing_rejects_unknown_usage_before_the_repository() {
        let repository = MockBuildRepository::new();
        let service = BuildService::new(repository);

        let result = service
            .get_builds(BuildQuery {
                usage: Some("flying".to_string()),
                page: None,
            })
            .await;

        assert!(matches!(result, Err(BuildError::Validation(_))));
    }

    #[tokio::test]
    async fn listing_defaults_to_the_first_page() {
        let mut repository = MockBuildRepository::new();
        repository
            .expect_list()
            .withf(|usage, page| usage.is_none() && *page == 1)
            .returning(|_, _| Ok(vec![]));
        let service = BuildService::new(repository);

        let result = service.get_builds(BuildQuery::default()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_parses_the_usage_profile() {
        let mut repository = MockBuildRepository::new();
        repository
            .expect_create()
            .withf(|usage, _| *usage == PcUsage::Gaming)
            .returning(|usage, input| Ok(PcBuild::new(usage, input)));
        let service = BuildService::new(repository);

        let build = service.create_build(create_input("gaming")).await.unwrap();

        assert_eq!(build.usage, PcUsage::Gaming);
    }

    #[tokio::test]
    async fn empty_usage_profile_is_not_found() {
        let mut repository = MockBuildRepository::new();
        repository.expect_for_usage().returning(|_| Ok(vec![]));
        let service = BuildService::new(repository);

        let result = service.get_builds_by_usage("student").await;

        assert!(matches!(
            result,
            Err(BuildError::NoneForUsage(PcUsage::Student))
        ));
    }

    #[tokio::test]
    async fn unknown_usage_profile_is_invalid_not_missing() {
        let repository = MockBuildRepository::new();
        let service = BuildService::new(repository);

        let result = service.get_builds_by_usage("flying").await;

        assert!(matches!(result, Err(BuildError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_build_is_not_found() {
        let mut repository = MockBuildRepository::new();
        repository.expect_delete().returning(|_| Ok(false));
        let service = BuildService::new(repository);

        let result = service.delete_build(Uuid::now_v7()).await;

        assert!(matches!(result, Err(BuildError::BuildNotFound(_))));
    }
}
