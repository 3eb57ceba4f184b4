//! Repository trait for PC build data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::BuildResult;
use crate::models::{CreatePcBuild, PcBuild, PcUsage, UpdatePcBuild};

/// Repository abstraction for PC build persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildRepository: Send + Sync {
    /// One page of builds, optionally narrowed to a usage profile
    async fn list(&self, usage: Option<PcUsage>, page: u64) -> BuildResult<Vec<PcBuild>>;

    /// One build with its components resolved
    async fn get_by_id(&self, id: Uuid) -> BuildResult<Option<PcBuild>>;

    /// Every build for one usage profile
    async fn for_usage(&self, usage: PcUsage) -> BuildResult<Vec<PcBuild>>;

    /// Store a new build; component ids must reference existing products
    async fn create(&self, usage: PcUsage, input: CreatePcBuild) -> BuildResult<PcBuild>;

    /// Partially update a build's usage and component slots
    async fn update(
        &self,
        id: Uuid,
        usage: Option<PcUsage>,
        input: UpdatePcBuild,
    ) -> BuildResult<PcBuild>;

    /// Delete one build, reporting whether it existed
    async fn delete(&self, id: Uuid) -> BuildResult<bool>;
}
