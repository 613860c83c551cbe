use crate::domain::model::{HtmlDocument, PatchOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn compose_command(&self) -> &str;
    fn compose_args(&self) -> &[String];
    fn working_dir(&self) -> &str;
    fn target_file(&self) -> &str;
    fn body_marker(&self) -> &str;
    fn script_url(&self) -> &str;
    fn image_folder(&self) -> &str;
    fn image_ext(&self) -> &str;
    fn patch_only(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn compose(&self) -> Result<()>;
    async fn extract(&self) -> Result<HtmlDocument>;
    async fn transform(&self, document: HtmlDocument) -> Result<PatchOutcome>;
    async fn load(&self, outcome: PatchOutcome) -> Result<String>;
}
