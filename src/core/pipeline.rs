use crate::core::fragment::injection_fragment;
use crate::core::{ConfigProvider, HtmlDocument, PatchOutcome, Pipeline, Storage};
use crate::utils::error::{BuildError, Result};
use std::path::Path;
use tokio::process::Command;

pub struct DeckPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DeckPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DeckPipeline<S, C> {
    async fn compose(&self) -> Result<()> {
        if self.config.patch_only() {
            tracing::info!("Patch-only mode, skipping compose step");
            return Ok(());
        }

        let command = self.config.compose_command();
        tracing::debug!(
            "Running compose tool: {} {:?}",
            command,
            self.config.compose_args()
        );

        // Blocking wait: the patch stages must not start before the tool is done.
        let status = Command::new(command)
            .args(self.config.compose_args())
            .current_dir(self.config.working_dir())
            .status()
            .await
            .map_err(|source| BuildError::ComposeError {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            // Exit status is only logged. If the tool produced no file the
            // read stage fails on its own.
            tracing::warn!(
                "Compose tool '{}' exited with {}, continuing to patch step",
                command,
                status
            );
        }

        Ok(())
    }

    async fn extract(&self) -> Result<HtmlDocument> {
        tracing::debug!("Reading target file: {}", self.config.target_file());
        let bytes = self.storage.read_file(self.config.target_file()).await?;
        let text = String::from_utf8(bytes)?;
        Ok(HtmlDocument { text })
    }

    async fn transform(&self, document: HtmlDocument) -> Result<PatchOutcome> {
        let marker = self.config.body_marker();
        let fragment = injection_fragment(
            marker,
            self.config.script_url(),
            self.config.image_folder(),
            self.config.image_ext(),
        );

        let replacements = document.text.matches(marker).count();
        if replacements == 0 {
            tracing::warn!(
                "No '{}' marker found in {}, writing content back unchanged",
                marker,
                self.config.target_file()
            );
        } else {
            tracing::debug!("Injecting emoji fragment at {} marker(s)", replacements);
        }

        // Global replace: a document with several body-close markers gets the
        // fragment at each one.
        let html = document.text.replace(marker, &fragment);

        Ok(PatchOutcome { html, replacements })
    }

    async fn load(&self, outcome: PatchOutcome) -> Result<String> {
        let target = self.config.target_file();
        tracing::debug!(
            "Writing {} bytes back to {} ({} replacement(s))",
            outcome.html.len(),
            target,
            outcome.replacements
        );
        self.storage.write_file(target, outcome.html.as_bytes()).await?;

        let output_path = Path::new(self.config.working_dir()).join(target);
        Ok(output_path.display().to_string())
    }
}
