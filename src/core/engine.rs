use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BuildEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BuildEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the four stages strictly in order. No retry, no branching: a
    /// failing stage terminates the whole pipeline.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting build pipeline");

        tracing::info!("Composing presentation...");
        self.pipeline.compose().await?;

        tracing::info!("Reading generated HTML...");
        let document = self.pipeline.extract().await?;
        tracing::info!("Read {} bytes", document.text.len());

        tracing::info!("Injecting emoji rendering fragment...");
        let outcome = self.pipeline.transform(document).await?;
        tracing::info!("Patched {} marker(s)", outcome.replacements);

        tracing::info!("Writing patched HTML...");
        let output_path = self.pipeline.load(outcome).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
