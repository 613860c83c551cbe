use deck_build::core::fragment::{
    injection_fragment, BODY_CLOSE, DEFAULT_IMAGE_EXT, DEFAULT_IMAGE_FOLDER, DEFAULT_SCRIPT_URL,
};
use deck_build::{BuildEngine, BuildError, CliConfig, DeckPipeline, LocalStorage, TomlConfig};
use tempfile::TempDir;

fn cli_config(working_dir: &str) -> CliConfig {
    CliConfig {
        compose_command: "big-presentation-compose".to_string(),
        compose_args: vec![],
        working_dir: working_dir.to_string(),
        target_file: "index.html".to_string(),
        body_marker: BODY_CLOSE.to_string(),
        script_url: DEFAULT_SCRIPT_URL.to_string(),
        image_folder: DEFAULT_IMAGE_FOLDER.to_string(),
        image_ext: DEFAULT_IMAGE_EXT.to_string(),
        config: None,
        patch_only: false,
        verbose: false,
    }
}

fn default_fragment() -> String {
    injection_fragment(
        BODY_CLOSE,
        DEFAULT_SCRIPT_URL,
        DEFAULT_IMAGE_FOLDER,
        DEFAULT_IMAGE_EXT,
    )
}

#[cfg(unix)]
fn shell_compose(config: &mut CliConfig, script: &str) {
    config.compose_command = "sh".to_string();
    config.compose_args = vec!["-c".to_string(), script.to_string()];
}

#[cfg(unix)]
#[tokio::test]
async fn test_end_to_end_compose_and_patch() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();

    // Stand-in compose tool: writes the HTML file into the working directory,
    // exactly like the real presentation compiler would.
    let mut config = cli_config(&working_dir);
    shell_compose(
        &mut config,
        "printf '<html><body>Hi</body></html>' > index.html",
    );

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let output_path = result.unwrap();
    assert!(output_path.ends_with("index.html"));

    let patched = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert_eq!(
        patched,
        format!("<html><body>Hi{}</html>", default_fragment())
    );
}

#[tokio::test]
async fn test_patch_only_without_marker_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("index.html"), "<html></html>").unwrap();

    let mut config = cli_config(&working_dir);
    config.patch_only = true;

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    engine.run().await.unwrap();

    // File is rewritten, but with the same bytes.
    let content = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert_eq!(content, "<html></html>");
}

#[tokio::test]
async fn test_patch_only_with_multiple_markers() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(
        temp_dir.path().join("index.html"),
        "<body>a</body><body>b</body>",
    )
    .unwrap();

    let mut config = cli_config(&working_dir);
    config.patch_only = true;

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    engine.run().await.unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert_eq!(content.matches(DEFAULT_SCRIPT_URL).count(), 2);
    let fragment = default_fragment();
    assert_eq!(
        content.len(),
        "<body>a</body><body>b</body>".len() + 2 * (fragment.len() - BODY_CLOSE.len())
    );
}

#[tokio::test]
async fn test_missing_target_file_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&working_dir);
    config.patch_only = true;

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    let result = engine.run().await;

    match result {
        Err(BuildError::IoError(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected NotFound IO error, got {:?}", other),
    }
    assert!(!temp_dir.path().join("index.html").exists());
}

#[tokio::test]
async fn test_missing_compose_tool_fails() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&working_dir);
    config.compose_command = "deck-build-no-such-tool".to_string();

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    let result = engine.run().await;

    assert!(matches!(result, Err(BuildError::ComposeError { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn test_running_twice_injects_twice() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&working_dir);
    shell_compose(
        &mut config,
        "printf '<html><body>Hi</body></html>' > index.html",
    );

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);
    engine.run().await.unwrap();

    // Second run without regenerating the file: the fragment still contains
    // the body-close marker, so the patch applies again.
    let mut second_config = cli_config(&working_dir);
    second_config.patch_only = true;

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, second_config);
    let engine = BuildEngine::new(pipeline);
    engine.run().await.unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert_eq!(content.matches(DEFAULT_SCRIPT_URL).count(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_end_to_end_with_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();

    let config_content = format!(
        r#"
[pipeline]
name = "slides"

[compose]
command = "sh"
args = ["-c", "printf '<html><body>Deck</body></html>' > deck.html"]
working_dir = "{}"

[inject]
target = "deck.html"
"#,
        working_dir
    );
    let config_path = temp_dir.path().join("build.toml");
    std::fs::write(&config_path, config_content).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    engine.run().await.unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("deck.html")).unwrap();
    assert_eq!(
        content,
        format!("<html><body>Deck{}</html>", default_fragment())
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_compose_failure_then_missing_file() {
    // The compose tool exits non-zero without producing anything: the pipeline
    // continues and fails at the read stage instead.
    let temp_dir = TempDir::new().unwrap();
    let working_dir = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&working_dir);
    shell_compose(&mut config, "exit 1");

    let storage = LocalStorage::new(working_dir.clone());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    let result = engine.run().await;

    match result {
        Err(BuildError::IoError(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected NotFound IO error, got {:?}", other),
    }
}
