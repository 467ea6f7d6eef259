use llmwl::generator::{GenerationBackend, GenerationFuture};
use llmwl::{
    BackendKind, GenerationRequest, MaskTemplate, PipelineConfig, PipelineStage, WordlistPipeline,
};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

struct RecordingBackend {
    output: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingBackend {
    fn new(output: &str) -> Arc<Self> {
        Arc::new(Self {
            output: output.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

impl GenerationBackend for RecordingBackend {
    fn generate<'a>(&'a self, prompt: &'a str, _model: &'a str) -> GenerationFuture<'a> {
        Box::pin(async move {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.output.clone())
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}

fn masks(templates: &[&str]) -> Vec<MaskTemplate> {
    templates.iter().map(|t| MaskTemplate::parse(t).unwrap()).collect()
}

#[tokio::test]
async fn test_duplicate_llm_words_collapse() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let backend = RecordingBackend::new("alice\nbob\nalice");

    let pipeline = WordlistPipeline::new(PipelineConfig::default(), backend.clone()).unwrap();
    let report = pipeline
        .run(GenerationRequest::new("test", "llama3", &output))
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "alice\nbob");
    assert_eq!(report.unique_entries, 2);
    assert_eq!(report.llm_words, 3);
    assert_eq!(*backend.prompts.lock().unwrap(), vec!["test".to_string()]);
}

#[tokio::test]
async fn test_base_wordlist_and_masks() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("base.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&base, "dog\n\n  cat  \n").unwrap();

    let pipeline =
        WordlistPipeline::new(PipelineConfig::default(), RecordingBackend::new("cat")).unwrap();
    let request = GenerationRequest::new("pets", "llama3", &output)
        .with_base_wordlist(&base)
        .with_masks(masks(&["{word}123", "{word}!"]));

    let report = pipeline.run(request).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "cat\ncat!\ncat123\ndog\ndog!\ndog123"
    );
    assert_eq!(report.base_words, 2);
    assert_eq!(report.mask_derived_words, 6);
    assert_eq!(report.unique_entries, 6);
    assert!(report.stages.contains(&PipelineStage::Masking));
}

#[tokio::test]
async fn test_missing_base_wordlist_is_ignored() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let pipeline =
        WordlistPipeline::new(PipelineConfig::default(), RecordingBackend::new("zeta\nalpha"))
            .unwrap();
    let request = GenerationRequest::new("test", "llama3", &output)
        .with_base_wordlist(dir.path().join("does-not-exist.txt"));

    let report = pipeline.run(request).await.unwrap();

    assert_eq!(report.base_words, 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "alpha\nzeta");
}

#[tokio::test]
async fn test_personal_data_reaches_backend_every_iteration() {
    let dir = tempdir().unwrap();
    let backend = RecordingBackend::new("x");

    let pipeline = WordlistPipeline::new(PipelineConfig::default(), backend.clone()).unwrap();
    let request = GenerationRequest::new("passwords for", "llama3", dir.path().join("out.txt"))
        .with_personal_data(vec!["alice".to_string(), "1990".to_string()])
        .with_iterations(3);

    let report = pipeline.run(request).await.unwrap();

    let prompts = backend.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 3);
    assert!(prompts
        .iter()
        .all(|p| p == "passwords for\nInclude personal data: alice, 1990."));
    assert_eq!(report.iterations, 3);
}

#[tokio::test]
async fn test_api_backend_pipeline() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"response":"summer\nwinter"}"#)
        .expect(2)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let config =
        PipelineConfig::default().with_api_url(format!("{}/api/generate", server.url()));

    let pipeline = WordlistPipeline::with_backend_kind(config, BackendKind::Api).unwrap();
    let report = pipeline
        .spawn(GenerationRequest::new("seasons", "llama3", &output).with_iterations(2))
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(report.backend, "api");
    assert_eq!(report.llm_words, 4);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "summer\nwinter");
}
