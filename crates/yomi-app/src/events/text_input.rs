use yomi_core::AnalysisError;

use crate::events::TextRequest;
use crate::insert;
use crate::state::AppState;

pub async fn handle_text_input(state: &AppState, request: TextRequest) -> anyhow::Result<()> {
    let text = input_text(&request)?;
    tracing::debug!("TextInput received: {} chars", text.chars().count());

    let result = state.processor.analyze(&text).await?;
    tracing::info!(
        "Analyzed {} words for '{}'",
        result.analysis.words.len(),
        result.analysis.original
    );

    if request.json {
        println!("{}", serde_json::to_string_pretty(&result.analysis)?);
        return Ok(());
    }

    match &request.document {
        Some(target) => insert::insert_into_file(&target.path, target.line, &result.markdown)?,
        None => print!("{}", result.markdown),
    }

    Ok(())
}

/// The selection if there is one, otherwise the current line of the document
pub fn input_text(request: &TextRequest) -> Result<String, AnalysisError> {
    if let Some(selection) = request.selection.as_deref().filter(|s| !s.trim().is_empty()) {
        return Ok(selection.to_string());
    }

    let Some(target) = &request.document else {
        return Err(AnalysisError::EmptyInput);
    };
    let document = insert::read_document(&target.path)?;
    insert::current_line(&document, target.line)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .ok_or(AnalysisError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DocumentTarget;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use yomi_config::Config;

    const PAGE: &str = r#"<div class="row gloss-row"><ul><li><div class="gloss">
<div class="gloss-rtext"><em>neko</em></div>
<dl class="alternatives"><dt>猫 【ねこ】</dt><dd><ol class="gloss-definitions">
<li><span class="pos-desc">[n]</span> <span class="gloss-desc">cat</span></li>
</ol></dd></dl></div></li></ul></div>"#;

    fn state_for(server: &MockServer) -> AppState {
        let mut config = Config::default();
        config.service.base_url = format!("{}/cl/qr/", server.uri());
        config.dictionary.enabled = false;
        AppState::new(config).unwrap()
    }

    fn temp_document(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("yomi-{name}-{}.md", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn request(selection: Option<&str>, document: Option<DocumentTarget>) -> TextRequest {
        TextRequest {
            selection: selection.map(str::to_string),
            document,
            json: false,
        }
    }

    #[test]
    fn selection_wins() {
        let text = input_text(&request(Some("日本語"), None)).unwrap();
        assert_eq!(text, "日本語");
    }

    #[test]
    fn nothing_to_analyze_is_empty_input() {
        assert!(matches!(
            input_text(&request(None, None)),
            Err(AnalysisError::EmptyInput)
        ));
        assert!(matches!(
            input_text(&request(Some("  "), None)),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn falls_back_to_current_line() {
        let path = std::env::temp_dir().join(format!("yomi-input-{}.md", std::process::id()));
        std::fs::write(&path, "# Notes\n猫が好き\n\n").unwrap();

        let line = |line| {
            input_text(&request(
                None,
                Some(DocumentTarget {
                    path: path.clone(),
                    line,
                }),
            ))
        };
        let second = line(2);
        let blank = line(3);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(second.unwrap(), "猫が好き");
        assert!(matches!(blank, Err(AnalysisError::EmptyInput)));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_document_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let state = state_for(&server);

        let content = "# Notes\n猫\n";
        let path = temp_document("fetch-failure", content);
        let result = handle_text_input(
            &state,
            request(
                None,
                Some(DocumentTarget {
                    path: path.clone(),
                    line: 2,
                }),
            ),
        )
        .await;
        let after = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::FetchFailure(_))
        ));
        assert_eq!(after, content.as_bytes());
    }

    #[tokio::test]
    async fn inserts_analysis_after_current_line() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;
        let state = state_for(&server);

        let path = temp_document("insert", "# Notes\n猫\nend\n");
        handle_text_input(
            &state,
            request(
                None,
                Some(DocumentTarget {
                    path: path.clone(),
                    line: 2,
                }),
            ),
        )
        .await
        .unwrap();
        let after = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            after,
            "# Notes\n猫\n> [!note]- 猫\n> - 猫 【ねこ】\n>   - (n) cat\n\nend\n"
        );
    }
}
