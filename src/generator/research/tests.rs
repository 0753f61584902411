#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::ProposalError;
    use crate::generator::research::memory::RunContext;
    use crate::generator::research::orchestrator::ProposalOrchestrator;
    use crate::generator::step_forward_agent::TaskPromptBuilder;
    use crate::generator::testing::{ScriptedBackend, scripted_context};
    use crate::generator::types::Stage;
    use crate::llm::tools::ToolKind;

    #[test]
    fn test_build_tasks_fixed_order_and_tools() {
        let tasks = ProposalOrchestrator.build_tasks("Acme");

        let stages: Vec<_> = tasks.iter().map(|t| t.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());

        assert_eq!(tasks[0].agent.role, "Industry Research Specialist");
        assert_eq!(tasks[0].agent.tools, vec![ToolKind::WebSearch]);
        assert_eq!(tasks[1].agent.tools, vec![ToolKind::WebSearch]);
        assert_eq!(
            tasks[2].agent.tools,
            vec![ToolKind::KaggleSearch, ToolKind::HuggingFaceSearch]
        );
        assert!(tasks[3].agent.tools.is_empty());
    }

    #[test]
    fn test_company_embedded_only_in_first_two_instructions() {
        let tasks = ProposalOrchestrator.build_tasks("Initech");

        assert!(tasks[0].instruction.contains("Thoroughly research Initech"));
        assert!(tasks[1].instruction.contains("AI/ML opportunities for Initech"));
        assert!(!tasks[2].instruction.contains("Initech"));
        assert!(!tasks[3].instruction.contains("Initech"));
        assert!(tasks[3].instruction.contains("Executive Summary"));
        assert!(tasks[3].instruction.contains("Next Steps"));
    }

    #[tokio::test]
    async fn test_pipeline_call_order() {
        let backend = ScriptedBackend::new(vec![Ok("R"), Ok("M"), Ok("Res"), Ok("P")]);
        let context = scripted_context(Config::default(), backend.clone());

        ProposalOrchestrator
            .execute_pipeline(&context, "Acme")
            .await
            .unwrap();

        assert_eq!(
            backend.call_order(),
            vec!["research", "market", "resource", "proposal"]
        );
    }

    #[tokio::test]
    async fn test_each_stage_receives_all_prior_outputs() {
        let backend = ScriptedBackend::new(vec![
            Ok("OUTPUT-A"),
            Ok("OUTPUT-B"),
            Ok("OUTPUT-C"),
            Ok("OUTPUT-D"),
        ]);
        let context = scripted_context(Config::default(), backend.clone());

        let result = ProposalOrchestrator
            .execute_pipeline(&context, "Acme")
            .await
            .unwrap();
        assert_eq!(result, "OUTPUT-D");

        let calls = backend.calls();
        assert!(!calls[0].prompt_user.contains("OUTPUT-"));
        assert!(!calls[0].prompt_user.contains("Context from previous stages"));
        assert!(!calls[0].prompt_user.contains("context above"));
        assert!(calls[1].prompt_user.contains("Build on the context above."));
        assert!(calls[1].prompt_user.contains("OUTPUT-A"));
        assert!(calls[2].prompt_user.contains("OUTPUT-A"));
        assert!(calls[2].prompt_user.contains("OUTPUT-B"));
        for output in ["OUTPUT-A", "OUTPUT-B", "OUTPUT-C"] {
            assert!(calls[3].prompt_user.contains(output));
        }
        assert!(!calls[3].prompt_user.contains("OUTPUT-D"));
    }

    #[tokio::test]
    async fn test_stage_failure_aborts_pipeline() {
        let backend = ScriptedBackend::new(vec![Ok("R"), Err("model unavailable"), Ok("Res")]);
        let context = scripted_context(Config::default(), backend.clone());

        let err = ProposalOrchestrator
            .execute_pipeline(&context, "Acme")
            .await
            .unwrap_err();

        assert_eq!(err.failed_stage(), Some(Stage::MarketAnalysis));
        assert!(matches!(err, ProposalError::StageFailed { .. }));
        assert!(err.to_string().contains("model unavailable"));
        assert_eq!(backend.call_order(), vec!["research", "market"]);
    }

    #[tokio::test]
    async fn test_tools_and_persona_are_forwarded() {
        let backend = ScriptedBackend::new(vec![Ok("R"), Ok("M"), Ok("Res"), Ok("P")]);
        let context = scripted_context(Config::default(), backend.clone());

        ProposalOrchestrator
            .execute_pipeline(&context, "Acme")
            .await
            .unwrap();

        let calls = backend.calls();
        assert_eq!(
            calls[2].tools,
            vec![ToolKind::KaggleSearch, ToolKind::HuggingFaceSearch]
        );
        assert!(calls[2].prompt_sys.contains("Technical Resource Specialist"));
        assert!(calls[2].prompt_sys.contains("Kaggle Search"));
        assert!(calls[3].tools.is_empty());
        assert!(calls[3].prompt_sys.contains("AI Solution Architect"));
    }

    #[test]
    fn test_prompt_builder_applies_language_and_context_budget() {
        let mut config = Config::default();
        config.target_language = crate::i18n::TargetLanguage::German;
        config.pipeline.max_context_chars = 80;
        let backend = ScriptedBackend::new(vec![]);
        let context = scripted_context(config, backend);

        let tasks = ProposalOrchestrator.build_tasks("Acme");
        let mut run_context = RunContext::new();
        run_context.record(tasks[0].clone(), "x".repeat(1000));

        let params = TaskPromptBuilder::new(&context).build(&tasks[1], &run_context);

        assert!(params.prompt_sys.contains("auf Deutsch"));
        assert!(params.prompt_user.contains("...(truncated)"));
        let context_start = params.prompt_user.find("## Context from previous stages\n").unwrap()
            + "## Context from previous stages\n".len();
        let context_end = params.prompt_user.find("Build on the context above.").unwrap();
        assert!(params.prompt_user[context_start..context_end].chars().count() <= 80);
        assert!(!params.prompt_user.contains(&"x".repeat(1000)));
        assert_eq!(params.log_tag, "market");
    }
}
