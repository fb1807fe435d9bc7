//! Prompt library backed by handlebars templates on disk.
//!
//! Each prompt reads its template from the assets directory at call time,
//! so template edits land without a restart. Optional arguments fall back
//! to the literal string "None"; an empty string counts as absent.

use std::path::PathBuf;

use handlebars::Handlebars;
use rmcp::model::{
    GetPromptResult, JsonObject, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
    PromptMessageRole,
};
use rmcp::ErrorData;
use serde_json::json;
use tracing::debug;

use crate::resources::read_file;

/// Generate a project plan from a task description.
pub const PROJECT_PLANNING_ASSISTANT: &str = "project_planning_assistant";
/// Analyze workload and recommend time optimizations.
pub const PROJECT_TIME_OPTIMIZATION_ANALYZER: &str = "project_time_optimization_analyzer";

const PLANNING_DESCRIPTION: &str =
    "Generate a comprehensive project plan with task breakdown and optimization strategies";
const TIME_OPTIMIZATION_DESCRIPTION: &str =
    "Analyze project workload and provide time optimization recommendations";

/// Renders named prompts from templates under an assets directory.
#[derive(Debug)]
pub struct PromptLibrary {
    assets_dir: PathBuf,
    engine: Handlebars<'static>,
}

impl PromptLibrary {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let mut engine = Handlebars::new();
        // Prompt text is not HTML; substitutions must pass through verbatim
        engine.register_escape_fn(handlebars::no_escape);
        Self {
            assets_dir: assets_dir.into(),
            engine,
        }
    }

    /// The prompts advertised to clients.
    pub fn list(&self) -> Vec<Prompt> {
        vec![
            Prompt::new(
                PROJECT_PLANNING_ASSISTANT,
                Some(PLANNING_DESCRIPTION),
                Some(vec![
                    PromptArgument {
                        name: "task_description".to_string(),
                        description: Some("What the project needs to accomplish".to_string()),
                        required: Some(true),
                    },
                    PromptArgument {
                        name: "project_name".to_string(),
                        description: Some(
                            "Existing project to plan within, if any".to_string(),
                        ),
                        required: Some(false),
                    },
                ]),
            ),
            Prompt::new(
                PROJECT_TIME_OPTIMIZATION_ANALYZER,
                Some(TIME_OPTIMIZATION_DESCRIPTION),
                Some(vec![
                    PromptArgument {
                        name: "project_name".to_string(),
                        description: Some("Analyze the project with this name".to_string()),
                        required: Some(false),
                    },
                    PromptArgument {
                        name: "project_id".to_string(),
                        description: Some("Analyze the project with this ID".to_string()),
                        required: Some(false),
                    },
                ]),
            ),
        ]
    }

    /// Render the named prompt with the given arguments.
    pub async fn get(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, ErrorData> {
        debug!(prompt = %name, "rendering prompt");
        match name {
            PROJECT_PLANNING_ASSISTANT => self.project_planning_assistant(arguments).await,
            PROJECT_TIME_OPTIMIZATION_ANALYZER => {
                self.project_time_optimization_analyzer(arguments).await
            }
            other => Err(ErrorData::invalid_params(
                format!("Unknown prompt: {other}"),
                None,
            )),
        }
    }

    async fn project_planning_assistant(
        &self,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, ErrorData> {
        let task_description = string_argument(arguments, "task_description").ok_or_else(|| {
            ErrorData::invalid_params(
                "No task_description provided for project_planning_assistant",
                None,
            )
        })?;
        let project_name = string_argument(arguments, "project_name");

        let text = self
            .render(
                "prompts/project_planning_assistant.txt",
                &json!({
                    "task_description": task_description,
                    "project_name": project_name.as_deref().unwrap_or("None"),
                }),
            )
            .await?;
        Ok(prompt_result(PLANNING_DESCRIPTION, text))
    }

    async fn project_time_optimization_analyzer(
        &self,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, ErrorData> {
        let project_name = string_argument(arguments, "project_name");
        let project_id = string_argument(arguments, "project_id");

        // Name takes precedence over ID; with neither, analyze everything
        let project_info = match (&project_name, &project_id) {
            (Some(name), _) => format!("project_name: {name}"),
            (None, Some(id)) => format!("project_id: {id}"),
            (None, None) => "all projects".to_string(),
        };

        let text = self
            .render(
                "prompts/project_time_optimization_analyzer.txt",
                &json!({
                    "project_name": project_name.as_deref().unwrap_or("None"),
                    "project_id": project_id.as_deref().unwrap_or("None"),
                    "project_info": project_info,
                }),
            )
            .await?;
        Ok(prompt_result(TIME_OPTIMIZATION_DESCRIPTION, text))
    }

    async fn render(
        &self,
        template_path: &str,
        data: &serde_json::Value,
    ) -> Result<String, ErrorData> {
        let template = read_file(&self.assets_dir, template_path).await;
        self.engine.render_template(&template, data).map_err(|e| {
            ErrorData::internal_error(
                format!("Failed to render template '{template_path}': {e}"),
                None,
            )
        })
    }
}

fn string_argument(arguments: Option<&JsonObject>, key: &str) -> Option<String> {
    arguments
        .and_then(|args| args.get(key))
        .and_then(|value| value.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn prompt_result(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage {
            role: PromptMessageRole::User,
            content: PromptMessageContent::text(text),
        }],
    }
}
