//! Prompt and request body for the workspace chat endpoint.

use serde::Serialize;

/// Build the prompt asking for three follow-up tasks.
pub fn build_prompt(task: &str) -> String {
    format!(
        "Need 3 specific and practical follow-up tasks related to this task: '{}'.\n\
         Format your response as a simple list of 3 suggestions which follow-up to the task \
         in 1 phrase (short) like to-do list.\n\
         For example:\n\
         1. First follow-up related to the task\n\
         2. Second follow-up related to the task\n\
         3. Third follow-up related to the task\n",
        task.trim()
    )
}

/// JSON body sent to `/workspace/{slug}/chat` and `/stream-chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub mode: String,
    pub session_id: String,
    pub attachments: Vec<serde_json::Value>,
}

impl ChatRequest {
    /// A chat-mode request asking for suggestions for `task`
    pub fn for_task(task: &str, session_id: &str) -> Self {
        Self {
            message: build_prompt(task),
            mode: "chat".to_string(),
            session_id: session_id.to_string(),
            attachments: Vec::new(),
        }
    }
}
