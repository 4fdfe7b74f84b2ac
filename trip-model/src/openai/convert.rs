//! Conversion between trip-model types and `async_openai` types.

use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};

use crate::error::{ModelError, Result};
use crate::llm::{LlmRequest, LlmResponse, Message, Role};

pub(crate) fn message_to_openai(message: &Message) -> Result<ChatCompletionRequestMessage> {
    let content = message.content.as_str();
    let converted = match message.role {
        Role::System => {
            ChatCompletionRequestSystemMessageArgs::default().content(content).build()?.into()
        }
        Role::User => {
            ChatCompletionRequestUserMessageArgs::default().content(content).build()?.into()
        }
        Role::Assistant => {
            ChatCompletionRequestAssistantMessageArgs::default().content(content).build()?.into()
        }
    };
    Ok(converted)
}

pub(crate) fn build_request(model: &str, request: &LlmRequest) -> Result<CreateChatCompletionRequest> {
    let messages =
        request.messages.iter().map(message_to_openai).collect::<Result<Vec<_>>>()?;

    let mut builder = CreateChatCompletionRequestArgs::default();
    builder.model(model).messages(messages);
    if let Some(temperature) = request.temperature {
        builder.temperature(temperature);
    }
    if let Some(max_tokens) = request.max_tokens {
        builder.max_tokens(max_tokens);
    }
    Ok(builder.build()?)
}

pub(crate) fn from_openai_response(response: CreateChatCompletionResponse) -> Result<LlmResponse> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ModelError::EmptyResponse)?;
    Ok(LlmResponse { content, model: response.model })
}
