// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::TranslatorSettings;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// 翻译错误
///
/// 只在适配器内部使用，对外总是降级为空字符串
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Translation API returned error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Invalid response format from translation API")]
    InvalidResponse,
}

/// 翻译器特质
#[async_trait]
pub trait Translator: Send + Sync {
    /// 将乌克兰语文本翻译为目标语言
    ///
    /// 从不失败：空输入或调用失败都返回空字符串
    async fn translate(&self, text: &str, target_language: &str) -> String;
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize, Debug)]
struct ChatMessage {
    content: Option<String>,
}

/// LLM翻译服务
///
/// 通过 OpenAI 兼容的 chat completions 接口翻译文本
///
/// # 配置
///
/// - `translator.api_key` / `OPENAI_API_KEY` - API密钥
/// - `translator.model` - 模型名称（默认为 gpt-4o）
/// - `translator.api_base_url` - API基础URL
pub struct LlmTranslator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base_url: String,
    max_tokens: u32,
    temperature: f32,
}

impl LlmTranslator {
    pub fn new(api_key: String, settings: &TranslatorSettings) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    /// 调用翻译接口
    ///
    /// # 错误
    /// * 网络错误、非 2xx 状态码或响应中缺少译文
    pub async fn request_translation(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": format!(
                        "You are a helpful assistant that translates Ukrainian to {lang}. \
                        Provide only the translation without any additional text or explanation. \
                        If there is no direct translation or the term is the same in {lang}, return the original text.",
                        lang = target_language
                    )
                },
                {
                    "role": "user",
                    "content": format!(
                        "Translate the following Ukrainian text to {}:\n\n{}",
                        target_language, text
                    )
                }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Api { status, body });
        }

        let body: ChatCompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(TranslationError::InvalidResponse)
    }
}

#[async_trait]
impl Translator for LlmTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        match self.request_translation(text, target_language).await {
            Ok(translation) => translation,
            Err(e) => {
                tracing::warn!("Translation error: {}", e);
                String::new()
            }
        }
    }
}
