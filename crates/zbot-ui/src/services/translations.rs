//! HTTP translation source.

use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::debug;
use zbot_core::SiteConfig;
use zbot_core::error::LoadError;
use zbot_core::i18n::{LocaleCode, TranslationMap, TranslationSource};

/// Fetches `<template with {lang}>` relative to the page.
pub(crate) struct HttpTranslationSource {
    config: SiteConfig,
}

impl HttpTranslationSource {
    pub(crate) fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl TranslationSource for HttpTranslationSource {
    async fn fetch(&self, locale: LocaleCode) -> Result<TranslationMap, LoadError> {
        let path = self.config.resource_path(locale);
        debug!(locale = %locale, path = %path, "fetching translations");
        let response = Request::get(&path)
            .send()
            .await
            .map_err(|err| LoadError::Network {
                locale,
                detail: err.to_string(),
            })?;
        if !response.ok() {
            return Err(LoadError::Status {
                locale,
                status: response.status(),
            });
        }
        let body = response.text().await.map_err(|err| LoadError::Network {
            locale,
            detail: err.to_string(),
        })?;
        TranslationMap::from_json_str(locale, &body)
    }
}
