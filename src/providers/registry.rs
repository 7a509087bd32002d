use crate::domain::ticket::TicketInfo;
use crate::error::{AppError, AppResult};
use crate::providers::{TicketProvider, register_default_providers};

/// Ordered collection of ticket providers. Dispatch is a linear scan in
/// registration order; when match patterns overlap, the earliest
/// registered provider wins. Built once at startup and read-only after.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn TicketProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in Trello, GitHub and Linear providers.
    pub fn with_default_providers() -> Self {
        let mut registry = Self::new();
        register_default_providers(&mut registry);
        registry
    }

    pub fn register_provider(&mut self, provider: Box<dyn TicketProvider>) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Box<dyn TicketProvider>] {
        &self.providers
    }

    fn find_provider(&self, url: &str) -> Option<&dyn TicketProvider> {
        self.providers
            .iter()
            .find(|provider| provider.is_ticket_url(url))
            .map(|provider| provider.as_ref())
    }

    pub fn is_ticket_url(&self, url: &str) -> bool {
        self.find_provider(url).is_some()
    }

    pub fn extract_ticket_info(
        &self,
        url: &str,
        title_text: Option<&str>,
    ) -> AppResult<TicketInfo> {
        let provider = self
            .find_provider(url)
            .ok_or_else(|| AppError::NoProviderFound(url.to_string()))?;
        provider.extract_ticket_info(url, title_text)
    }

    pub fn title_selector(&self, url: &str) -> Option<&'static str> {
        self.find_provider(url)?.title_selector()
    }

    /// Aggregate URL match patterns across registered providers.
    pub fn match_patterns(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .flat_map(|provider| provider.match_patterns().iter().copied())
            .collect()
    }
}
