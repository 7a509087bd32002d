pub mod github;
pub mod linear;
pub mod registry;
pub mod trello;

pub use github::GithubIssuesProvider;
pub use linear::LinearProvider;
pub use registry::ProviderRegistry;
pub use trello::TrelloProvider;

use crate::domain::ticket::TicketInfo;
use crate::error::AppResult;

/// A ticket source that can recognize its own URLs and pull structured
/// fields out of them. Implementations are stateless beyond a compiled
/// regex, so a registry can hold them for the lifetime of the process.
pub trait TicketProvider: Send + Sync {
    /// Regex test only; never fails. `true` here guarantees that
    /// [`extract_ticket_info`](Self::extract_ticket_info) succeeds.
    fn is_ticket_url(&self, url: &str) -> bool;

    /// Parses the URL into a [`TicketInfo`]. `title_text`, when given by a
    /// DOM-scraping collaborator, overrides any title derived from the URL.
    fn extract_ticket_info(&self, url: &str, title_text: Option<&str>) -> AppResult<TicketInfo>;

    /// CSS selector a collaborator can use to scrape the ticket title from
    /// the provider's page, when the URL itself carries none.
    fn title_selector(&self) -> Option<&'static str> {
        None
    }

    /// URL match patterns this provider claims, for permission scoping.
    fn match_patterns(&self) -> &'static [&'static str];
}

/// Registers the built-in providers in the canonical order. Registration
/// order is the tie-break when patterns overlap, so keep it stable.
pub fn register_default_providers(registry: &mut ProviderRegistry) {
    registry.register_provider(Box::new(TrelloProvider::new()));
    registry.register_provider(Box::new(GithubIssuesProvider::new()));
    registry.register_provider(Box::new(LinearProvider::new()));
}
