pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod providers;
pub mod slug;

pub use domain::settings::{Category, GenerationMode, Settings, Templates};
pub use domain::ticket::TicketInfo;
pub use error::{AppError, AppResult};
pub use generate::{GeneratorOptions, branch_name, generate_name, pr_title};
pub use providers::{ProviderRegistry, TicketProvider};
pub use slug::{SlugOptions, slugify};
