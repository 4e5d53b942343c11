mod agent;
mod content;
mod order;
mod product;

pub use agent::{Agent, AgentInput};
pub use content::{AboutUsContent, LandingPageTranslations, ReferenceWebsite, UserProfile};
pub use order::{compute_total, merge_status_batches, CustomerOrder, CustomerOrderInput};
pub use product::{Product, ProductInput, ProductTranslations, ProductView};
