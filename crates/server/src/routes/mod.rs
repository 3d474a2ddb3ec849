mod detect;
mod summarize;
mod system;

pub use detect::detect_fake_news;
pub use summarize::summarize_article;
pub use system::health;
