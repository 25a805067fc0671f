pub mod app_context;
pub mod error;
pub mod logger;
pub mod navigation;

pub use app_context::AppContext;
pub use error::{AppError, Result};
pub use navigation::{LogNavigator, nav_items};

#[cfg(test)]
mod tests;
