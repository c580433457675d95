pub mod builders;
pub mod mock_chain;

pub use builders::build_query;
pub use mock_chain::{DetachedResponseWriter, MockNextHandler, MockResponseWriter};
