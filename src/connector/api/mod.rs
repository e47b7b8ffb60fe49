pub mod container;
pub mod error;
pub mod models;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use error::ApiError;
pub use models::{QueryRequest, WelcomeResponse};
pub use router::{build_router, serve};
