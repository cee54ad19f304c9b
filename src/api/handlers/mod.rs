mod system;


pub use system::{HealthResponse, health};
