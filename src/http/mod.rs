pub mod handler;

pub use handler::create_router;
