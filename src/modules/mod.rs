pub mod upload;

mod router;
pub use router::get_router;
