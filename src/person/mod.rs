mod model;
mod request;
mod routes;
mod store;

pub use model::*;
pub use request::*;
pub use routes::init_routes;
pub use store::*;
