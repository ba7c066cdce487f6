pub mod preguntar_request;
pub mod preguntar_route;
