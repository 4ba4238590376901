pub mod navigator;
pub mod redirects;
pub mod registry;
pub mod route_labels;
pub mod routes;
