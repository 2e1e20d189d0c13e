pub mod contact_route;
pub mod related_route;
pub mod suggestions_route;
