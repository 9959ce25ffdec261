pub mod estimates;
pub mod geocode;
pub mod route_drafts;
