mod auth;
mod cors_test;
mod health_test;
mod resources;
mod weeks;
