pub mod config;
pub mod core;
mod database;
mod dto;
mod handlers;
mod mappers;
mod middlewares;
mod models;
mod repos;
mod routes;
mod services;
mod utils;

#[cfg(test)]
mod test_utils;
