pub mod controller;
pub mod dto;
mod mapper;
