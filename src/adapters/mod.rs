pub mod crawler;
pub mod mock;
pub mod rest;
