pub mod api;
pub mod configuration;
pub mod db;
pub mod entity;
pub mod migration;
pub mod model;
pub mod repository;
pub mod service;
pub mod startup;
pub mod telemetry;
