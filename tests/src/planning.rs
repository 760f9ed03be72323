pub mod fixtures;

mod integration;
