pub mod common;

mod facade_operations;
