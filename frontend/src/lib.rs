pub mod pages;
pub mod state;
