//! Main module for quill library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod processor;
pub mod rendering;
pub mod scanning;
pub mod token;
