mod client;


pub use client::{GetScrapingClient, API_KEY_HEADER, DEFAULT_API_URL};
