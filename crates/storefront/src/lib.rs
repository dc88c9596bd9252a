//! Marigold Storefront library.
//!
//! The storefront engine for a single-seller shop: a read-only product
//! catalog, a shopping cart, seller-editable marketing content (hero
//! slideshow and stories carousel), and checkout as a WhatsApp enquiry
//! hand-off.
//!
//! # Architecture
//!
//! All state is local. Shipped JSON fixtures provide the defaults; a
//! file-backed key-value store ([`store`]) holds per-seller overrides (cart
//! contents, edited hero/stories content, the user identity record), each
//! under its own key with no cross-key coupling. There is no server, no
//! database, no network I/O.
//!
//! A session starts by building an [`state::AppState`] from configuration;
//! everything else (cart, sections, views) borrows its pieces from there.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod rotation;
pub mod sections;
pub mod state;
pub mod store;
pub mod views;
pub mod whatsapp;
