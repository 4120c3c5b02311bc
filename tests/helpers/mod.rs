// ==========================================
// Shared test doubles
// ==========================================

#![allow(dead_code)]

pub mod mock_store;
