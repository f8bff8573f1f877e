//! HTTP API for the trend store
//!
//! This module provides the read-only REST surface consumed by web
//! clients rendering leaderboard trends.

pub mod http;
pub mod rest;
