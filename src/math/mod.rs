// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Distance primitives.

pub mod l2;

pub use l2::{euclidean_distance, l2_sq, nearest_distance};
