// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planar-embedding pipeline: adjacency matrix -> coordinates -> faces.

pub mod adjacency;
pub mod faces;
pub mod layout;

pub use adjacency::AdjacencyMatrix;
pub use faces::{find_faces, Face};
pub use layout::positions;
