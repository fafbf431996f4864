//! Internal modules made public for visualization, benchmarking, and testing purposes.
pub mod ring_offset;
