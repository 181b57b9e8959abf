//! Embedded Pokédex
//!
//! Name list compiled into the binary at build time.

// Include generated name list from build script
include!(concat!(env!("OUT_DIR"), "/names.rs"));
