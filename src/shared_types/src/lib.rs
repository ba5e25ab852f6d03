//! Generated shell types are written to `generated/` by the build script.
