//! Declarative helpers for implementing arithmetic traits over many types at once.

mod meta;
mod ops;
