//! Radius query implementations.

mod nearby;
mod within;
mod within_unsorted;
