//! Command-line interface for the `compress-bench` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program name, the shared `DISPLAY_LEVEL` atomic and the display macros. |
//! | [`args`]      | clap argument model and conversion into [`args::ParsedArgs`]. |

pub mod constants;
pub mod args;
