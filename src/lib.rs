//! ClipTrans: translate clipboard text as you copy it.
//!
//! The binary wires the dispatch core from `ct-app` to the system clipboard
//! (`ct-platform`), the rule file and translation provider (`ct-infra`), a
//! console presenter and a line-based control channel on stdin.

pub mod bootstrap;
pub mod control;
pub mod presentation;
