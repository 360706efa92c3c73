//! Behavioral tests for the lead form workflow and status line
//!
//! BDD-style tests using given-when-then naming convention.

mod form_behaviors;
