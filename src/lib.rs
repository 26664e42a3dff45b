//! Client-side form controller for a user registration and login REST API.
//!
//! `userform` reads form field values through a small form-page abstraction,
//! performs the lightweight validation a registration page runs on every
//! keystroke (address pattern, password pair, submit-button gating), and
//! issues `PUT` requests with JSON bodies to the backend user service. The
//! CLI binary drives the identical code path headlessly: arguments fill an
//! in-memory form page, the gating checks decide whether the submit button
//! would be clickable, and only then is the request sent.
//!
//! The backend deployment is selected with `--env` (embedded database on port
//! 8082, local or remote Tomcat behind the `/squareit` context) or overridden
//! with `--base-url`. Request outcomes are logged and network failures are
//! swallowed: the controller's value is UX gating, not delivery guarantees.

pub mod api;
pub mod cli;
pub mod form;
