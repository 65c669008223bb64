//! Folio - static compiler for animated single-page developer portfolios
//!
//! Folio reads a portfolio described in `site.toml`, checks it, and compiles it
//! into a self-contained `index.html` with its stylesheet and runtime script.
//!
//! The interactive behavior of the page (role rotation, navigation tracking,
//! project filtering, contact form validation, loading screen, scroll motion
//! and the particle scene) is modeled here as plain state machines so the
//! compiler can precompute schedules and embed the rules the runtime script
//! follows.

pub mod build;
pub mod check;
pub mod config;
pub mod contact;
pub mod error;
pub mod loading;
pub mod models;
pub mod motion;
pub mod nav;
pub mod projects;
pub mod render;
pub mod rotation;
pub mod scene;
pub mod watcher;

pub use build::{build, compile, BuildResult, OutputFile, Source, WriteOptions};
pub use check::{check_site, CheckItem, CheckReport, CheckStatus};
pub use config::{BuildConfig, ConfigWarning};
pub use error::{FolioError, FolioResult};
pub use models::SiteData;
pub use render::render_page;
