//! schemaforge - orchestration of external XML-stack code generators
//!
//! Three independent components wrap the generators of a classic XML web
//! service toolchain: [`generation::SchemaCompiler`] drives the external
//! schema-to-source compiler, [`generation::ServiceStubGenerator`] fans
//! stub generation out over a batch of service descriptions, and
//! [`generation::DocTransformer`] renders schema documents to pages
//! through a stylesheet engine. Each is idempotent given the same inputs
//! and safe for a surrounding build system to skip when nothing changed.

pub mod application;
pub mod generation;
pub mod infrastructure;

pub use generation::{GenerationError, StubFailure};
