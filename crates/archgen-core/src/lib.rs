//! archgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for archgen, a
//! clean-architecture scaffolding generator for Go services. It follows
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        archgen-cli (two binaries)       │
//! │      archgen        archgen-impl        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService   AnalysisService      │
//! │          ImplementationService          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, TemplateRenderer,           │
//! │ SourceParser, Reporter                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    archgen-adapters (Infrastructure)    │
//! │  LocalFilesystem, HandlebarsRenderer,   │
//! │  GoSourceParser, TracingReporter        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ ProjectDescription, SourceModel,        │
//! │ blueprint planning, Go emitters         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use archgen_core::prelude::*;
//! # fn adapters() -> (Box<dyn TemplateRenderer>, Box<dyn Filesystem>, Box<dyn Reporter>) { unimplemented!() }
//!
//! let (renderer, filesystem, reporter) = adapters();
//! let service = ScaffoldService::new(renderer, filesystem, reporter);
//!
//! let desc = service.load_description("cta.json")?;
//! let summary = service.generate(&desc, "./my-service", WritePolicy::default())?;
//! println!("{summary}");
//! # Ok::<(), ArchgenError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnalysisService, ImplementationService, ScaffoldService, WriteSummary,
        ports::{Filesystem, Reporter, Severity, SourceParser, TemplateRenderer},
    };
    pub use crate::domain::{
        DatabaseKind, GeneratorOptions, Layer, ProjectDescription, ServerKind, SourceModel,
        TemplateName, WritePolicy,
    };
    pub use crate::error::{ArchgenError, ArchgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
