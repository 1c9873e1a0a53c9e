//! Verifier access and the end-to-end prove-then-verify pipeline.

pub mod caller;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod verifier;

pub use caller::{CallOutcome, ContractCaller, RpcContractCaller};
pub use config::{ConfigError, JobConfig, RunnerConfig};
pub use error::{ClientError, Result};
pub use pipeline::{adapter_for, PipelineReport, ProofPipeline};
pub use verifier::{encode_verify_call, VerifierClient};
