// ABOUTME: Git integration: process runner and the stage/commit/push sequence

pub mod runner;
pub mod sequencer;

pub use runner::{CommandOutput, GitError, GitInvocation, GitRunner, SystemGit};
pub use sequencer::{
    remediation_hints, spawn_push, PushEvent, PushOutcome, PushPlan, PushRequest, PushSequencer,
    SequenceStage, Severity,
};
