//! Test utilities for startup sequence tests.

mod failing;
pub mod harness;

pub use failing::{
    FailingAdministrationService, FailingAppRegistry, FailingDeployService, FailingFormResolver,
    FailingLocationService, FailingLocationTagProvider,
};
pub use harness::{SetupHarness, SetupHarnessBuilder};
