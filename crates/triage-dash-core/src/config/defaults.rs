//! Reference values used by the `Default` impls.

pub const POLL_INTERVAL_MS: u64 = 5_000;
pub const BASE_URL: &str = "http://localhost:8080";
pub const GRAPHQL_PATH: &str = "/hasura/v1/graphql";
pub const WORKFLOW_STATUS_PATH: &str = "/api/workflows/status";
pub const FAILED_WORKFLOWS_PATH: &str = "/api/workflows/failed";
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DAY_COUNT: u32 = 5;
/// One leap year of daily buckets.
pub const MAX_DAY_COUNT: u32 = 366;
pub const DETECTORS: [&str; 2] = ["noseyparker", "yara_scanner"];
